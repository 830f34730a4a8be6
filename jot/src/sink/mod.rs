//! Output sinks that receive forwarded print calls.
//!
//! A [`Gate`][crate::Gate] does not write anything itself.
//! It forwards every call it lets through to a [`Sink`], which decides where and how the text ends
//! up.
//!
//! # Sink Trait
//!
//! The [`Sink`] trait has exactly three operations, one per call style.
//! Custom sinks implement it explicitly; any sink can be swapped in at runtime with
//! [`Gate::set_sink`][crate::Gate::set_sink].
//!
//! # Built-in Sinks
//!
//! - [`WriterSink`] - Writes timestamped lines to any [`std::io::Write`], stderr by default
//! - [`RecordingSink`] - Records every call in memory for testing purposes
//! - [`NopSink`] - Discards everything
//! - `LogSink` - Forwards to the [`log`](https://docs.rs/log) facade (requires the `log` feature)

#[cfg(feature = "log")]
mod log_sink;
mod recording;
mod writer;

use core::fmt::Debug;

#[cfg(feature = "log")]
pub use log_sink::LogSink;
pub use recording::{Call, RecordingSink};
pub use writer::{StderrSink, Timestamp, WriterSink};

use crate::Value;

/// Destination for print calls let through by a [`Gate`][crate::Gate].
///
/// Arguments arrive exactly as the caller passed them.
/// How they are rendered, and what happens if writing fails, is up to the implementation; the
/// helpers in [`format`][crate::format] give the conventional rendering.
///
/// # Examples
///
/// ```rust
/// use jot::format::sprint;
/// use jot::{Sink, Value};
///
/// #[derive(Debug)]
/// struct Shout;
///
/// impl Sink for Shout {
///     fn print(&self, args: &[Value<'_>]) {
///         eprintln!("{}!", sprint(args).to_uppercase());
///     }
///
///     fn printf(&self, format: &str, args: &[Value<'_>]) {
///         eprintln!("{}!", jot::format::sprintf(format, args).to_uppercase());
///     }
///
///     fn println(&self, args: &[Value<'_>]) {
///         eprint!("{}", jot::format::sprintln(args).to_uppercase());
///     }
/// }
///
/// let gate = jot::Gate::new(Shout);
/// gate.enable();
/// gate.print(&[Value::from("hello")]);
/// ```
pub trait Sink: Debug + Send + Sync {
    /// Writes the concatenation of `args`, in the manner of [`sprint`][crate::format::sprint].
    fn print(&self, args: &[Value<'_>]);

    /// Writes `format` with `args` substituted, in the manner of
    /// [`sprintf`][crate::format::sprintf].
    fn printf(&self, format: &str, args: &[Value<'_>]);

    /// Writes `args` separated by spaces and followed by a newline, in the manner of
    /// [`sprintln`][crate::format::sprintln].
    fn println(&self, args: &[Value<'_>]);
}

/// Sink that discards every call.
#[derive(Debug, Default, Clone, Copy)]
pub struct NopSink;

impl Sink for NopSink {
    fn print(&self, _: &[Value<'_>]) {}

    fn printf(&self, _: &str, _: &[Value<'_>]) {}

    fn println(&self, _: &[Value<'_>]) {}
}
