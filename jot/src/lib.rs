//! # `jot`
//!
//! A switchable logger for notes developers make during development.
//!
//! It is similar in concept to the `debug` level that many loggers provide: a way of annotating
//! code with messages that only show up at runtime when someone asks for them.
//! Unlike a log level, the switch is a single runtime flag that can be flipped at any point, for
//! example from a hidden admin endpoint.
//!
//! ## Components
//!
//! - [`Gate`]: holds the enabled flag and the active [`Sink`], and forwards print calls to the
//!   sink only while enabled
//! - [`Sink`]: where forwarded calls end up; [`WriterSink`] (stderr by default),
//!   [`RecordingSink`] for tests, [`NopSink`], and `LogSink` with the `log` feature
//! - A process-wide gate behind the top-level functions ([`enable`], [`print`], ...) and the
//!   [`jot!`], [`jotf!`] and [`jotln!`] macros
//!
//! ## Feature Flags
//!
//! - `log` - Enable `LogSink`, which forwards to the [`log`](https://docs.rs/log) facade
//!
//! ## Basic Usage
//!
//! ```rust
//! use jot::{jot, jotf};
//!
//! # let (some_param, user, acl) = ("p", "u", "a");
//! jot!("Calling connect_to_thing ", some_param);
//! jotf!("User: %s ACL: %s", user, acl);
//! ```
//!
//! Nothing is printed until the process-wide gate is enabled:
//!
//! ```rust
//! jot::enable();
//! jot::jot!("This is printed");
//! jot::disable();
//! jot::jot!("This is not");
//! ```
//!
//! By default output goes to stderr with a local timestamp.
//! Any [`Sink`] can take its place:
//!
//! ```rust
//! use jot::{Timestamp, WriterSink};
//!
//! jot::set_sink(WriterSink::new(std::io::stdout()).with_timestamp(Timestamp::None));
//! ```
//!
//! ## Enabling From The Environment
//!
//! The environment is never consulted implicitly, so there is no generic way to turn on detailed
//! output for every program using this crate.
//! Opting in is one call:
//!
//! ```rust,no_run
//! # fn main() -> Result<(), jot::EnvError> {
//! jot::build().enabled_from_env(jot::DEFAULT_ENV_VAR)?.install();
//! # Ok(())
//! # }
//! ```

mod config;
pub mod format;
mod gate;
pub mod global;
mod macros;
pub mod sink;
mod value;

pub use config::{Builder, DEFAULT_ENV_VAR, EnvError, build};
pub use gate::Gate;
pub use global::{
    disable, enable, global, is_enabled, print, printf, println, reset_sink, set_enabled,
    set_shared_sink, set_sink,
};
#[cfg(feature = "log")]
pub use sink::LogSink;
pub use sink::{Call, NopSink, RecordingSink, Sink, StderrSink, Timestamp, WriterSink};
pub use value::{OwnedValue, ToValue, Value};
