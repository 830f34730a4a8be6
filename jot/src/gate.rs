//! The enabled/disabled switch in front of a sink.
//!
//! A [`Gate`] holds two pieces of state: whether it is enabled, and the [`Sink`] it forwards to.
//! Print calls are passed to the sink unchanged while the gate is enabled and dropped otherwise.
//!
//! # States
//!
//! A gate is either disabled (the initial state) or enabled.
//! [`Gate::enable`] and [`Gate::disable`] switch between the two, always succeed, and are
//! idempotent.
//!
//! # Concurrency
//!
//! A gate is shared by reference between threads.
//! The flag is an atomic; the sink sits behind a lock that is only held long enough to clone its
//! [`Arc`], so every forwarded call runs against one consistent sink even while another thread
//! replaces it, and a sink may call back into its own gate.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, PoisonError, RwLock};

use crate::Value;
use crate::sink::{Sink, StderrSink};

/// Conditionally forwards print calls to a [`Sink`].
///
/// # Examples
///
/// ```rust
/// use jot::{Gate, Timestamp, Value, WriterSink};
///
/// let gate = Gate::new(WriterSink::new(std::io::stdout()).with_timestamp(Timestamp::None));
///
/// gate.print(&[Value::from("dropped")]);
///
/// gate.enable();
/// gate.printf("User: %s ACL: %s", &[Value::from("alice"), Value::from("rw")]);
/// ```
#[derive(Debug)]
pub struct Gate {
    enabled: AtomicBool,
    sink: RwLock<Arc<dyn Sink>>,
}

impl Gate {
    /// Creates a disabled gate forwarding to `sink`.
    pub fn new(sink: impl Sink + 'static) -> Self {
        Self::with_shared_sink(Arc::new(sink))
    }

    /// Creates a disabled gate forwarding to a sink the caller keeps a handle to.
    pub fn with_shared_sink(sink: Arc<dyn Sink>) -> Self {
        Self {
            enabled: AtomicBool::new(false),
            sink: RwLock::new(sink),
        }
    }

    /// Enables forwarding.
    pub fn enable(&self) {
        self.set_enabled(true);
    }

    /// Disables forwarding.
    pub fn disable(&self) {
        self.set_enabled(false);
    }

    /// Enables or disables forwarding.
    pub fn set_enabled(&self, enabled: bool) {
        let was_enabled = self.enabled.swap(enabled, Ordering::AcqRel);
        if was_enabled != enabled {
            tracing::debug!(target: "jot", enabled, "gate toggled");
        }
    }

    /// Returns whether calls are currently forwarded.
    pub fn is_enabled(&self) -> bool {
        self.enabled.load(Ordering::Acquire)
    }

    /// Replaces the sink, returning the previous one.
    ///
    /// The enabled flag is left as it is.
    pub fn set_sink(&self, sink: impl Sink + 'static) -> Arc<dyn Sink> {
        self.set_shared_sink(Arc::new(sink))
    }

    /// Replaces the sink with one the caller keeps a handle to, returning the previous one.
    pub fn set_shared_sink(&self, sink: Arc<dyn Sink>) -> Arc<dyn Sink> {
        tracing::debug!(target: "jot", ?sink, "sink replaced");
        let mut current = self.sink.write().unwrap_or_else(PoisonError::into_inner);
        std::mem::replace(&mut *current, sink)
    }

    /// Restores the default [`StderrSink`], returning the previous sink.
    pub fn reset_sink(&self) -> Arc<dyn Sink> {
        self.set_sink(StderrSink::default())
    }

    /// Returns the sink calls are currently forwarded to.
    pub fn sink(&self) -> Arc<dyn Sink> {
        self.sink
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Forwards to [`Sink::print`] if enabled.
    pub fn print(&self, args: &[Value<'_>]) {
        if self.is_enabled() {
            self.sink().print(args);
        }
    }

    /// Forwards to [`Sink::printf`] if enabled.
    ///
    /// `format` is not validated here; mismatches are rendered by the sink.
    pub fn printf(&self, format: &str, args: &[Value<'_>]) {
        if self.is_enabled() {
            self.sink().printf(format, args);
        }
    }

    /// Forwards to [`Sink::println`] if enabled.
    pub fn println(&self, args: &[Value<'_>]) {
        if self.is_enabled() {
            self.sink().println(args);
        }
    }
}

impl Default for Gate {
    /// A disabled gate writing to standard error with local timestamps.
    fn default() -> Self {
        Self::new(StderrSink::default())
    }
}
