//! The process-wide gate.
//!
//! The functions in this module, re-exported at the crate root, all delegate to one shared
//! [`Gate`] so independent parts of a program can toggle the same switch without passing a gate
//! around.
//! It is constructed on first use, disabled, with the default
//! [`StderrSink`][crate::StderrSink], and lives until the process exits.
//!
//! # Examples
//!
//! ```rust
//! jot::enable();
//! jot::print(&[jot::Value::from("This is printed")]);
//! jot::disable();
//! jot::print(&[jot::Value::from("This is not")]);
//! ```

use std::sync::{Arc, LazyLock};

use crate::{Gate, Sink, Value};

static GLOBAL_GATE: LazyLock<Gate> = LazyLock::new(Gate::default);

/// Returns the process-wide gate.
pub fn global() -> &'static Gate {
    &GLOBAL_GATE
}

/// Enables output from the process-wide gate.
pub fn enable() {
    global().enable();
}

/// Disables output from the process-wide gate.
pub fn disable() {
    global().disable();
}

/// Enables or disables output from the process-wide gate.
pub fn set_enabled(enabled: bool) {
    global().set_enabled(enabled);
}

/// Returns whether the process-wide gate is enabled.
pub fn is_enabled() -> bool {
    global().is_enabled()
}

/// Replaces the sink of the process-wide gate, returning the previous one.
pub fn set_sink(sink: impl Sink + 'static) -> Arc<dyn Sink> {
    global().set_sink(sink)
}

/// Replaces the sink of the process-wide gate with a shared one, returning the previous one.
pub fn set_shared_sink(sink: Arc<dyn Sink>) -> Arc<dyn Sink> {
    global().set_shared_sink(sink)
}

/// Restores the default sink of the process-wide gate, returning the previous one.
pub fn reset_sink() -> Arc<dyn Sink> {
    global().reset_sink()
}

/// Prints via the process-wide gate, see [`Gate::print`].
pub fn print(args: &[Value<'_>]) {
    global().print(args);
}

/// Prints via the process-wide gate, see [`Gate::printf`].
pub fn printf(format: &str, args: &[Value<'_>]) {
    global().printf(format, args);
}

/// Prints via the process-wide gate, see [`Gate::println`].
pub fn println(args: &[Value<'_>]) {
    global().println(args);
}
