use log::Level;

use super::Sink;
use crate::Value;
use crate::format::{sprint, sprintf, sprintln};

/// Sink that forwards every call to the [`log`] facade.
///
/// Messages are rendered with the [`format`][crate::format] helpers, stripped of a trailing
/// newline, and logged at a fixed level and target (`Debug` and `jot` by default).
/// Whether they appear is then up to the installed logger and its filters.
///
/// # Examples
///
/// ```rust
/// use jot::LogSink;
/// use log::Level;
///
/// jot::set_sink(LogSink::new().with_level(Level::Info).with_target("my_app::notes"));
/// ```
#[derive(Debug, Clone)]
pub struct LogSink {
    level: Level,
    target: &'static str,
}

impl LogSink {
    /// Creates a sink logging at [`Level::Debug`] under the `jot` target.
    pub const fn new() -> Self {
        Self {
            level: Level::Debug,
            target: "jot",
        }
    }

    /// Sets the level messages are logged at.
    pub const fn with_level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    /// Sets the target messages are logged under.
    pub const fn with_target(mut self, target: &'static str) -> Self {
        self.target = target;
        self
    }

    fn log(&self, message: &str) {
        let message = message.strip_suffix('\n').unwrap_or(message);
        log::log!(target: self.target, self.level, "{message}");
    }
}

impl Default for LogSink {
    fn default() -> Self {
        Self::new()
    }
}

impl Sink for LogSink {
    fn print(&self, args: &[Value<'_>]) {
        self.log(&sprint(args));
    }

    fn printf(&self, format: &str, args: &[Value<'_>]) {
        self.log(&sprintf(format, args));
    }

    fn println(&self, args: &[Value<'_>]) {
        self.log(&sprintln(args));
    }
}
