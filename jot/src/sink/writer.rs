use std::fmt;
use std::io::{self, Write};
use std::sync::{Mutex, PoisonError};

use chrono::{Local, Utc};

use super::Sink;
use crate::Value;
use crate::format::{sprint, sprintf, sprintln};

/// How a [`WriterSink`] timestamps each line.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Timestamp {
    /// No timestamp.
    None,
    /// Local date and time, `2024/01/23 01:23:23`.
    #[default]
    Local,
    /// Local date and time with microseconds, `2024/01/23 01:23:23.123123`.
    LocalMicros,
    /// UTC date and time, `2024/01/23 01:23:23`.
    Utc,
}

impl Timestamp {
    const FORMAT: &'static str = "%Y/%m/%d %H:%M:%S";
    const FORMAT_MICROS: &'static str = "%Y/%m/%d %H:%M:%S%.6f";

    /// Appends the current time followed by a space, if any, to `line`.
    fn write_now(self, line: &mut String) {
        use fmt::Write;

        // Writing into a `String` cannot fail.
        let _ = match self {
            Timestamp::None => return,
            Timestamp::Local => write!(line, "{} ", Local::now().format(Self::FORMAT)),
            Timestamp::LocalMicros => write!(line, "{} ", Local::now().format(Self::FORMAT_MICROS)),
            Timestamp::Utc => write!(line, "{} ", Utc::now().format(Self::FORMAT)),
        };
    }
}

/// Sink that writes every call as one line to an [`io::Write`].
///
/// Each line is `{prefix}{timestamp} {message}`, with a newline appended unless the message
/// already ends with one.
/// Lines are written with a single `write_all` under a lock, so concurrent calls never
/// interleave.
///
/// The [`Sink`] methods drop write errors after reporting them through `tracing`; use
/// [`WriterSink::output`] to observe them.
///
/// # Examples
///
/// ```rust
/// use jot::{Timestamp, Value, WriterSink};
/// use jot::Sink;
///
/// let sink = WriterSink::new(Vec::new())
///     .with_prefix("app: ")
///     .with_timestamp(Timestamp::None);
/// sink.println(&[Value::from("ready"), Value::from(true)]);
///
/// assert_eq!(sink.into_inner(), b"app: ready true\n");
/// ```
pub struct WriterSink<W> {
    writer: Mutex<W>,
    prefix: String,
    timestamp: Timestamp,
}

/// The default sink: standard error with local timestamps.
pub type StderrSink = WriterSink<io::Stderr>;

impl<W: Write> WriterSink<W> {
    /// Creates a sink writing to `writer` with [`Timestamp::Local`] and no prefix.
    pub fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
            prefix: String::new(),
            timestamp: Timestamp::default(),
        }
    }

    /// Sets the text written at the start of every line.
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Sets how lines are timestamped.
    pub fn with_timestamp(mut self, timestamp: Timestamp) -> Self {
        self.timestamp = timestamp;
        self
    }

    /// Writes one already rendered message as a line.
    pub fn output(&self, message: &str) -> io::Result<()> {
        let mut line = String::with_capacity(self.prefix.len() + 27 + message.len() + 1);
        line.push_str(&self.prefix);
        self.timestamp.write_now(&mut line);
        line.push_str(message);
        if !message.ends_with('\n') {
            line.push('\n');
        }

        self.writer
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .write_all(line.as_bytes())
    }

    /// Runs `f` with exclusive access to the underlying writer.
    pub fn with_writer<R>(&self, f: impl FnOnce(&mut W) -> R) -> R {
        f(&mut self.writer.lock().unwrap_or_else(PoisonError::into_inner))
    }

    /// Consumes the sink, returning the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn output_or_report(&self, message: &str) {
        if let Err(error) = self.output(message) {
            tracing::warn!(target: "jot", %error, "failed to write to sink");
        }
    }
}

impl WriterSink<io::Stderr> {
    /// Creates the default sink: standard error, [`Timestamp::Local`], no prefix.
    pub fn stderr() -> Self {
        Self::new(io::stderr())
    }
}

impl Default for WriterSink<io::Stderr> {
    fn default() -> Self {
        Self::stderr()
    }
}

impl<W> fmt::Debug for WriterSink<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WriterSink")
            .field("prefix", &self.prefix)
            .field("timestamp", &self.timestamp)
            .finish_non_exhaustive()
    }
}

impl<W: Write + Send> Sink for WriterSink<W> {
    fn print(&self, args: &[Value<'_>]) {
        self.output_or_report(&sprint(args));
    }

    fn printf(&self, format: &str, args: &[Value<'_>]) {
        self.output_or_report(&sprintf(format, args));
    }

    fn println(&self, args: &[Value<'_>]) {
        self.output_or_report(&sprintln(args));
    }
}

#[cfg(test)]
mod tests {
    use std::io;

    use super::{Timestamp, WriterSink};
    use crate::{Sink, Value};
    use indoc::indoc;
    use pretty_assertions::assert_eq;
    use regex::Regex;

    fn output(sink: &WriterSink<Vec<u8>>) -> String {
        sink.with_writer(|buffer| String::from_utf8(buffer.clone()).unwrap())
    }

    #[test]
    fn one_line_per_call() {
        let sink = WriterSink::new(Vec::new()).with_timestamp(Timestamp::None);

        sink.print(&[Value::from("count:"), Value::from(1), Value::from(2)]);
        sink.printf("user %s acl %q", &[Value::from("bob"), Value::from("rw")]);
        sink.println(&[Value::from("done"), Value::from(true)]);
        sink.printf("already terminated\n", &[]);

        assert_eq!(
            output(&sink),
            indoc! {r#"
                count:1 2
                user bob acl "rw"
                done true
                already terminated
            "#}
        );
    }

    #[test]
    fn prefix_comes_before_timestamp() {
        let sink = WriterSink::new(Vec::new())
            .with_prefix("[svc] ")
            .with_timestamp(Timestamp::Local);

        sink.print(&[Value::from("hello")]);

        let pattern = Regex::new(r"^\[svc\] \d{4}/\d{2}/\d{2} \d{2}:\d{2}:\d{2} hello\n$").unwrap();
        let written = output(&sink);
        assert!(pattern.is_match(&written), "unexpected line: {written:?}");
    }

    #[test]
    fn micro_timestamps() {
        let sink = WriterSink::new(Vec::new()).with_timestamp(Timestamp::LocalMicros);

        sink.print(&[Value::from("tick")]);

        let pattern = Regex::new(r"^\d{4}/\d{2}/\d{2} \d{2}:\d{2}:\d{2}\.\d{6} tick\n$").unwrap();
        let written = output(&sink);
        assert!(pattern.is_match(&written), "unexpected line: {written:?}");
    }

    #[test]
    fn output_reports_write_errors() {
        #[derive(Debug)]
        struct Broken;

        impl io::Write for Broken {
            fn write(&mut self, _: &[u8]) -> io::Result<usize> {
                Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
            }

            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        let sink = WriterSink::new(Broken).with_timestamp(Timestamp::None);
        let error = sink.output("lost").unwrap_err();
        assert_eq!(error.kind(), io::ErrorKind::BrokenPipe);

        // The `Sink` methods swallow the error.
        sink.println(&[Value::from("lost")]);
    }

    #[test]
    fn default_sink_is_stderr_with_local_time() {
        let sink = WriterSink::default();
        assert_eq!(
            format!("{sink:?}"),
            r#"WriterSink { prefix: "", timestamp: Local, .. }"#
        );
    }
}
