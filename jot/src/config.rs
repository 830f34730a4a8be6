//! Gate configuration.
//!
//! [`build()`] returns a [`Builder`] that assembles the initial state of a gate: whether it is
//! enabled and which sink it uses.
//! The result is either a new [`Gate`] or applied to the process-wide gate.
//!
//! # Environment
//!
//! Nothing is read from the environment unless asked for.
//! [`Builder::enabled_from_env`] opts in to a boolean variable, conventionally
//! [`DEFAULT_ENV_VAR`]:
//!
//! ```rust,no_run
//! # fn main() -> Result<(), jot::EnvError> {
//! jot::build()
//!     .enabled_from_env(jot::DEFAULT_ENV_VAR)?
//!     .install();
//! # Ok(())
//! # }
//! ```
//!
//! ```sh
//! export JOTTER_ENABLE=true
//! my_program
//! ```

use std::env::{self, VarError};
use std::sync::Arc;

use crate::sink::{Sink, StderrSink};
use crate::{Gate, global};

/// The conventional name of the variable read by [`Builder::enabled_from_env`].
pub const DEFAULT_ENV_VAR: &str = "JOTTER_ENABLE";

/// Errors that can occur when reading the enabled flag from the environment.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum EnvError {
    /// The variable is set to something that is not a boolean.
    #[error("environment variable `{name}` is set to {value:?}, expected a boolean")]
    InvalidValue {
        /// Name of the variable.
        name: String,
        /// Its value.
        value: String,
    },

    /// The variable is set to something that is not valid unicode.
    #[error("environment variable `{name}` is not valid unicode")]
    NotUnicode {
        /// Name of the variable.
        name: String,
    },
}

/// Builder for the initial state of a gate.
///
/// Created via [`build()`] and finalized with [`build`](Builder::build) or
/// [`install`](Builder::install).
#[derive(Debug, Default)]
#[must_use]
pub struct Builder {
    enabled: bool,
    sink: Option<Arc<dyn Sink>>,
}

/// Creates a new gate builder: disabled, default sink.
///
/// # Example
///
/// ```rust
/// use jot::{RecordingSink, Value};
///
/// let (sink, calls) = RecordingSink::new();
/// let gate = jot::build().enabled(true).sink(sink).build();
///
/// gate.print(&[Value::from("noted")]);
/// assert_eq!(calls.lock().unwrap().len(), 1);
/// ```
pub fn build() -> Builder {
    Builder::default()
}

impl Builder {
    /// Sets whether the gate starts out enabled.
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Sets the sink.
    pub fn sink(self, sink: impl Sink + 'static) -> Self {
        self.shared_sink(Arc::new(sink))
    }

    /// Sets a sink the caller keeps a handle to.
    pub fn shared_sink(mut self, sink: Arc<dyn Sink>) -> Self {
        self.sink = Some(sink);
        self
    }

    /// Sets whether the gate starts out enabled from the environment variable `name`.
    ///
    /// An unset variable leaves the setting unchanged.
    /// `true`, `1`, `yes` and `on` enable; `false`, `0`, `no`, `off` and the empty string
    /// disable.
    /// Case and surrounding whitespace are ignored.
    pub fn enabled_from_env(self, name: &str) -> Result<Self, EnvError> {
        self.enabled_from_var(name, env::var(name))
    }

    fn enabled_from_var(
        mut self,
        name: &str,
        value: Result<String, VarError>,
    ) -> Result<Self, EnvError> {
        match value {
            Ok(value) => {
                self.enabled = parse_flag(&value).ok_or_else(|| EnvError::InvalidValue {
                    name: name.into(),
                    value,
                })?;
                tracing::debug!(
                    target: "jot",
                    name,
                    enabled = self.enabled,
                    "read enabled flag from environment"
                );
                Ok(self)
            }
            Err(VarError::NotPresent) => Ok(self),
            Err(VarError::NotUnicode(_)) => Err(EnvError::NotUnicode { name: name.into() }),
        }
    }

    /// Builds a new, independent [`Gate`].
    pub fn build(self) -> Gate {
        let gate = match self.sink {
            Some(sink) => Gate::with_shared_sink(sink),
            None => Gate::new(StderrSink::default()),
        };
        gate.set_enabled(self.enabled);
        gate
    }

    /// Applies this configuration to the process-wide gate.
    ///
    /// The sink is only replaced if one was configured.
    pub fn install(self) {
        let gate = global::global();
        if let Some(sink) = self.sink {
            gate.set_shared_sink(sink);
        }
        gate.set_enabled(self.enabled);
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use std::env::VarError;
    use std::ffi::OsString;

    use super::{EnvError, build, parse_flag};
    use crate::{Call, OwnedValue, RecordingSink, Value};
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    #[test_case("true", Some(true); "literal true")]
    #[test_case(" Yes\n", Some(true); "padded yes")]
    #[test_case("ON", Some(true); "upper on")]
    #[test_case("1", Some(true); "one")]
    #[test_case("false", Some(false); "literal false")]
    #[test_case("off", Some(false); "off")]
    #[test_case("0", Some(false); "zero")]
    #[test_case("", Some(false); "empty")]
    #[test_case("maybe", None; "word")]
    #[test_case("2", None; "other digit")]
    fn flags(value: &str, expected: Option<bool>) {
        assert_eq!(parse_flag(value), expected);
    }

    #[test]
    fn builds_disabled_by_default() {
        assert!(!build().build().is_enabled());
    }

    #[test]
    fn builds_with_sink_and_flag() {
        let (sink, calls) = RecordingSink::new();
        let gate = build().sink(sink).enabled(true).build();

        gate.println(&[Value::from("hi")]);

        assert_eq!(
            *calls.lock().unwrap(),
            [Call::Println(vec![OwnedValue::Str("hi".into())])]
        );
    }

    #[test]
    fn unset_variable_keeps_setting() {
        let builder = build()
            .enabled(true)
            .enabled_from_var("JOT_TEST", Err(VarError::NotPresent))
            .unwrap();
        assert!(builder.build().is_enabled());
    }

    #[test]
    fn set_variable_overrides_setting() {
        let builder = build()
            .enabled(true)
            .enabled_from_var("JOT_TEST", Ok("off".into()))
            .unwrap();
        assert!(!builder.build().is_enabled());
    }

    #[test]
    fn invalid_values_are_rejected() {
        let error = build()
            .enabled_from_var("JOT_TEST", Ok("sometimes".into()))
            .unwrap_err();

        assert_eq!(
            error,
            EnvError::InvalidValue {
                name: "JOT_TEST".into(),
                value: "sometimes".into(),
            }
        );
        assert_eq!(
            error.to_string(),
            r#"environment variable `JOT_TEST` is set to "sometimes", expected a boolean"#
        );
    }

    #[test]
    fn non_unicode_values_are_rejected() {
        let error = build()
            .enabled_from_var("JOT_TEST", Err(VarError::NotUnicode(OsString::new())))
            .unwrap_err();

        assert_eq!(
            error,
            EnvError::NotUnicode {
                name: "JOT_TEST".into()
            }
        );
    }
}
