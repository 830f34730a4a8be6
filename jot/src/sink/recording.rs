use std::sync::{Arc, Mutex, PoisonError};

use super::Sink;
use crate::value::{OwnedValue, Value};

/// A single call received by a [`RecordingSink`].
#[derive(Clone, Debug, PartialEq)]
pub enum Call {
    /// A [`Sink::print`] call.
    Print(Vec<OwnedValue>),
    /// A [`Sink::printf`] call.
    Printf(String, Vec<OwnedValue>),
    /// A [`Sink::println`] call.
    Println(Vec<OwnedValue>),
}

/// A sink for testing that stores every call in memory, in order.
///
/// Arguments are stored as [`OwnedValue`]s, so a test can check that they arrived unchanged.
/// The log is only reachable through the handle returned by [`RecordingSink::new`]:
///
/// ```rust,compile_fail
/// let (sink, _) = jot::RecordingSink::new();
/// let _ = &sink.calls;
/// ```
#[derive(Debug)]
pub struct RecordingSink {
    calls: Arc<Mutex<Vec<Call>>>,
}

impl RecordingSink {
    /// Creates a new recording sink and returns both the sink and a handle to its call log.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use jot::{Call, Gate, OwnedValue, RecordingSink, Value};
    ///
    /// let (sink, calls) = RecordingSink::new();
    /// let gate = Gate::new(sink);
    /// gate.enable();
    /// gate.print(&[Value::from("x")]);
    ///
    /// assert_eq!(
    ///     *calls.lock().unwrap(),
    ///     [Call::Print(vec![OwnedValue::Str("x".into())])]
    /// );
    /// ```
    pub fn new() -> (Self, Arc<Mutex<Vec<Call>>>) {
        let calls = Arc::new(Mutex::new(Vec::new()));
        (
            Self {
                calls: calls.clone(),
            },
            calls,
        )
    }

    fn record(&self, call: Call) {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(call);
    }
}

fn to_static(args: &[Value<'_>]) -> Vec<OwnedValue> {
    args.iter().map(Value::to_static).collect()
}

impl Sink for RecordingSink {
    fn print(&self, args: &[Value<'_>]) {
        self.record(Call::Print(to_static(args)));
    }

    fn printf(&self, format: &str, args: &[Value<'_>]) {
        self.record(Call::Printf(format.into(), to_static(args)));
    }

    fn println(&self, args: &[Value<'_>]) {
        self.record(Call::Println(to_static(args)));
    }
}

#[cfg(test)]
mod tests {
    use super::{Call, RecordingSink};
    use crate::{OwnedValue, Sink, Value};
    use pretty_assertions::assert_eq;

    #[test]
    fn records_calls_in_order() {
        let (sink, calls) = RecordingSink::new();

        sink.println(&[Value::from("a"), Value::from(1)]);
        sink.printf("%s=%d", &[Value::from("b"), Value::from(2u8)]);
        sink.print(&[]);

        assert_eq!(
            *calls.lock().unwrap(),
            [
                Call::Println(vec![OwnedValue::Str("a".into()), OwnedValue::I64(1)]),
                Call::Printf(
                    "%s=%d".into(),
                    vec![OwnedValue::Str("b".into()), OwnedValue::U64(2)]
                ),
                Call::Print(vec![]),
            ]
        );
    }
}
