#![expect(missing_docs, reason = "tests")]

// Runs in its own binary so nothing else touches the process-wide gate first.

use jot::{jot, jotf, jotln};

#[test]
fn process_wide_gate_starts_disabled_with_stderr_sink() {
    assert!(!jot::is_enabled());
    assert_eq!(
        format!("{:?}", jot::global().sink()),
        r#"WriterSink { prefix: "", timestamp: Local, .. }"#
    );

    // Dropped before reaching the sink.
    jot::print(&[jot::Value::from("x")]);
    jot::printf("%s", &[jot::Value::from("x")]);
    jot::println(&[jot::Value::from("x")]);
    jot!("x");
    jotf!("%s", "x");
    jotln!("x");

    let (sink, calls) = jot::RecordingSink::new();
    jot::set_sink(sink);
    jot!("still disabled");
    assert!(!jot::is_enabled());
    assert!(calls.lock().unwrap().is_empty());
}
