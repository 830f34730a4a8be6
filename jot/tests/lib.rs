#![expect(missing_docs, reason = "tests")]

use std::sync::{Arc, Mutex};

use jot::{Call, OwnedValue, RecordingSink, Value, jot, jotf, jotln};
use pretty_assertions::assert_eq;
use serial_test::serial;

/// Installs a fresh recording sink on the disabled process-wide gate.
fn record_global() -> Arc<Mutex<Vec<Call>>> {
    let (sink, calls) = RecordingSink::new();
    jot::disable();
    jot::set_sink(sink);
    calls
}

fn str(value: &str) -> OwnedValue {
    OwnedValue::Str(value.into())
}

#[test]
#[serial]
fn top_level_functions_follow_the_flag() {
    let calls = record_global();

    jot::print(&[Value::from("x")]);
    assert!(calls.lock().unwrap().is_empty());

    jot::enable();
    jot::print(&[Value::from("x")]);
    jot::printf("%d items", &[Value::from(3)]);
    jot::disable();
    jot::println(&[Value::from("y")]);

    assert_eq!(
        *calls.lock().unwrap(),
        [
            Call::Print(vec![str("x")]),
            Call::Printf("%d items".into(), vec![OwnedValue::I64(3)]),
        ]
    );
}

#[test]
#[serial]
fn macros_use_the_process_wide_gate() {
    let calls = record_global();
    let user = String::from("alice");

    jot::set_enabled(true);
    jot!("Calling connect_to_thing ", 42);
    jotf!("User: %s ACL: %s", user, "rw");
    jotln!("TRACER: result is", user);
    jot::set_enabled(false);
    jot!("not recorded");

    assert_eq!(
        *calls.lock().unwrap(),
        [
            Call::Print(vec![str("Calling connect_to_thing "), OwnedValue::I64(42)]),
            Call::Printf("User: %s ACL: %s".into(), vec![str("alice"), str("rw")]),
            Call::Println(vec![str("TRACER: result is"), str("alice")]),
        ]
    );
}

#[test]
#[serial]
fn set_sink_keeps_the_flag() {
    let first = record_global();
    let (sink, second) = RecordingSink::new();

    jot::enable();
    let previous = jot::set_sink(sink);
    assert!(jot::is_enabled());
    jot!("to second");
    jot::disable();

    previous.print(&[Value::from("to first")]);
    assert_eq!(*first.lock().unwrap(), [Call::Print(vec![str("to first")])]);
    assert_eq!(*second.lock().unwrap(), [Call::Print(vec![str("to second")])]);

    let previous = jot::set_shared_sink(Arc::new(jot::NopSink));
    assert!(!jot::is_enabled());
    assert!(format!("{previous:?}").starts_with("RecordingSink"));

    jot::reset_sink();
    assert!(format!("{:?}", jot::global().sink()).starts_with("WriterSink"));
}

#[test]
#[serial]
fn install_applies_configuration_from_the_environment() {
    const VAR: &str = "JOT_INTEGRATION_ENABLE";
    let calls = record_global();

    // SAFETY: `#[serial]` keeps the other tests in this binary from running concurrently.
    unsafe { std::env::set_var(VAR, "yes") };
    jot::build().enabled_from_env(VAR).unwrap().install();
    assert!(jot::is_enabled());
    jot!("configured");

    // SAFETY: as above.
    unsafe { std::env::set_var(VAR, "nope") };
    let error = jot::build().enabled_from_env(VAR).unwrap_err();
    assert!(matches!(error, jot::EnvError::InvalidValue { .. }));

    // An unset variable leaves the builder's own setting, disabled, in place.
    // SAFETY: as above.
    unsafe { std::env::remove_var(VAR) };
    jot::build().enabled_from_env(VAR).unwrap().install();
    assert!(!jot::is_enabled());

    // `install` without a sink keeps the current one.
    assert_eq!(*calls.lock().unwrap(), [Call::Print(vec![str("configured")])]);
}

#[test]
#[serial]
fn concurrent_callers_share_one_switch() {
    let calls = record_global();
    jot::enable();

    let threads: Vec<_> = (0..4)
        .map(|thread| {
            std::thread::spawn(move || {
                for round in 0..25 {
                    jotf!("thread %d round %d", thread, round);
                }
            })
        })
        .collect();
    for thread in threads {
        thread.join().unwrap();
    }
    jot::disable();

    let calls = calls.lock().unwrap();
    assert_eq!(calls.len(), 100);
    assert!(calls.iter().all(|call| matches!(
        call,
        Call::Printf(format, args) if format == "thread %d round %d" && args.len() == 2
    )));
}
