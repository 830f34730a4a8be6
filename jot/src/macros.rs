//! Print macros.
//!
//! The macros accept any number of arguments of mixed types, convert each one with
//! [`ToValue`][crate::ToValue], and forward the call to a gate:
//!
//! - `jot!`: [`Gate::print`][crate::Gate::print]
//! - `jotf!`: [`Gate::printf`][crate::Gate::printf]
//! - `jotln!`: [`Gate::println`][crate::Gate::println]
//!
//! Without a target they use the process-wide gate; `in gate;` targets a specific one.
//! Arguments are not evaluated while the target gate is disabled.

/// Prints via a gate in the manner of [`sprint`][crate::format::sprint].
///
/// # Examples
///
/// ```rust
/// use jot::jot;
///
/// let some_param = "db-1";
/// jot!("Calling connect_to_thing ", some_param);
///
/// let gate = jot::Gate::default();
/// jot!(in gate; "attempt", 3);
/// ```
#[macro_export]
macro_rules! jot {
    (in $gate:expr; $($arg:expr),* $(,)?) => {{
        let gate: &$crate::Gate = &$gate;
        if gate.is_enabled() {
            gate.print(&[$($crate::ToValue::to_value(&$arg)),*]);
        }
    }};
    ($($arg:expr),* $(,)?) => {
        $crate::jot!(in $crate::global(); $($arg),*)
    };
}

/// Prints via a gate in the manner of [`sprintf`][crate::format::sprintf].
///
/// # Examples
///
/// ```rust
/// use jot::jotf;
///
/// let user = String::from("alice");
/// let acl = "rw";
/// jotf!("User: %s ACL: %s", user, acl);
///
/// let gate = jot::Gate::default();
/// jotf!(in gate; "TRACER: result is %v", 42);
/// ```
#[macro_export]
macro_rules! jotf {
    (in $gate:expr; $format:expr $(, $arg:expr)* $(,)?) => {{
        let gate: &$crate::Gate = &$gate;
        if gate.is_enabled() {
            gate.printf($format, &[$($crate::ToValue::to_value(&$arg)),*]);
        }
    }};
    ($format:expr $(, $arg:expr)* $(,)?) => {
        $crate::jotf!(in $crate::global(); $format $(, $arg)*)
    };
}

/// Prints via a gate in the manner of [`sprintln`][crate::format::sprintln].
///
/// # Examples
///
/// ```rust
/// use jot::jotln;
///
/// let point = (3, 4);
/// jotln!("moved to", format_args!("{point:?}"));
///
/// let gate = jot::Gate::default();
/// jotln!(in gate; "done");
/// ```
#[macro_export]
macro_rules! jotln {
    (in $gate:expr; $($arg:expr),* $(,)?) => {{
        let gate: &$crate::Gate = &$gate;
        if gate.is_enabled() {
            gate.println(&[$($crate::ToValue::to_value(&$arg)),*]);
        }
    }};
    ($($arg:expr),* $(,)?) => {
        $crate::jotln!(in $crate::global(); $($arg),*)
    };
}
