#![expect(missing_docs, reason = "example")]

use jot::{jot, jotf, jotln};

fn main() {
    jot::build()
        .enabled_from_env(jot::DEFAULT_ENV_VAR)
        .expect("JOTTER_ENABLE is a boolean")
        .install();

    jot!("Calling connect_to_thing ", 42);
    connect("alice");

    // Flip the switch at runtime, e.g. from an admin endpoint.
    jot::enable();
    connect("bob");
    jot::disable();
    connect("carol");
}

fn connect(user: &str) {
    jotf!("User: %s ACL: %q", user, "rw");
    jotln!("TRACER: connected", user);
}
