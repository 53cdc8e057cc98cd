use erreur::{erreur, static_key, DebugEntry, Stack};

static_key! {
    /// Status attached by the tests.
    pub STATUS: Key<u16> = "Status"
}

static_key! {
    pub RETRIES: DefaultKey<u32> = "Retries", default 3
}

static_key! {
    pub FATAL: EmptyKey = "Fatal"
}

#[test]
fn erreur_macro_with_literal() {
    let err = erreur!("plain message");
    assert_eq!(err.message(), "plain message");
}

#[test]
fn erreur_macro_formats_arguments() {
    let id = 42;
    let err = erreur!("user {} not found", id);
    assert_eq!(err.message(), "user 42 not found");

    let err = erreur!("user {id} not found");
    assert_eq!(err.message(), "user 42 not found");
}

#[test]
fn static_keys_work_like_dynamic_ones() {
    let stack = Stack::new().push(STATUS.provide(404)).push(FATAL.provide());

    assert_eq!(stack.get(&STATUS), Some(&404));
    assert_eq!(stack.get(&RETRIES), &3);
    assert_eq!(stack.debug(), [DebugEntry::marker("Fatal"), DebugEntry::new("Status", 404u16)]);
}
