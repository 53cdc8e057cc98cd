use std::error::Error;

use erreur::{DebugEntry, Erreur, JsonValue, Key, Stack, MESSAGE_KEY, NAME_KEY};

#[test]
fn bare_error_uses_documented_fallbacks() {
    let err = Erreur::new();

    assert_eq!(err.name(), "Erreur");
    assert_eq!(err.message(), "[Erreur]");
    assert_eq!(err.stack_trace(), None);
    assert!(err.cause().is_none());
    assert!(err.stack().is_empty());
    assert_eq!(err.to_string(), "Erreur: [Erreur]");
}

#[test]
fn annotations_return_new_errors() {
    let code: Key<u16> = Key::new("Code");
    let base = Erreur::create("boom");
    let annotated = base.with(code.provide(500)).with_name("ServerError");

    assert_eq!(base.get(&code), None);
    assert_eq!(base.name(), "Erreur");
    assert_eq!(annotated.get(&code), Some(&500));
    assert_eq!(annotated.name(), "ServerError");
    assert_eq!(annotated.message(), "boom");
}

#[test]
fn create_with_accepts_providers() {
    let code: Key<u16> = Key::new("Code");
    let err = Erreur::create_with([MESSAGE_KEY.provide("boom".into()), code.provide(500)]);

    assert_eq!(err.message(), "boom");
    assert_eq!(err.debug(), [DebugEntry::new("Code", 500u16), DebugEntry::new("Message", "boom")]);
}

#[test]
fn get_or_fail_delegates_to_the_stack() {
    let user: Key<u64> = Key::new("UserId");
    let err = Erreur::create("not found");

    assert_eq!(err.get_or_fail(&user).unwrap_err().key(), "UserId");
    assert_eq!(err.get_or_fail(&NAME_KEY).map(|name| &**name), Ok("Erreur"));
    assert!(!err.has(&NAME_KEY));
}

#[test]
fn merge_returns_self_when_nothing_changes() {
    let err = Erreur::create("boom").with_name("Boom");

    assert_eq!(err.merge(&err), err);
    assert_eq!(err.merge(&Erreur::new()), err);
}

#[test]
fn merge_layers_annotations() {
    let host: Key<&'static str> = Key::new("Host");
    let base = Erreur::create("request failed").with_name("HttpError");
    let cause = Erreur::create("timeout").with_name("IoError").with(host.provide("db"));

    let merged = base.merge(&cause);
    assert_eq!(merged.name(), "HttpError");
    assert_eq!(merged.message(), "request failed");
    assert_eq!(merged.get(&host), Some(&"db"));

    let reversed = base.merge_on(&cause);
    assert_eq!(reversed.name(), "IoError");
    assert_eq!(reversed.message(), "timeout");
}

#[test]
fn dedupe_returns_self_without_duplicates() {
    let err = Erreur::create("boom");
    assert_eq!(err.dedupe(), err);

    let noisy = err.with_message("boom again").with_message("final");
    let deduped = noisy.dedupe();
    assert_ne!(deduped, noisy);
    assert_eq!(deduped.debug(), [DebugEntry::new("Message", "final")]);
}

#[test]
fn equality_is_identity() {
    let a = Erreur::create("same");
    let b = Erreur::create("same");

    assert_ne!(a, b);
    assert_eq!(a, a.clone());
}

#[test]
fn json_projection_falls_back_to_name_and_message() {
    let err = Erreur::create("boom").with_name("Boom");

    let json = err.to_json();
    assert_eq!(json.get("name").and_then(JsonValue::as_str), Some("Boom"));
    assert_eq!(json.get("message").and_then(JsonValue::as_str), Some("boom"));

    let custom = err.with_json(serde_json::json!({ "code": 7 }));
    assert_eq!(custom.to_json()["code"], 7);
}

#[test]
fn json_projection_keeps_large_integers_exact() {
    let err = Erreur::create("overflow").with_json(JsonValue::from(9_007_199_254_740_993i64));

    assert_eq!(err.to_json().as_i64(), Some(9_007_199_254_740_993));
    assert_ne!(err.to_json(), JsonValue::from(9_007_199_254_740_992i64));
}

#[test]
fn cause_is_the_error_source() {
    let cause = Erreur::create("disk full");
    let err = Erreur::create("write failed").with_cause(cause.clone());

    assert_eq!(err.cause(), Some(&cause));
    let source = err.source().map(ToString::to_string);
    assert_eq!(source.as_deref(), Some("Erreur: disk full"));
}

#[test]
fn from_error_keeps_erreur_and_converts_others() {
    let original = Erreur::create("mine");
    assert_eq!(Erreur::from_error(original.clone()), original);

    let io = std::io::Error::new(std::io::ErrorKind::Other, "io broke");
    assert_eq!(Erreur::from_error(io).message(), "io broke");
}

#[test]
fn from_panic_handles_known_payloads() {
    let original = Erreur::create("raised");

    assert_eq!(Erreur::from_panic(Box::new(original.clone())), original);
    assert_eq!(Erreur::from_panic(Box::new(String::from("owned"))).message(), "owned");
    assert_eq!(Erreur::from_panic(Box::new("static")).message(), "static");
    assert_eq!(Erreur::from_panic(Box::new(42u8)).message(), "ErrorFromUnknown");
}

#[test]
fn is_recognises_erreur_values() {
    let err = Erreur::create("boom");
    let io = std::io::Error::new(std::io::ErrorKind::Other, "io");

    assert!(Erreur::is(&err));
    assert!(!Erreur::is(&io));
}

#[test]
fn stack_trace_is_injected() {
    let err = Erreur::create("boom").with_stack_trace("at main.rs:1");
    assert_eq!(err.stack_trace(), Some("at main.rs:1"));
}

#[test]
fn stack_round_trips() {
    let code: Key<u8> = Key::new("Code");
    let stack = Stack::new().push(code.provide(1));

    let err = Erreur::from(stack.clone());
    assert!(err.stack().ptr_eq(&stack));
    assert!(err.into_stack().ptr_eq(&stack));
}

#[cfg(feature = "std")]
#[test]
fn capture_sets_the_message() {
    let err = Erreur::capture("captured");
    assert_eq!(err.message(), "captured");
}

#[cfg(feature = "std")]
#[test]
fn from_boxed_unwraps_erreur() {
    let original = Erreur::create("boxed");
    let boxed: Box<dyn Error + Send + Sync> = Box::new(original.clone());
    assert_eq!(Erreur::from_boxed(boxed), original);

    let foreign: Box<dyn Error + Send + Sync> = "plain".into();
    assert_eq!(Erreur::from_boxed(foreign).message(), "plain");
}
