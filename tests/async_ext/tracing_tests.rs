//! Tests for the tracing integration.

use erreur::prelude_async::*;
use erreur::tracing_ext::SPAN_KEY;
use tracing::span::{Attributes, Id, Record};
use tracing::{Event, Metadata, Subscriber};

/// Subscriber enabling every span so that span metadata is kept.
struct EnableAll;

impl Subscriber for EnableAll {
    fn enabled(&self, _: &Metadata<'_>) -> bool {
        true
    }

    fn new_span(&self, _: &Attributes<'_>) -> Id {
        Id::from_u64(1)
    }

    fn record(&self, _: &Id, _: &Record<'_>) {}

    fn record_follows_from(&self, _: &Id, _: &Id) {}

    fn event(&self, _: &Event<'_>) {}

    fn enter(&self, _: &Id) {}

    fn exit(&self, _: &Id) {}
}

#[test]
fn nothing_is_recorded_outside_spans() {
    let result: Result<i32, &str> = Err("failed");
    let err = result.with_current_span().unwrap_err();

    assert!(!err.has(&SPAN_KEY));
    assert_eq!(err.message(), "failed");
}

#[test]
fn ok_passes_through() {
    let result: Result<i32, &str> = Ok(42);
    assert_eq!(result.with_current_span(), Ok(42));
}

#[test]
fn explicit_span_is_recorded() {
    tracing::subscriber::with_default(EnableAll, || {
        let span = tracing::info_span!("load_user");

        let err = Erreur::create("boom").in_span(&span);
        assert_eq!(err.get(&SPAN_KEY), Some(&"load_user"));

        let result: Result<(), &str> = Err("boom");
        assert_eq!(result.with_span(&span).unwrap_err().get(&SPAN_KEY), Some(&"load_user"));
    });
}

#[test]
fn instrument_erreur_converts() {
    let err = instrument_erreur("plain");
    assert_eq!(err.message(), "plain");
}

#[tokio::test]
async fn future_span_context_converts_errors() {
    let span = tracing::Span::none();
    let err = async { Err::<(), _>("async failure") }.with_span(span).await.unwrap_err();

    assert_eq!(err.message(), "async failure");
    assert!(!err.has(&SPAN_KEY));
}
