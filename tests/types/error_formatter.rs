use erreur::{Erreur, ErreurFormatConfig, Key};

fn sample() -> (Erreur, Key<u8>, Key<&'static str>) {
    let attempt: Key<u8> = Key::new("Attempt");
    let host: Key<&'static str> = Key::new("Host");
    let err = Erreur::create("timeout")
        .with_name("Timeout")
        .with(host.provide("db-1"))
        .with(attempt.provide(3));
    (err, attempt, host)
}

#[test]
fn default_formatter_prints_the_header_only() {
    let (err, _, _) = sample();
    assert_eq!(err.format_with(&ErreurFormatConfig::default()), "Timeout: timeout");
    assert_eq!(err.to_string(), "Timeout: timeout");
}

#[test]
fn compact_formatter_lists_context_on_one_line() {
    let (err, _, _) = sample();
    assert_eq!(
        err.format_with(&ErreurFormatConfig::compact()),
        "Timeout: timeout [Attempt: 3, Host: \"db-1\"]"
    );
}

#[test]
fn compact_formatter_without_context_has_no_brackets() {
    let err = Erreur::create("plain");
    assert_eq!(err.format_with(&ErreurFormatConfig::compact()), "Erreur: plain");
}

#[test]
fn pretty_formatter_is_the_alternate_display() {
    let (err, _, _) = sample();
    let err = err.with_stack_trace("at main.rs:10");

    let expected = "Timeout: timeout\nContext:\n  - Attempt: 3\n  - Host: \"db-1\"\nat main.rs:10";
    assert_eq!(format!("{:#}", err), expected);
    assert_eq!(err.format_with(&ErreurFormatConfig::pretty()), expected);
}

#[test]
fn custom_separator_and_indent() {
    let (err, _, _) = sample();
    let config = ErreurFormatConfig { separator: " | ".into(), ..ErreurFormatConfig::compact() };
    assert_eq!(err.format_with(&config), "Timeout: timeout [Attempt: 3 | Host: \"db-1\"]");

    let config = ErreurFormatConfig { indent: "\t".into(), ..ErreurFormatConfig::pretty() };
    assert_eq!(err.format_with(&config), "Timeout: timeout\nContext:\n\t- Attempt: 3\n\t- Host: \"db-1\"");
}
