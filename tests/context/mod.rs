use erreur::{context_fn, with_context, with_context_result, wrap, Erreur, Key};

#[test]
fn wrap_passes_success_through() {
    let value = wrap(|| Ok::<_, std::num::ParseIntError>(5), |_| Erreur::create("unused"));
    assert_eq!(value, Ok(5));
}

#[test]
fn wrap_keeps_erreur_errors() {
    let original = Erreur::create("already typed");
    let result = wrap(|| Err::<(), _>(original.clone()), |_| Erreur::create("replaced"));
    assert_eq!(result, Err(original));
}

#[test]
fn wrap_converts_foreign_errors() {
    let result = wrap(|| "abc".parse::<i32>(), |e| Erreur::create(e.to_string()).with_name("ParseError"));

    let err = result.unwrap_err();
    assert_eq!(err.name(), "ParseError");
    assert_eq!(err.message(), "invalid digit found in string");
}

#[test]
fn with_context_converts_and_annotates() {
    let table: Key<&'static str> = Key::new("Table");
    let err = with_context("row missing", table.provide("users"));

    assert_eq!(err.message(), "row missing");
    assert_eq!(err.get(&table), Some(&"users"));
}

#[test]
fn with_context_result_only_touches_errors() {
    let table: Key<&'static str> = Key::new("Table");

    let ok: Result<u8, &str> = Ok(1);
    assert_eq!(with_context_result(ok, table.provide("users")), Ok(1));

    let failed: Result<u8, &str> = Err("locked");
    let err = with_context_result(failed, table.provide("users")).unwrap_err();
    assert_eq!(err.get(&table), Some(&"users"));
}

#[test]
fn context_fn_is_reusable() {
    let stage: Key<&'static str> = Key::new("Stage");
    let annotate = context_fn(stage.provide("decode"));

    let first: Erreur = annotate("bad header");
    let second: Erreur = annotate("bad body");
    assert_eq!(first.get(&stage), Some(&"decode"));
    assert_eq!(second.get(&stage), Some(&"decode"));
    assert_eq!(second.message(), "bad body");
}

#[cfg(feature = "std")]
mod resolving {
    use erreur::{resolve, Erreur};

    #[test]
    fn returns_the_value_without_panic() {
        assert_eq!(resolve(|| 40 + 2, Erreur::from_panic), Ok(42));
    }

    #[test]
    fn converts_string_panics() {
        let err = resolve(|| -> u8 { panic!("exploded {}", 1) }, Erreur::from_panic).unwrap_err();
        assert_eq!(err.message(), "exploded 1");
    }

    #[test]
    fn erreur_payload_passes_through() {
        let original = Erreur::create("typed panic").with_name("Typed");
        let raised = original.clone();

        let err = resolve(move || std::panic::panic_any(raised), |_| Erreur::create("replaced")).unwrap_err();
        assert_eq!(err, original);
    }

    #[test]
    fn opaque_payloads_use_the_handler() {
        let err = resolve(|| std::panic::panic_any(17u32), |_| Erreur::create("opaque")).unwrap_err();
        assert_eq!(err.message(), "opaque");

        let err = resolve(|| std::panic::panic_any(17u32), Erreur::from_panic).unwrap_err();
        assert_eq!(err.message(), "ErrorFromUnknown");
    }
}
