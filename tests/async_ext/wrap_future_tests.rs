//! Tests for `wrap_async` and `resolve_async`.

use erreur::async_ext::{resolve_async, wrap_async};
use erreur::Erreur;

#[tokio::test]
async fn wrap_async_passes_erreur_through() {
    let original = Erreur::create("typed");
    let failing = original.clone();

    let err = wrap_async(async move { Err::<(), _>(failing) }, |_| Erreur::create("replaced"))
        .await
        .unwrap_err();
    assert_eq!(err, original);
}

#[tokio::test]
async fn wrap_async_converts_foreign_errors() {
    let err = wrap_async(async { Err::<(), _>(7u8) }, |code| Erreur::create(format!("code {code}")))
        .await
        .unwrap_err();
    assert_eq!(err.message(), "code 7");
}

#[tokio::test]
async fn wrap_async_keeps_success() {
    let value = wrap_async(async { Ok::<_, u8>("done") }, |_| Erreur::new()).await;
    assert_eq!(value, Ok("done"));
}

#[tokio::test]
async fn resolve_async_catches_panics_while_polling() {
    let result: Result<u8, Erreur> = resolve_async(
        async {
            tokio::task::yield_now().await;
            panic!("worker died");
        },
        Erreur::from_panic,
    )
    .await;

    assert_eq!(result.unwrap_err().message(), "worker died");
}

#[tokio::test]
async fn resolve_async_returns_the_output() {
    let result = resolve_async(async { 5 }, Erreur::from_panic).await;
    assert_eq!(result, Ok(5));
}

#[tokio::test]
async fn resolve_async_passes_erreur_payloads_through() {
    let original = Erreur::create("typed panic");
    let raised = original.clone();

    let result: Result<(), Erreur> =
        resolve_async(async move { std::panic::panic_any(raised) }, |_| Erreur::create("replaced")).await;
    assert_eq!(result, Err(original));
}
