//! `ResultExt`-style adapters for futures.

use core::future::Future;

use crate::traits::{IntoErreur, IntoProviders};

use super::context_future::ContextFuture;

/// Annotates the error of a `Future<Output = Result<T, E>>`.
///
/// Mirrors [`ResultExt::ctx`](crate::traits::ResultExt::ctx) and
/// [`ResultExt::ctx_with`](crate::traits::ResultExt::ctx_with).
///
/// ```rust,no_run
/// use erreur::prelude_async::*;
///
/// async fn fetch(id: u64) -> Result<String, &'static str> {
///     Err("not found")
/// }
///
/// async fn load(id: u64) -> Result<String, Erreur> {
///     let user_id: Key<u64> = Key::new("UserId");
///     fetch(id).ctx_with(|| user_id.provide(id)).await
/// }
/// ```
pub trait FutureErreurExt<T, E>: Future<Output = Result<T, E>> + Sized {
    /// Pushes `providers` on the error.
    fn ctx<P>(self, providers: P) -> ContextFuture<Self, impl FnOnce() -> P>
    where
        P: IntoProviders,
        E: IntoErreur,
    {
        self.ctx_with(move || providers)
    }

    /// Pushes the providers built by `f` on the error. `f` only runs on the
    /// error path.
    fn ctx_with<F, P>(self, f: F) -> ContextFuture<Self, F>
    where
        F: FnOnce() -> P,
        P: IntoProviders,
        E: IntoErreur;
}

impl<Fut, T, E> FutureErreurExt<T, E> for Fut
where
    Fut: Future<Output = Result<T, E>>,
{
    #[inline]
    fn ctx_with<F, P>(self, f: F) -> ContextFuture<Self, F>
    where
        F: FnOnce() -> P,
        P: IntoProviders,
        E: IntoErreur,
    {
        ContextFuture::new(self, f)
    }
}
