//! Future wrapper annotating errors lazily.

use core::future::Future;
use core::pin::Pin;
use core::task::{Context, Poll};

use futures_core::future::FusedFuture;

use pin_project_lite::pin_project;

use crate::traits::{IntoErreur, IntoProviders};
use crate::types::Erreur;

pin_project! {
    /// Converts the error of the inner future into an [`Erreur`] and pushes
    /// providers on it.
    ///
    /// The providers are only built when the inner future resolves to an
    /// error.
    ///
    /// # Cancel Safety
    ///
    /// `ContextFuture` is cancel-safe if the inner future is cancel-safe.
    #[must_use = "futures do nothing unless polled"]
    pub struct ContextFuture<Fut, F> {
        #[pin]
        future: Fut,
        providers_fn: Option<F>,
    }
}

impl<Fut, F> ContextFuture<Fut, F> {
    /// Wraps `future`, building providers with `providers_fn` on error.
    #[inline]
    pub fn new(future: Fut, providers_fn: F) -> Self {
        Self { future, providers_fn: Some(providers_fn) }
    }
}

impl<Fut, F, P, T, E> Future for ContextFuture<Fut, F>
where
    Fut: Future<Output = Result<T, E>>,
    F: FnOnce() -> P,
    P: IntoProviders,
    E: IntoErreur,
{
    type Output = Result<T, Erreur>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.project();

        this.future.poll(cx).map(|res| {
            res.map_err(|err| {
                let providers_fn = this
                    .providers_fn
                    .take()
                    .expect("ContextFuture polled after completion; this is a bug");
                err.into_erreur().with(providers_fn())
            })
        })
    }
}

impl<Fut, F, P, T, E> FusedFuture for ContextFuture<Fut, F>
where
    Fut: FusedFuture<Output = Result<T, E>>,
    F: FnOnce() -> P,
    P: IntoProviders,
    E: IntoErreur,
{
    fn is_terminated(&self) -> bool {
        self.providers_fn.is_none() || self.future.is_terminated()
    }
}
