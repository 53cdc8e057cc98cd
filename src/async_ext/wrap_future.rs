//! Async forms of [`wrap`](crate::wrap) and [`resolve`](crate::resolve).

use core::any::Any;
use core::future::Future;
use core::pin::Pin;
use core::task::{Context, Poll};
use std::panic::{catch_unwind, AssertUnwindSafe};

use futures_core::future::FusedFuture;

use pin_project_lite::pin_project;

use crate::context::{convert_panic, normalize};
use crate::types::alloc_type::Box;
use crate::types::Erreur;

pin_project! {
    /// Future returned by [`wrap_async`].
    #[must_use = "futures do nothing unless polled"]
    pub struct WrapFuture<Fut, H> {
        #[pin]
        future: Fut,
        on_error: Option<H>,
    }
}

/// Awaits `future`, converting a non-[`Erreur`] error with `on_error`.
///
/// ```
/// use erreur::async_ext::wrap_async;
/// use erreur::Erreur;
///
/// # tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(async {
/// let err = wrap_async(async { Err::<(), _>(404u16) }, |code| {
///     Erreur::create("request failed").with_name(if code == 404 { "NotFound" } else { "Http" })
/// })
/// .await
/// .unwrap_err();
/// assert_eq!(err.name(), "NotFound");
/// # });
/// ```
#[inline]
pub fn wrap_async<Fut, T, E, H>(future: Fut, on_error: H) -> WrapFuture<Fut, H>
where
    Fut: Future<Output = Result<T, E>>,
    E: 'static,
    H: FnOnce(E) -> Erreur,
{
    WrapFuture { future, on_error: Some(on_error) }
}

impl<Fut, H, T, E> Future for WrapFuture<Fut, H>
where
    Fut: Future<Output = Result<T, E>>,
    E: 'static,
    H: FnOnce(E) -> Erreur,
{
    type Output = Result<T, Erreur>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.project();

        this.future.poll(cx).map(|res| {
            let on_error = this
                .on_error
                .take()
                .expect("WrapFuture polled after completion; this is a bug");
            res.map_err(|error| normalize(error, on_error))
        })
    }
}

impl<Fut, H, T, E> FusedFuture for WrapFuture<Fut, H>
where
    Fut: Future<Output = Result<T, E>>,
    E: 'static,
    H: FnOnce(E) -> Erreur,
{
    fn is_terminated(&self) -> bool {
        self.on_error.is_none()
    }
}

pin_project! {
    /// Future returned by [`resolve_async`].
    #[must_use = "futures do nothing unless polled"]
    pub struct ResolveFuture<Fut, H> {
        #[pin]
        future: Fut,
        on_error: Option<H>,
    }
}

/// Awaits `future`, turning a panic raised while polling it into an error.
///
/// Panic payloads are handled like [`resolve`](crate::resolve) does.
///
/// ```
/// use erreur::async_ext::resolve_async;
/// use erreur::Erreur;
///
/// # tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(async {
/// let result: Result<(), Erreur> = resolve_async(async { panic!("lost connection") }, Erreur::from_panic).await;
/// assert_eq!(result.unwrap_err().message(), "lost connection");
/// # });
/// ```
#[inline]
pub fn resolve_async<Fut, H>(future: Fut, on_error: H) -> ResolveFuture<Fut, H>
where
    Fut: Future,
    H: FnOnce(Box<dyn Any + Send>) -> Erreur,
{
    ResolveFuture { future, on_error: Some(on_error) }
}

impl<Fut, H> Future for ResolveFuture<Fut, H>
where
    Fut: Future,
    H: FnOnce(Box<dyn Any + Send>) -> Erreur,
{
    type Output = Result<Fut::Output, Erreur>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.project();
        let future = this.future;

        let polled = match catch_unwind(AssertUnwindSafe(|| future.poll(cx))) {
            Ok(Poll::Pending) => return Poll::Pending,
            Ok(Poll::Ready(value)) => Ok(value),
            Err(payload) => Err(payload),
        };

        let on_error = this
            .on_error
            .take()
            .expect("ResolveFuture polled after completion; this is a bug");
        Poll::Ready(polled.map_err(|payload| convert_panic(payload, on_error)))
    }
}

impl<Fut, H> FusedFuture for ResolveFuture<Fut, H>
where
    Fut: Future,
    H: FnOnce(Box<dyn Any + Send>) -> Erreur,
{
    fn is_terminated(&self) -> bool {
        self.on_error.is_none()
    }
}
