//! Tower integration: annotate service errors at a boundary.
//!
//! Requires the `tower` feature:
//!
//! ```toml
//! [dependencies]
//! erreur = { version = "0.3", features = ["tower"] }
//! ```
//!
//! The inner service's error is converted with [`IntoErreur`] and merged over
//! the layer's context stack, so annotations the error already carries win
//! over the layer's.
//!
//! # Example
//!
//! ```
//! use erreur::tower::ErreurLayer;
//! use erreur::{Erreur, Key, Stack};
//! use tower::{service_fn, Layer, ServiceExt};
//!
//! let service_name: Key<&'static str> = Key::new("Service");
//! let layer = ErreurLayer::new(Stack::new().push(service_name.provide("users")));
//!
//! let service = layer.layer(service_fn(|_: ()| async { Err::<(), _>("db offline") }));
//!
//! # tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(async {
//! let err: Erreur = service.oneshot(()).await.unwrap_err();
//! assert_eq!(err.message(), "db offline");
//! assert_eq!(err.get(&service_name), Some(&"users"));
//! # });
//! ```

use core::future::Future;
use core::pin::Pin;
use core::task::{Context, Poll};

use futures_core::future::FusedFuture;
use pin_project_lite::pin_project;
use tower::{Layer, Service};

use crate::traits::{IntoErreur, IntoProviders};
use crate::types::{Erreur, Stack};

fn annotate<E: IntoErreur>(error: E, context: &Stack) -> Erreur {
    let erreur = error.into_erreur();
    Erreur::from_stack(erreur.stack().merge(context))
}

/// A Tower [`Layer`] converting service errors into [`Erreur`] values
/// carrying a fixed context.
#[derive(Clone, Debug, Default)]
pub struct ErreurLayer {
    context: Stack,
}

impl ErreurLayer {
    /// Creates a layer attaching `context` to every error.
    #[inline]
    pub const fn new(context: Stack) -> Self {
        Self { context }
    }

    /// Creates a layer from providers.
    #[inline]
    pub fn from_providers<P: IntoProviders>(providers: P) -> Self {
        Self::new(Stack::new().with(providers))
    }

    /// The context attached to errors.
    #[inline]
    pub const fn context(&self) -> &Stack {
        &self.context
    }
}

impl<S> Layer<S> for ErreurLayer {
    type Service = ErreurService<S>;

    #[inline]
    fn layer(&self, inner: S) -> Self::Service {
        ErreurService { inner, context: self.context.clone() }
    }
}

/// Service created by [`ErreurLayer`].
#[derive(Clone, Debug)]
pub struct ErreurService<S> {
    inner: S,
    context: Stack,
}

impl<S> ErreurService<S> {
    /// Wraps `inner`, attaching `context` to its errors.
    #[inline]
    pub const fn new(inner: S, context: Stack) -> Self {
        Self { inner, context }
    }

    /// Returns a reference to the inner service.
    #[inline]
    pub const fn inner(&self) -> &S {
        &self.inner
    }

    /// Returns a mutable reference to the inner service.
    #[inline]
    pub fn inner_mut(&mut self) -> &mut S {
        &mut self.inner
    }

    /// Consumes the wrapper and returns the inner service.
    #[inline]
    pub fn into_inner(self) -> S {
        self.inner
    }

    /// The context attached to errors.
    #[inline]
    pub const fn context(&self) -> &Stack {
        &self.context
    }
}

impl<S, Request> Service<Request> for ErreurService<S>
where
    S: Service<Request>,
    S::Error: IntoErreur,
{
    type Response = S::Response;
    type Error = Erreur;
    type Future = ErreurFuture<S::Future>;

    #[inline]
    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx).map_err(|e| annotate(e, &self.context))
    }

    #[inline]
    fn call(&mut self, request: Request) -> Self::Future {
        ErreurFuture { inner: self.inner.call(request), context: Some(self.context.clone()) }
    }
}

pin_project! {
    /// Future returned by [`ErreurService`].
    #[must_use = "futures do nothing unless polled"]
    pub struct ErreurFuture<F> {
        #[pin]
        inner: F,
        context: Option<Stack>,
    }
}

impl<F, T, E> Future for ErreurFuture<F>
where
    F: Future<Output = Result<T, E>>,
    E: IntoErreur,
{
    type Output = Result<T, Erreur>;

    #[inline]
    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.project();

        match this.inner.poll(cx) {
            Poll::Ready(Ok(response)) => {
                this.context.take();
                Poll::Ready(Ok(response))
            },
            Poll::Ready(Err(error)) => {
                let context = this.context.take().expect("ErreurFuture polled after completion");
                Poll::Ready(Err(annotate(error, &context)))
            },
            Poll::Pending => Poll::Pending,
        }
    }
}

impl<F, T, E> FusedFuture for ErreurFuture<F>
where
    F: FusedFuture<Output = Result<T, E>>,
    E: IntoErreur,
{
    #[inline]
    fn is_terminated(&self) -> bool {
        self.context.is_none() || self.inner.is_terminated()
    }
}

/// Wraps a service with [`ErreurService`].
pub trait ServiceErreurExt<Request>: Service<Request> + Sized {
    /// Attaches `context` to every error of this service.
    fn with_erreur_context(self, context: Stack) -> ErreurService<Self> {
        ErreurService::new(self, context)
    }
}

impl<S, Request> ServiceErreurExt<Request> for S where S: Service<Request> {}
