//! `tracing` integration: record the active span on errors.
//!
//! Requires the `tracing` feature. The future adapter additionally needs
//! `async`.
//!
//! ```toml
//! [dependencies]
//! erreur = { version = "0.3", features = ["tracing"] }
//! ```
//!
//! The span name is stored under [`SPAN_KEY`]. Outside any span nothing is
//! recorded.

use tracing::Span;

use crate::traits::IntoErreur;
use crate::types::Erreur;

crate::static_key! {
    /// Name of the `tracing` span an error was raised in.
    pub SPAN_KEY: Key<&'static str> = "Span"
}

fn span_provider(span: &Span) -> Option<crate::types::Provider> {
    span.metadata().map(|metadata| SPAN_KEY.provide(metadata.name()))
}

impl Erreur {
    /// Records the current span.
    #[inline]
    pub fn in_current_span(&self) -> Erreur {
        self.in_span(&Span::current())
    }

    /// Records `span`.
    #[inline]
    pub fn in_span(&self, span: &Span) -> Erreur {
        self.with(span_provider(span))
    }
}

/// Converts `error` and records the current span.
///
/// ```
/// use erreur::tracing_ext::{instrument_erreur, SPAN_KEY};
///
/// let err = instrument_erreur("outside any span");
/// assert!(!err.has(&SPAN_KEY));
/// ```
#[inline]
pub fn instrument_erreur<E: IntoErreur>(error: E) -> Erreur {
    error.into_erreur().in_current_span()
}

/// Records a span on the error side of a `Result`.
pub trait ResultSpanExt<T, E> {
    /// Converts the error and records the current span.
    fn with_current_span(self) -> Result<T, Erreur>;

    /// Converts the error and records `span`.
    fn with_span(self, span: &Span) -> Result<T, Erreur>;
}

impl<T, E: IntoErreur> ResultSpanExt<T, E> for Result<T, E> {
    #[inline]
    fn with_current_span(self) -> Result<T, Erreur> {
        self.with_span(&Span::current())
    }

    #[inline]
    fn with_span(self, span: &Span) -> Result<T, Erreur> {
        self.map_err(|error| error.into_erreur().in_span(span))
    }
}

#[cfg(feature = "async")]
pub use span_future::{FutureSpanExt, SpanContextFuture};

#[cfg(feature = "async")]
mod span_future {
    use core::future::Future;
    use core::pin::Pin;
    use core::task::{Context, Poll};

    use pin_project_lite::pin_project;
    use tracing::Span;

    use crate::traits::IntoErreur;
    use crate::types::Erreur;

    /// Records a span on the error of a future.
    pub trait FutureSpanExt<T, E>: Future<Output = Result<T, E>> + Sized {
        /// Records the span current at the time of this call.
        fn with_span_context(self) -> SpanContextFuture<Self> {
            SpanContextFuture { inner: self, span: Span::current() }
        }

        /// Records `span`.
        fn with_span(self, span: Span) -> SpanContextFuture<Self> {
            SpanContextFuture { inner: self, span }
        }
    }

    impl<F, T, E> FutureSpanExt<T, E> for F where F: Future<Output = Result<T, E>> {}

    pin_project! {
        /// Future returned by [`FutureSpanExt::with_span_context`] and
        /// [`FutureSpanExt::with_span`].
        #[must_use = "futures do nothing unless polled"]
        pub struct SpanContextFuture<F> {
            #[pin]
            inner: F,
            span: Span,
        }
    }

    impl<F, T, E> Future for SpanContextFuture<F>
    where
        F: Future<Output = Result<T, E>>,
        E: IntoErreur,
    {
        type Output = Result<T, Erreur>;

        fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
            let this = self.project();

            match this.inner.poll(cx) {
                Poll::Ready(Ok(value)) => Poll::Ready(Ok(value)),
                Poll::Ready(Err(error)) => Poll::Ready(Err(error.into_erreur().in_span(this.span))),
                Poll::Pending => Poll::Pending,
            }
        }
    }
}
