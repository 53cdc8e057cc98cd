//! Async counterparts of the context helpers.
//!
//! Requires the `async` feature:
//!
//! ```toml
//! [dependencies]
//! erreur = { version = "0.3", features = ["async"] }
//! ```
//!
//! # Examples
//!
//! ```
//! use erreur::prelude_async::*;
//!
//! # tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(async {
//! let attempt: Key<u32> = Key::new("Attempt");
//!
//! let err = async { Err::<(), _>("connection reset") }
//!     .ctx(attempt.provide(2))
//!     .await
//!     .unwrap_err();
//!
//! assert_eq!(err.message(), "connection reset");
//! assert_eq!(err.get(&attempt), Some(&2));
//! # });
//! ```

mod context_future;
mod future_ext;
mod wrap_future;

pub use context_future::ContextFuture;
pub use future_ext::FutureErreurExt;
pub use wrap_future::{resolve_async, wrap_async, ResolveFuture, WrapFuture};
