//! Async prelude: the sync [`prelude`](crate::prelude) plus the async adapters.
//!
//! ```rust,no_run
//! use erreur::prelude_async::*;
//!
//! async fn fetch(id: u64) -> Result<Vec<u8>, &'static str> {
//!     Err("timeout")
//! }
//!
//! async fn load(id: u64) -> ErreurResult<Vec<u8>> {
//!     let request_id: Key<u64> = Key::new("RequestId");
//!     fetch(id).ctx(request_id.provide(id)).await
//! }
//! ```

pub use crate::prelude::*;

pub use crate::async_ext::{resolve_async, wrap_async, ContextFuture, FutureErreurExt};

#[cfg(feature = "tracing")]
pub use crate::tracing_ext::{instrument_erreur, FutureSpanExt, ResultSpanExt};
