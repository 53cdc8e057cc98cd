//! Typed error annotations backed by an immutable, structurally shared
//! context stack.
//!
//! An [`Erreur`] owns a [`Stack`]: a persistent newest-first list of
//! `(key, value)` entries. Annotating an error pushes entries and returns a
//! new error; the original is untouched and keeps sharing its history with
//! every error derived from it. Keys are identities, not names, so two
//! libraries can both define a `"Code"` key without ever clashing.
//!
//! # Examples
//!
//! ## Annotating an error
//!
//! ```
//! use erreur::{Erreur, Key};
//!
//! let status: Key<u16> = Key::new("Status");
//!
//! let err = Erreur::create("upstream unavailable").with(status.provide(503));
//! let retried = err.with(status.provide(504));
//!
//! assert_eq!(retried.get(&status), Some(&504));
//! assert_eq!(err.get(&status), Some(&503));
//! ```
//!
//! ## Merging and deduplicating
//!
//! ```
//! use erreur::{DebugEntry, Erreur, Key};
//!
//! let host: Key<&'static str> = Key::new("Host");
//!
//! let base = Erreur::create("request failed").with(host.provide("a"));
//! let cause = Erreur::new().with(host.provide("b")).with(host.provide("b"));
//!
//! let merged = base.merge(&cause).dedupe();
//! assert_eq!(merged.get(&host), Some(&"a"));
//! assert_eq!(
//!     merged.debug(),
//!     [DebugEntry::new("Host", "a"), DebugEntry::new("Message", "request failed")]
//! );
//! ```
//!
//! ## Error kinds
//!
//! ```
//! use erreur::kinds::ErrorKind;
//!
//! let invalid = ErrorKind::<&'static str>::new("InvalidInput");
//! let err = invalid.create("email");
//!
//! assert!(invalid.is(&err));
//! assert_eq!(err.to_string(), "InvalidInput: InvalidInput \"email\"");
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

/// Helpers converting foreign failures into annotated errors
pub mod context;
/// Named error kinds, matching and stores
pub mod kinds;
/// Key and error declaration macros
pub mod macros;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Conversion and extension traits
pub mod traits;
/// Keys, the context stack and the error wrapper
pub mod types;

/// Low-level building blocks
pub mod advanced;

/// Async extensions (requires `async` feature)
#[cfg(feature = "async")]
pub mod async_ext;

/// Async prelude (requires `async` feature)
#[cfg(feature = "async")]
pub mod prelude_async;

/// Tower integration (requires `tower` feature)
#[cfg(feature = "tower")]
pub mod tower;

/// Tracing integration (requires `tracing` feature)
#[cfg(feature = "tracing")]
pub mod tracing_ext;

pub use context::{context_fn, with_context, with_context_result, wrap};
#[cfg(feature = "std")]
pub use context::resolve;
pub use traits::{IntoErreur, IntoProviders, ResultExt};
pub use types::{
    Consumer, DebugEntry, DefaultKey, DuplicateRegistration, EmptyKey, Erreur, ErreurFormatConfig,
    ErreurResult, JsonValue, Key, KeyId, KeyMeta, KeyValue, MissingContext, Provider, Stack,
    CAUSE_KEY, JSON_KEY, MESSAGE_KEY, NAME_KEY, STACK_TRACE_KEY,
};
