//! Convenience re-exports for common usage patterns.
//!
//! ```
//! use erreur::prelude::*;
//!
//! let code: Key<u16> = Key::new("Code");
//!
//! fn read() -> Result<String, &'static str> {
//!     Err("unreadable")
//! }
//!
//! let err: Erreur = read().ctx(code.provide(500)).unwrap_err();
//! assert_eq!(err.get(&code), Some(&500));
//! ```

// Macros
pub use crate::{erreur, static_key};

// Core types
pub use crate::types::{DefaultKey, EmptyKey, Erreur, ErreurResult, Key, Provider, Stack};

// Kinds
pub use crate::kinds::{ErreurStore, ErrorKind};

// Traits
pub use crate::traits::{IntoErreur, IntoProviders, ResultExt};

// Helpers
pub use crate::context::{context_fn, with_context, wrap};

#[cfg(feature = "std")]
pub use crate::context::resolve;
