//! Core types: keys, the context stack and the error wrapper.
//!
//! # Examples
//!
//! ```
//! use erreur::{DebugEntry, Erreur, Key};
//!
//! let code: Key<u16> = Key::new("Code");
//!
//! let err = Erreur::create("boom").with(code.provide(500));
//!
//! assert_eq!(
//!     err.debug(),
//!     [DebugEntry::new("Code", 500u16), DebugEntry::new("Message", "boom")]
//! );
//! ```
pub mod alloc_type;
pub mod erreur;
pub mod error_formatter;
pub mod errors;
pub mod key;
pub mod stack;

pub use erreur::{Erreur, CAUSE_KEY, JSON_KEY, MESSAGE_KEY, NAME_KEY, STACK_TRACE_KEY};
pub use error_formatter::ErreurFormatConfig;
pub use errors::{DuplicateRegistration, MissingContext};
/// JSON document used for the [`Erreur::to_json`] projection.
pub use serde_json::Value as JsonValue;
pub use key::{Consumer, DefaultKey, EmptyKey, Key, KeyId, KeyMeta, KeyValue, Provider};
pub use stack::{DebugEntry, Entry, Stack};

/// Result alias with [`Erreur`] as error type.
pub type ErreurResult<T> = Result<T, Erreur>;
