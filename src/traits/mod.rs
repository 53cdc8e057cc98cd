//! Conversion and extension traits.
//!
//! - [`IntoProviders`]: anything that can be pushed onto a stack in one call.
//! - [`IntoErreur`]: values that can become an [`Erreur`](crate::Erreur).
//! - [`ResultExt`]: `Result` adapters that annotate the error side.
//!
//! # Examples
//!
//! ```
//! use erreur::traits::ResultExt;
//! use erreur::Key;
//!
//! let path: Key<&'static str> = Key::new("Path");
//!
//! let result: Result<(), &str> = Err("permission denied");
//! let err = result.ctx(path.provide("/etc/shadow")).unwrap_err();
//!
//! assert_eq!(err.message(), "permission denied");
//! assert_eq!(err.get(&path), Some(&"/etc/shadow"));
//! ```

pub mod into_erreur;
pub mod into_providers;
pub mod result_ext;

pub use into_erreur::IntoErreur;
pub use into_providers::{providers_from, IntoProviders, ProvidersFrom};
pub use result_ext::ResultExt;
