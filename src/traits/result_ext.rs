//! Extension trait annotating the error side of a `Result`.
//!
//! # Examples
//!
//! ```
//! use erreur::traits::ResultExt;
//! use erreur::{Erreur, Key};
//!
//! let attempt: Key<u32> = Key::new("Attempt");
//!
//! fn connect() -> Result<(), &'static str> {
//!     Err("connection refused")
//! }
//!
//! let err: Erreur = connect().ctx_with(|| attempt.provide(3)).unwrap_err();
//! assert_eq!(err.get(&attempt), Some(&3));
//! ```
use crate::context::normalize;
use crate::traits::{IntoErreur, IntoProviders};
use crate::types::Erreur;

/// Adapters turning `Result<T, E>` into `Result<T, Erreur>`.
///
/// [`ctx_with`](ResultExt::ctx_with) only builds its providers on the error
/// path.
pub trait ResultExt<T, E> {
    /// Converts the error with [`IntoErreur`].
    fn erreur(self) -> Result<T, Erreur>
    where
        E: IntoErreur;

    /// Converts the error with `on_error`, unless it already is an [`Erreur`].
    fn or_erreur<F>(self, on_error: F) -> Result<T, Erreur>
    where
        E: 'static,
        F: FnOnce(E) -> Erreur;

    /// Converts the error and pushes `providers` on it.
    fn ctx<P>(self, providers: P) -> Result<T, Erreur>
    where
        E: IntoErreur,
        P: IntoProviders;

    /// Like [`ctx`](ResultExt::ctx), building the providers lazily.
    fn ctx_with<P, F>(self, f: F) -> Result<T, Erreur>
    where
        E: IntoErreur,
        P: IntoProviders,
        F: FnOnce() -> P;
}

impl<T, E> ResultExt<T, E> for Result<T, E> {
    #[inline]
    fn erreur(self) -> Result<T, Erreur>
    where
        E: IntoErreur,
    {
        self.map_err(IntoErreur::into_erreur)
    }

    #[inline]
    fn or_erreur<F>(self, on_error: F) -> Result<T, Erreur>
    where
        E: 'static,
        F: FnOnce(E) -> Erreur,
    {
        self.map_err(|error| normalize(error, on_error))
    }

    #[inline]
    fn ctx<P>(self, providers: P) -> Result<T, Erreur>
    where
        E: IntoErreur,
        P: IntoProviders,
    {
        self.map_err(|error| error.into_erreur().with(providers))
    }

    #[inline]
    fn ctx_with<P, F>(self, f: F) -> Result<T, Erreur>
    where
        E: IntoErreur,
        P: IntoProviders,
        F: FnOnce() -> P,
    {
        self.map_err(|error| error.into_erreur().with(f()))
    }
}
