//! Conversion into [`Erreur`].
use crate::types::alloc_type::{Cow, String};
use crate::types::{DuplicateRegistration, Erreur, MissingContext};
use core::convert::Infallible;

/// Converts a value into an [`Erreur`].
///
/// Used by [`ResultExt`](crate::traits::ResultExt), the tower layer and the
/// store helpers to accept foreign error values.
///
/// ```
/// use erreur::traits::IntoErreur;
///
/// let err = "disk full".into_erreur();
/// assert_eq!(err.message(), "disk full");
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be converted into an `Erreur`",
    label = "this type does not implement `IntoErreur`",
    note = "implement `IntoErreur` for `{Self}` or map the error with `Erreur::from_error`"
)]
pub trait IntoErreur {
    /// Performs the conversion.
    fn into_erreur(self) -> Erreur;
}

impl IntoErreur for Erreur {
    #[inline]
    fn into_erreur(self) -> Erreur {
        self
    }
}

impl IntoErreur for &'static str {
    #[inline]
    fn into_erreur(self) -> Erreur {
        Erreur::create(self)
    }
}

impl IntoErreur for String {
    #[inline]
    fn into_erreur(self) -> Erreur {
        Erreur::create(self)
    }
}

impl IntoErreur for Cow<'static, str> {
    #[inline]
    fn into_erreur(self) -> Erreur {
        Erreur::create(self)
    }
}

#[cfg(feature = "std")]
impl IntoErreur for crate::types::alloc_type::Box<dyn core::error::Error + Send + Sync> {
    #[inline]
    fn into_erreur(self) -> Erreur {
        Erreur::from_boxed(self)
    }
}

impl IntoErreur for MissingContext {
    fn into_erreur(self) -> Erreur {
        Erreur::create(crate::types::erreur::display_to_string(&self)).with_name("MissingContext")
    }
}

impl IntoErreur for DuplicateRegistration {
    fn into_erreur(self) -> Erreur {
        Erreur::create(crate::types::erreur::display_to_string(&self))
            .with_name("DuplicateRegistration")
    }
}

impl IntoErreur for Infallible {
    fn into_erreur(self) -> Erreur {
        match self {}
    }
}
