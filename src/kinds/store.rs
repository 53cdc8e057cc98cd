//! Store-style registration of errors.
//!
//! An [`ErreurStore`] tags errors with a piece of data, at most once per
//! error. Since errors are immutable, registering returns the tagged error.
use super::{DataMatcher, Matcher};
use crate::traits::IntoErreur;
use crate::types::alloc_type::Cow;
use crate::types::{DuplicateRegistration, Erreur, Key, KeyValue};

/// Tags errors with data of type `D`.
///
/// ```
/// use erreur::kinds::ErreurStore;
/// use erreur::Erreur;
///
/// let retryable = ErreurStore::<u32>::new("Retryable");
///
/// let err = retryable.set(&Erreur::create("busy"), 3).unwrap();
/// assert_eq!(retryable.get(&err), Some(&3));
/// assert!(retryable.set(&err, 4).is_err());
/// ```
#[derive(Debug)]
pub struct ErreurStore<D> {
    key: Key<D>,
}

impl<D> Clone for ErreurStore<D> {
    fn clone(&self) -> Self {
        Self { key: self.key.clone() }
    }
}

impl<D: KeyValue> ErreurStore<D> {
    /// Creates a store with a fresh identity.
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self { key: Key::new(name) }
    }

    /// The store name.
    #[inline]
    pub fn name(&self) -> &str {
        self.key.name()
    }

    /// Registers `erreur` with `data`.
    ///
    /// Fails with [`DuplicateRegistration`] if `erreur` already is registered
    /// in this store.
    pub fn set(&self, erreur: &Erreur, data: D) -> Result<Erreur, DuplicateRegistration> {
        if self.has(erreur) {
            return Err(DuplicateRegistration::new(self.key.id().name_cow()));
        }
        Ok(erreur.with(self.key.provide(data)))
    }

    /// Converts `error` and registers it.
    #[inline]
    pub fn set_and_return<E: IntoErreur>(&self, error: E, data: D) -> Result<Erreur, DuplicateRegistration> {
        self.set(&error.into_erreur(), data)
    }

    /// Returns `true` if `erreur` is registered.
    #[inline]
    pub fn has(&self, erreur: &Erreur) -> bool {
        erreur.has(&self.key)
    }

    /// The data `erreur` was registered with.
    #[inline]
    pub fn get<'a>(&'a self, erreur: &'a Erreur) -> Option<&'a D> {
        erreur.get(&self.key)
    }

    /// A read-only handle sharing this store's identity.
    #[inline]
    pub fn as_readonly(&self) -> ReadonlyErreurStore<D> {
        ReadonlyErreurStore { key: self.key.clone() }
    }
}

impl ErreurStore<()> {
    /// Registers `erreur` in a store without data.
    #[inline]
    pub fn mark(&self, erreur: &Erreur) -> Result<Erreur, DuplicateRegistration> {
        self.set(erreur, ())
    }
}

/// Lookup-only view of an [`ErreurStore`].
#[derive(Debug)]
pub struct ReadonlyErreurStore<D> {
    key: Key<D>,
}

impl<D> Clone for ReadonlyErreurStore<D> {
    fn clone(&self) -> Self {
        Self { key: self.key.clone() }
    }
}

impl<D: KeyValue> ReadonlyErreurStore<D> {
    /// The store name.
    #[inline]
    pub fn name(&self) -> &str {
        self.key.name()
    }

    /// Returns `true` if `erreur` is registered.
    #[inline]
    pub fn has(&self, erreur: &Erreur) -> bool {
        erreur.has(&self.key)
    }

    /// The data `erreur` was registered with.
    #[inline]
    pub fn get<'a>(&'a self, erreur: &'a Erreur) -> Option<&'a D> {
        erreur.get(&self.key)
    }
}

impl<D: KeyValue> Matcher for ErreurStore<D> {
    #[inline]
    fn kind_name(&self) -> &str {
        self.name()
    }

    #[inline]
    fn matches(&self, erreur: &Erreur) -> bool {
        self.has(erreur)
    }
}

impl<D: KeyValue> Matcher for ReadonlyErreurStore<D> {
    #[inline]
    fn kind_name(&self) -> &str {
        self.name()
    }

    #[inline]
    fn matches(&self, erreur: &Erreur) -> bool {
        self.has(erreur)
    }
}

impl<D: KeyValue> DataMatcher<D> for ErreurStore<D> {
    #[inline]
    fn data<'a>(&'a self, erreur: &'a Erreur) -> Option<&'a D> {
        self.get(erreur)
    }
}

impl<D: KeyValue> DataMatcher<D> for ReadonlyErreurStore<D> {
    #[inline]
    fn data<'a>(&'a self, erreur: &'a Erreur) -> Option<&'a D> {
        self.get(erreur)
    }
}
