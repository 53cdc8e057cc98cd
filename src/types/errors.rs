//! Plain error types raised by the stack core and the store helpers.
//!
//! These deliberately are not [`Erreur`](crate::Erreur) values: the stack core
//! cannot depend on the wrapper it supports.
use crate::types::alloc_type::Cow;
use core::fmt::{self, Display};

/// Returned by `get_or_fail` when a key has no entry and no default.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MissingContext {
    key: Cow<'static, str>,
}

impl MissingContext {
    /// Creates the error for the key named `key`.
    #[inline]
    pub fn new(key: impl Into<Cow<'static, str>>) -> Self {
        Self { key: key.into() }
    }

    /// Name of the missing key.
    #[inline]
    pub fn key(&self) -> &str {
        &self.key
    }
}

impl Display for MissingContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "missing context for key `{}`", self.key)
    }
}

impl core::error::Error for MissingContext {}

/// Returned when an error is registered twice in the same
/// [`ErreurStore`](crate::kinds::ErreurStore).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DuplicateRegistration {
    store: Cow<'static, str>,
}

impl DuplicateRegistration {
    /// Creates the error for the store named `store`.
    #[inline]
    pub fn new(store: impl Into<Cow<'static, str>>) -> Self {
        Self { store: store.into() }
    }

    /// Name of the store that rejected the registration.
    #[inline]
    pub fn store(&self) -> &str {
        &self.store
    }
}

impl Display for DuplicateRegistration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "error already registered in store `{}`", self.store)
    }
}

impl core::error::Error for DuplicateRegistration {}
