//! Values accepted wherever providers are pushed.
//!
//! [`Stack::with`](crate::Stack::with) and [`Erreur::with`](crate::Erreur::with)
//! take a single [`Provider`], an array, a `Vec`, an `Option` or any iterator
//! wrapped with [`providers_from`]. Providers are pushed in iteration order, so
//! later ones shadow earlier ones.
//!
//! ```
//! use erreur::traits::providers_from;
//! use erreur::{Key, Stack};
//!
//! let tag: Key<u8> = Key::new("Tag");
//!
//! let stack = Stack::new().with(providers_from((1..=3).map(|n| tag.provide(n))));
//! assert_eq!(stack.len(), 3);
//! assert_eq!(stack.get(&tag), Some(&3));
//! ```
use crate::types::alloc_type::Vec;
use crate::types::key::Provider;
use core::iter;

/// Converts a value into a sequence of providers.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be pushed onto a context stack",
    label = "this type does not implement `IntoProviders`",
    note = "build providers with `key.provide(value)`",
    note = "wrap other iterators of `Provider` with `erreur::traits::providers_from`"
)]
pub trait IntoProviders {
    /// The resulting iterator.
    type Providers: IntoIterator<Item = Provider>;

    /// Converts `self` into providers, oldest first.
    fn into_providers(self) -> Self::Providers;
}

impl IntoProviders for Provider {
    type Providers = iter::Once<Provider>;

    #[inline]
    fn into_providers(self) -> Self::Providers {
        iter::once(self)
    }
}

impl<const N: usize> IntoProviders for [Provider; N] {
    type Providers = Self;

    #[inline]
    fn into_providers(self) -> Self {
        self
    }
}

impl IntoProviders for Vec<Provider> {
    type Providers = Self;

    #[inline]
    fn into_providers(self) -> Self {
        self
    }
}

impl IntoProviders for Option<Provider> {
    type Providers = Self;

    #[inline]
    fn into_providers(self) -> Self {
        self
    }
}

impl IntoProviders for () {
    type Providers = iter::Empty<Provider>;

    #[inline]
    fn into_providers(self) -> Self::Providers {
        iter::empty()
    }
}

/// Adapter turning any iterator of providers into [`IntoProviders`].
#[derive(Debug, Clone)]
pub struct ProvidersFrom<I>(I);

/// Wraps an iterator of providers.
#[inline]
pub fn providers_from<I>(providers: I) -> ProvidersFrom<I>
where
    I: IntoIterator<Item = Provider>,
{
    ProvidersFrom(providers)
}

impl<I> IntoProviders for ProvidersFrom<I>
where
    I: IntoIterator<Item = Provider>,
{
    type Providers = I;

    #[inline]
    fn into_providers(self) -> I {
        self.0
    }
}
