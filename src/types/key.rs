//! Identity tokens used to tag values in a [`Stack`](crate::types::Stack).
//!
//! A key is created once and compared by identity, never by name. Two keys
//! created with the same name are distinct and never shadow one another.
//!
//! Three flavours exist:
//!
//! - [`Key<T>`]: no default, lookups yield `Option<&T>`.
//! - [`DefaultKey<T>`]: carries a default, lookups yield `&T`.
//! - [`EmptyKey`]: a marker with no payload.
//!
//! # Examples
//!
//! ```
//! use erreur::{DefaultKey, Key, Stack};
//!
//! let code: Key<u16> = Key::new("Code");
//! let retries = DefaultKey::new("Retries", 3u32);
//!
//! let stack = Stack::new().push(code.provide(500));
//! assert_eq!(stack.get(&code), Some(&500));
//! assert_eq!(stack.get(&retries), &3);
//!
//! // Same name, different identity.
//! let other: Key<u16> = Key::new("Code");
//! assert!(!stack.has(&other));
//! ```
use crate::types::alloc_type::{Arc, Cow};
use core::any::Any;
use core::fmt::{self, Debug};
use core::marker::PhantomData;

/// Bound shared by every value stored in a stack.
///
/// Equality is used by [`Stack::merge`](crate::types::Stack::merge) to skip
/// redundant entries, `Debug` by [`Stack::debug`](crate::types::Stack::debug).
pub trait KeyValue: Any + Send + Sync + Debug + PartialEq {}

impl<T> KeyValue for T where T: Any + Send + Sync + Debug + PartialEq {}

/// Object-safe view over a [`KeyValue`].
pub(crate) trait AnyValue: Any + Send + Sync + Debug {
    fn as_any(&self) -> &dyn Any;

    fn eq_dyn(&self, other: &dyn AnyValue) -> bool;
}

impl<T: KeyValue> AnyValue for T {
    #[inline]
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn eq_dyn(&self, other: &dyn AnyValue) -> bool {
        other.as_any().downcast_ref::<T>().is_some_and(|other| other == self)
    }
}

/// Diagnostic description of a key.
///
/// Usually only seen through [`static_key!`](crate::static_key), which
/// declares the `static` metadata a static key points at.
#[derive(Debug)]
pub struct KeyMeta {
    name: Cow<'static, str>,
    marker: bool,
}

impl KeyMeta {
    /// Metadata for a key carrying a value.
    pub const fn new(name: &'static str) -> Self {
        Self { name: Cow::Borrowed(name), marker: false }
    }

    /// Metadata for a marker key; its entries have no printable value.
    pub const fn marker(name: &'static str) -> Self {
        Self { name: Cow::Borrowed(name), marker: true }
    }

    fn owned(name: Cow<'static, str>, marker: bool) -> Self {
        Self { name, marker }
    }

    /// The diagnostic name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether this is a marker key.
    #[inline]
    pub fn is_marker(&self) -> bool {
        self.marker
    }
}

#[derive(Clone)]
enum Repr {
    Static(&'static KeyMeta),
    Shared(Arc<KeyMeta>),
}

/// Type-erased identity of a key.
///
/// Equality is pointer identity of the underlying [`KeyMeta`].
#[derive(Clone)]
pub struct KeyId(Repr);

impl KeyId {
    const fn from_static(meta: &'static KeyMeta) -> Self {
        Self(Repr::Static(meta))
    }

    fn shared(meta: KeyMeta) -> Self {
        Self(Repr::Shared(Arc::new(meta)))
    }

    #[inline]
    pub(crate) fn meta(&self) -> &KeyMeta {
        match &self.0 {
            Repr::Static(meta) => *meta,
            Repr::Shared(meta) => &**meta,
        }
    }

    /// The diagnostic name of the key.
    #[inline]
    pub fn name(&self) -> &str {
        self.meta().name()
    }

    /// Whether the key is a marker key.
    #[inline]
    pub fn is_marker(&self) -> bool {
        self.meta().is_marker()
    }

    pub(crate) fn name_cow(&self) -> Cow<'static, str> {
        self.meta().name.clone()
    }

    /// Address of the metadata; equal iff the identities are equal.
    #[inline]
    pub(crate) fn addr(&self) -> usize {
        self.meta() as *const KeyMeta as usize
    }
}

impl PartialEq for KeyId {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        core::ptr::eq(self.meta(), other.meta())
    }
}

impl Eq for KeyId {}

impl Debug for KeyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("KeyId").field(&self.name()).finish()
    }
}

/// A pending `(key, value)` pair, ready to be pushed onto a stack.
///
/// Produced by [`Key::provide`], [`DefaultKey::provide`] and
/// [`EmptyKey::provide`].
#[derive(Clone)]
pub struct Provider {
    pub(crate) key: KeyId,
    pub(crate) value: Arc<dyn AnyValue>,
}

impl Provider {
    fn new<T: KeyValue>(key: &KeyId, value: T) -> Self {
        Self { key: key.clone(), value: Arc::new(value) }
    }

    /// The key this provider writes.
    #[inline]
    pub fn key(&self) -> &KeyId {
        &self.key
    }
}

impl Debug for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Provider")
            .field("key", &self.key.name())
            .field("value", &self.value)
            .finish()
    }
}

/// Read side of a key: how a lookup result is presented.
///
/// Implemented by the three key types so that [`Stack::get`](crate::types::Stack::get)
/// returns `Option<&T>` for keys without a default and `&T` for keys with one.
pub trait Consumer {
    /// The stored value type.
    type Value: KeyValue;

    /// What a lookup yields.
    type Output<'a>
    where
        Self: 'a;

    /// Identity of the key.
    fn id(&self) -> &KeyId;

    /// The declared default, if any.
    fn default_value(&self) -> Option<&Self::Value>;

    /// Builds the lookup result from the nearest entry found, if any.
    fn resolve<'a>(&'a self, found: Option<&'a Self::Value>) -> Self::Output<'a>;
}

/// A key without a default value.
pub struct Key<T> {
    id: KeyId,
    _value: PhantomData<fn() -> T>,
}

impl<T> Key<T> {
    /// Creates a fresh key. Every call returns a new identity.
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self { id: KeyId::shared(KeyMeta::owned(name.into(), false)), _value: PhantomData }
    }

    /// Creates a key whose identity is a `static` [`KeyMeta`].
    ///
    /// Keys built from the same metadata are the same key; they must agree on `T`.
    pub const fn from_static(meta: &'static KeyMeta) -> Self {
        Self { id: KeyId::from_static(meta), _value: PhantomData }
    }

    /// The key identity.
    #[inline]
    pub fn id(&self) -> &KeyId {
        &self.id
    }

    /// The diagnostic name.
    #[inline]
    pub fn name(&self) -> &str {
        self.id.name()
    }

    /// Pairs this key with a value.
    #[inline]
    pub fn provide(&self, value: T) -> Provider
    where
        T: KeyValue,
    {
        Provider::new(&self.id, value)
    }
}

impl<T> Clone for Key<T> {
    fn clone(&self) -> Self {
        Self { id: self.id.clone(), _value: PhantomData }
    }
}

impl<T> Debug for Key<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Key").field(&self.name()).finish()
    }
}

impl<T: KeyValue> Consumer for Key<T> {
    type Value = T;
    type Output<'a> = Option<&'a T>;

    #[inline]
    fn id(&self) -> &KeyId {
        &self.id
    }

    #[inline]
    fn default_value(&self) -> Option<&T> {
        None
    }

    #[inline]
    fn resolve<'a>(&'a self, found: Option<&'a T>) -> Option<&'a T> {
        found
    }
}

/// A key with a default value returned when no entry is present.
pub struct DefaultKey<T> {
    id: KeyId,
    default: T,
}

impl<T> DefaultKey<T> {
    /// Creates a fresh key with a default value.
    pub fn new(name: impl Into<Cow<'static, str>>, default: T) -> Self {
        Self { id: KeyId::shared(KeyMeta::owned(name.into(), false)), default }
    }

    /// Creates a key whose identity is a `static` [`KeyMeta`].
    pub const fn from_static(meta: &'static KeyMeta, default: T) -> Self {
        Self { id: KeyId::from_static(meta), default }
    }

    /// The key identity.
    #[inline]
    pub fn id(&self) -> &KeyId {
        &self.id
    }

    /// The diagnostic name.
    #[inline]
    pub fn name(&self) -> &str {
        self.id.name()
    }

    /// The declared default.
    #[inline]
    pub fn default(&self) -> &T {
        &self.default
    }

    /// Pairs this key with a value.
    #[inline]
    pub fn provide(&self, value: T) -> Provider
    where
        T: KeyValue,
    {
        Provider::new(&self.id, value)
    }
}

impl<T: Clone> Clone for DefaultKey<T> {
    fn clone(&self) -> Self {
        Self { id: self.id.clone(), default: self.default.clone() }
    }
}

impl<T: Debug> Debug for DefaultKey<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DefaultKey")
            .field("name", &self.name())
            .field("default", &self.default)
            .finish()
    }
}

impl<T: KeyValue> Consumer for DefaultKey<T> {
    type Value = T;
    type Output<'a> = &'a T;

    #[inline]
    fn id(&self) -> &KeyId {
        &self.id
    }

    #[inline]
    fn default_value(&self) -> Option<&T> {
        Some(&self.default)
    }

    #[inline]
    fn resolve<'a>(&'a self, found: Option<&'a T>) -> &'a T {
        found.unwrap_or(&self.default)
    }
}

/// A marker key without payload.
#[derive(Clone)]
pub struct EmptyKey {
    id: KeyId,
}

impl EmptyKey {
    /// Creates a fresh marker key.
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self { id: KeyId::shared(KeyMeta::owned(name.into(), true)) }
    }

    /// Creates a marker key whose identity is a `static` [`KeyMeta`].
    pub const fn from_static(meta: &'static KeyMeta) -> Self {
        Self { id: KeyId::from_static(meta) }
    }

    /// The key identity.
    #[inline]
    pub fn id(&self) -> &KeyId {
        &self.id
    }

    /// The diagnostic name.
    #[inline]
    pub fn name(&self) -> &str {
        self.id.name()
    }

    /// A provider marking a stack with this key.
    #[inline]
    pub fn provide(&self) -> Provider {
        Provider::new(&self.id, ())
    }
}

impl Debug for EmptyKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("EmptyKey").field(&self.name()).finish()
    }
}

impl Consumer for EmptyKey {
    type Value = ();
    type Output<'a> = Option<&'a ()>;

    #[inline]
    fn id(&self) -> &KeyId {
        &self.id
    }

    #[inline]
    fn default_value(&self) -> Option<&()> {
        None
    }

    #[inline]
    fn resolve<'a>(&'a self, found: Option<&'a ()>) -> Option<&'a ()> {
        found
    }
}
