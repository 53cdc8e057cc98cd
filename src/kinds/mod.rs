//! Named error kinds and matching.
//!
//! An [`ErrorKind`] is a key plus a message function. Errors created from a
//! kind carry the kind's data under its key, the kind name as
//! [`NAME_KEY`](crate::NAME_KEY) and the computed message. Matching is a
//! plain lookup: an error "is" of a kind when its stack holds an entry for the
//! kind's key, wherever the error came from.
//!
//! # Examples
//!
//! ```
//! use erreur::kinds::{match_first, ErrorKind, Matcher};
//!
//! #[derive(Debug, PartialEq)]
//! struct NotFound {
//!     id: u64,
//! }
//!
//! let not_found = ErrorKind::<NotFound>::new("NotFound")
//!     .with_message(|data, _| format!("item {} not found", data.id));
//! let forbidden = ErrorKind::<()>::empty("Forbidden");
//!
//! let err = not_found.create(NotFound { id: 7 });
//! assert_eq!(err.name(), "NotFound");
//! assert_eq!(err.message(), "item 7 not found");
//! assert_eq!(not_found.extract(&err), Some(&NotFound { id: 7 }));
//! assert!(!forbidden.is(&err));
//!
//! let hit = match_first(&err, &[&forbidden as &dyn Matcher, &not_found]).unwrap();
//! assert_eq!((hit.index, hit.name), (1, "NotFound"));
//! ```
use crate::types::alloc_type::{Arc, Cow, String, Vec};
use crate::types::erreur::{MESSAGE_KEY, NAME_KEY};
use crate::types::{Erreur, Key, KeyValue};
use core::fmt::{self, Debug, Write};

mod store;

pub use store::{ErreurStore, ReadonlyErreurStore};

type MessageFn<D> = Arc<dyn Fn(&D, &str) -> String + Send + Sync>;

enum Message<D> {
    /// `"{name} {data:?}"`.
    Default,
    Static(Cow<'static, str>),
    Custom(MessageFn<D>),
}

impl<D> Clone for Message<D> {
    fn clone(&self) -> Self {
        match self {
            Self::Default => Self::Default,
            Self::Static(message) => Self::Static(message.clone()),
            Self::Custom(f) => Self::Custom(Arc::clone(f)),
        }
    }
}

/// A named error kind carrying data of type `D`.
pub struct ErrorKind<D> {
    key: Key<D>,
    message: Message<D>,
}

impl<D: KeyValue> ErrorKind<D> {
    /// Declares a kind. The default message is the name followed by the
    /// `Debug` rendering of the data.
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self { key: Key::new(name), message: Message::Default }
    }

    /// Same kind, with messages computed by `f(data, name)`.
    pub fn with_message<F>(&self, f: F) -> Self
    where
        F: Fn(&D, &str) -> String + Send + Sync + 'static,
    {
        Self { key: self.key.clone(), message: Message::Custom(Arc::new(f)) }
    }

    /// Same kind, with a fixed message.
    pub fn with_static_message(&self, message: impl Into<Cow<'static, str>>) -> Self {
        Self { key: self.key.clone(), message: Message::Static(message.into()) }
    }

    /// Same kind, created from `A` through `transform`.
    pub fn with_transform<A, F>(&self, transform: F) -> TransformedKind<D, F>
    where
        F: Fn(A) -> D,
    {
        TransformedKind { kind: self.clone(), transform }
    }

    /// The kind name.
    #[inline]
    pub fn name(&self) -> &str {
        self.key.name()
    }

    /// The key under which the data is stored.
    #[inline]
    pub fn key(&self) -> &Key<D> {
        &self.key
    }

    /// The message an error of this kind carrying `data` gets.
    pub fn message_for(&self, data: &D) -> String {
        match &self.message {
            Message::Default => {
                let mut out = String::new();
                let _ = write!(out, "{} {:?}", self.name(), data);
                out
            }
            Message::Static(message) => String::from(&**message),
            Message::Custom(f) => f(data, self.name()),
        }
    }

    /// A new error of this kind.
    pub fn create(&self, data: D) -> Erreur {
        self.annotate(&Erreur::new(), data)
    }

    /// A new error of this kind caused by `cause`.
    pub fn create_with_cause(&self, cause: Erreur, data: D) -> Erreur {
        self.create(data).with_cause(cause)
    }

    /// Marks an existing error as being of this kind, overriding its name and
    /// message.
    pub fn annotate(&self, erreur: &Erreur, data: D) -> Erreur {
        let message = self.message_for(&data);
        erreur.with([
            self.key.provide(data),
            NAME_KEY.provide(Cow::Owned(String::from(self.name()))),
            MESSAGE_KEY.provide(Cow::Owned(message)),
        ])
    }

    /// Returns `true` if `erreur` carries this kind.
    #[inline]
    pub fn is(&self, erreur: &Erreur) -> bool {
        erreur.has(&self.key)
    }

    /// The data of this kind carried by `erreur`.
    #[inline]
    pub fn extract<'a>(&'a self, erreur: &'a Erreur) -> Option<&'a D> {
        erreur.get(&self.key)
    }

    /// Runs `f` on the data if `erreur` carries this kind.
    #[inline]
    pub fn match_with<'a, R>(&'a self, erreur: &'a Erreur, f: impl FnOnce(&'a D) -> R) -> Option<R> {
        self.extract(erreur).map(f)
    }
}

impl ErrorKind<()> {
    /// Declares a kind without data whose message is its name.
    pub fn empty(name: impl Into<Cow<'static, str>>) -> Self {
        let name = name.into();
        Self { key: Key::new(name.clone()), message: Message::Static(name) }
    }
}

impl<D> Clone for ErrorKind<D> {
    fn clone(&self) -> Self {
        Self { key: self.key.clone(), message: self.message.clone() }
    }
}

impl<D> Debug for ErrorKind<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ErrorKind").field(&self.key.name()).finish()
    }
}

/// An [`ErrorKind`] whose data is built from other arguments.
///
/// ```
/// use erreur::kinds::ErrorKind;
///
/// let timeout = ErrorKind::<u64>::new("Timeout").with_transform(|secs: u32| u64::from(secs) * 1000);
///
/// let err = timeout.create(2);
/// assert_eq!(timeout.kind().extract(&err), Some(&2000));
/// assert_eq!(err.message(), "Timeout 2000");
/// ```
pub struct TransformedKind<D, F> {
    kind: ErrorKind<D>,
    transform: F,
}

impl<D: KeyValue, F> TransformedKind<D, F> {
    /// The underlying kind; matching goes through it.
    #[inline]
    pub fn kind(&self) -> &ErrorKind<D> {
        &self.kind
    }

    /// A new error built from `args`.
    pub fn create<A>(&self, args: A) -> Erreur
    where
        F: Fn(A) -> D,
    {
        self.kind.create((self.transform)(args))
    }

    /// A new error built from `args`, caused by `cause`.
    pub fn create_with_cause<A>(&self, cause: Erreur, args: A) -> Erreur
    where
        F: Fn(A) -> D,
    {
        self.kind.create_with_cause(cause, (self.transform)(args))
    }

    /// Returns `true` if `erreur` carries this kind.
    #[inline]
    pub fn is(&self, erreur: &Erreur) -> bool {
        self.kind.is(erreur)
    }
}

impl<D, F: Clone> Clone for TransformedKind<D, F> {
    fn clone(&self) -> Self {
        Self { kind: self.kind.clone(), transform: self.transform.clone() }
    }
}

impl<D, F> Debug for TransformedKind<D, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("TransformedKind").field(&self.kind.key.name()).finish()
    }
}

/// Anything that can tell whether an error belongs to it.
pub trait Matcher {
    /// Name reported in [`KindMatch`].
    fn kind_name(&self) -> &str;

    /// Returns `true` if `erreur` matches.
    fn matches(&self, erreur: &Erreur) -> bool;
}

impl<D: KeyValue> Matcher for ErrorKind<D> {
    #[inline]
    fn kind_name(&self) -> &str {
        self.name()
    }

    #[inline]
    fn matches(&self, erreur: &Erreur) -> bool {
        self.is(erreur)
    }
}

impl<D: KeyValue, F> Matcher for TransformedKind<D, F> {
    #[inline]
    fn kind_name(&self) -> &str {
        self.kind.name()
    }

    #[inline]
    fn matches(&self, erreur: &Erreur) -> bool {
        self.is(erreur)
    }
}

/// Which matcher matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KindMatch<'a> {
    /// Position in the slice passed to [`match_first`] / [`match_all`].
    pub index: usize,
    /// The matcher's [`kind_name`](Matcher::kind_name).
    pub name: &'a str,
}

/// The first matcher that matches `erreur`.
pub fn match_first<'a>(erreur: &Erreur, matchers: &[&'a dyn Matcher]) -> Option<KindMatch<'a>> {
    matchers
        .iter()
        .copied()
        .enumerate()
        .find(|(_, matcher)| matcher.matches(erreur))
        .map(|(index, matcher)| KindMatch { index, name: matcher.kind_name() })
}

/// Every matcher that matches `erreur`, in slice order.
pub fn match_all<'a>(erreur: &Erreur, matchers: &[&'a dyn Matcher]) -> Vec<KindMatch<'a>> {
    matchers
        .iter()
        .copied()
        .enumerate()
        .filter(|(_, matcher)| matcher.matches(erreur))
        .map(|(index, matcher)| KindMatch { index, name: matcher.kind_name() })
        .collect()
}

/// Returns `true` if any matcher matches `erreur`.
#[inline]
pub fn is_one_of(erreur: &Erreur, matchers: &[&dyn Matcher]) -> bool {
    matchers.iter().any(|matcher| matcher.matches(erreur))
}


/// A [`Matcher`] that also hands back the data it matched.
pub trait DataMatcher<D>: Matcher {
    /// The data `erreur` carries for this matcher.
    fn data<'a>(&'a self, erreur: &'a Erreur) -> Option<&'a D>;
}

impl<D: KeyValue> DataMatcher<D> for ErrorKind<D> {
    #[inline]
    fn data<'a>(&'a self, erreur: &'a Erreur) -> Option<&'a D> {
        self.extract(erreur)
    }
}

impl<D: KeyValue, F> DataMatcher<D> for TransformedKind<D, F> {
    #[inline]
    fn data<'a>(&'a self, erreur: &'a Erreur) -> Option<&'a D> {
        self.kind.extract(erreur)
    }
}

/// The data of the first matcher that matches `erreur`.
///
/// ```
/// use erreur::kinds::{match_all_data, match_first_data, DataMatcher, ErreurStore};
/// use erreur::Erreur;
///
/// let retryable = ErreurStore::<u32>::new("Retryable");
/// let throttled = ErreurStore::<u32>::new("Throttled");
///
/// let err = throttled.set(&Erreur::create("slow down"), 30).unwrap();
/// let stores = [&retryable as &dyn DataMatcher<u32>, &throttled];
///
/// assert_eq!(match_first_data(&err, &stores), Some(&30));
/// assert_eq!(match_all_data(&err, &stores), [None, Some(&30)]);
/// ```
pub fn match_first_data<'a, D: 'a>(erreur: &'a Erreur, matchers: &[&'a dyn DataMatcher<D>]) -> Option<&'a D> {
    matchers.iter().find_map(|matcher| matcher.data(erreur))
}

/// The data of every matcher for `erreur`, in slice order.
pub fn match_all_data<'a, D: 'a>(erreur: &'a Erreur, matchers: &[&'a dyn DataMatcher<D>]) -> Vec<Option<&'a D>> {
    matchers.iter().map(|matcher| matcher.data(erreur)).collect()
}
