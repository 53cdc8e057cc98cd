//! The error value carried through application code.
//!
//! An [`Erreur`] is nothing more than a [`Stack`] of annotations. Its name,
//! message, stack trace and JSON projection are read from well-known keys on
//! demand, with documented fallbacks, so an error can be created bare and
//! enriched as it travels up the call chain.
//!
//! # Examples
//!
//! ```
//! use erreur::{Erreur, Key};
//!
//! let user_id: Key<u64> = Key::new("UserId");
//!
//! let err = Erreur::create("user not found")
//!     .with_name("NotFound")
//!     .with(user_id.provide(42));
//!
//! assert_eq!(err.name(), "NotFound");
//! assert_eq!(err.message(), "user not found");
//! assert_eq!(err.get(&user_id), Some(&42));
//! assert_eq!(err.to_string(), "NotFound: user not found");
//! ```
use crate::traits::IntoProviders;
use crate::types::alloc_type::{Box, Cow, String, Vec};
use crate::types::error_formatter::ErreurFormatConfig;
use crate::types::key::Consumer;
use crate::types::stack::{DebugEntry, Stack};
use crate::types::{JsonValue, MissingContext};
use core::any::Any;
use core::fmt::{Display, Write};

mod keys;
mod traits;

pub use keys::{CAUSE_KEY, JSON_KEY, MESSAGE_KEY, NAME_KEY, STACK_TRACE_KEY};

/// An error whose data lives in an immutable context stack.
///
/// Cloning is cheap and clones share their stack. Two `Erreur` values are
/// equal when they share the same stack, not when they merely look alike.
#[must_use]
#[derive(Clone, Default)]
pub struct Erreur {
    stack: Stack,
}

impl Erreur {
    /// An error without any annotation.
    #[inline]
    pub const fn new() -> Self {
        Self { stack: Stack::new() }
    }

    /// An error with a message.
    #[inline]
    pub fn create(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new().with_message(message)
    }

    /// An error built from providers.
    #[inline]
    pub fn create_with<P: IntoProviders>(providers: P) -> Self {
        Self::new().with(providers)
    }

    /// An error with a message and, when backtraces are enabled through
    /// `RUST_BACKTRACE`/`RUST_LIB_BACKTRACE`, the current stack trace.
    #[cfg(feature = "std")]
    pub fn capture(message: impl Into<Cow<'static, str>>) -> Self {
        use std::backtrace::{Backtrace, BacktraceStatus};

        let trace = Backtrace::capture();
        let base = match trace.status() {
            BacktraceStatus::Captured => Self::new().with_stack_trace(trace.to_string()),
            _ => Self::new(),
        };
        base.with_message(message)
    }

    /// Wraps an existing stack.
    #[inline]
    pub const fn from_stack(stack: Stack) -> Self {
        Self { stack }
    }

    /// Converts any error; an `Erreur` is returned as is, anything else
    /// becomes an `Erreur` carrying its `Display` text as message.
    pub fn from_error<E>(error: E) -> Self
    where
        E: core::error::Error + Send + Sync + 'static,
    {
        let boxed: Box<dyn Any> = Box::new(error);
        match boxed.downcast::<Erreur>() {
            Ok(erreur) => *erreur,
            Err(other) => match other.downcast::<E>() {
                Ok(error) => Self::create(display_to_string(&*error)),
                Err(_) => Self::new(),
            },
        }
    }

    /// Converts a boxed error, unboxing it if it already is an `Erreur`.
    #[cfg(feature = "std")]
    pub fn from_boxed(error: Box<dyn core::error::Error + Send + Sync>) -> Self {
        match error.downcast::<Erreur>() {
            Ok(erreur) => *erreur,
            Err(other) => Self::create(other.to_string()),
        }
    }

    /// Converts a panic payload.
    ///
    /// An `Erreur` payload (raised with `std::panic::panic_any`) is returned as
    /// is; string payloads become the message; anything else yields the
    /// message `"ErrorFromUnknown"`.
    pub fn from_panic(payload: Box<dyn Any + Send>) -> Self {
        let payload = match payload.downcast::<Erreur>() {
            Ok(erreur) => return *erreur,
            Err(payload) => payload,
        };
        let payload = match payload.downcast::<String>() {
            Ok(message) => return Self::create(*message),
            Err(payload) => payload,
        };
        match payload.downcast::<&'static str>() {
            Ok(message) => Self::create(*message),
            Err(_) => Self::create("ErrorFromUnknown"),
        }
    }

    /// Returns `true` if `error` is an `Erreur`.
    #[inline]
    pub fn is(error: &(dyn core::error::Error + 'static)) -> bool {
        error.is::<Erreur>()
    }

    /// The underlying stack.
    #[inline]
    pub fn stack(&self) -> &Stack {
        &self.stack
    }

    /// Consumes the error, returning its stack.
    #[inline]
    pub fn into_stack(self) -> Stack {
        self.stack
    }

    /// A new error with the providers pushed on top. `self` is untouched.
    #[inline]
    pub fn with<P: IntoProviders>(&self, providers: P) -> Self {
        Self { stack: self.stack.with(providers) }
    }

    /// Sets the message.
    #[inline]
    pub fn with_message(&self, message: impl Into<Cow<'static, str>>) -> Self {
        self.with(MESSAGE_KEY.provide(message.into()))
    }

    /// Sets the name.
    #[inline]
    pub fn with_name(&self, name: impl Into<Cow<'static, str>>) -> Self {
        self.with(NAME_KEY.provide(name.into()))
    }

    /// Sets the JSON projection returned by [`Erreur::to_json`].
    #[inline]
    pub fn with_json(&self, json: impl Into<JsonValue>) -> Self {
        self.with(JSON_KEY.provide(json.into()))
    }

    /// Attaches a stack trace captured by the caller.
    #[inline]
    pub fn with_stack_trace(&self, trace: impl Into<Cow<'static, str>>) -> Self {
        self.with(STACK_TRACE_KEY.provide(trace.into()))
    }

    /// Records the error that caused this one.
    #[inline]
    pub fn with_cause(&self, cause: Erreur) -> Self {
        self.with(CAUSE_KEY.provide(cause))
    }

    /// Looks up `key`; see [`Stack::get`].
    #[inline]
    pub fn get<'a, C: Consumer>(&'a self, key: &'a C) -> C::Output<'a> {
        self.stack.get(key)
    }

    /// Returns `true` if `key` has an entry; see [`Stack::has`].
    #[inline]
    pub fn has<C: Consumer>(&self, key: &C) -> bool {
        self.stack.has(key)
    }

    /// Looks up `key` or fails; see [`Stack::get_or_fail`].
    #[inline]
    pub fn get_or_fail<'a, C: Consumer>(&'a self, key: &'a C) -> Result<&'a C::Value, MissingContext> {
        self.stack.get_or_fail(key)
    }

    /// Layers the annotations of `self` on top of those of `other`.
    ///
    /// `self` wins on collisions. When `other` adds nothing the result is equal
    /// to `self`.
    ///
    /// ```
    /// use erreur::Erreur;
    ///
    /// let base = Erreur::create("request failed").with_name("HttpError");
    /// let cause = Erreur::create("timeout").with_name("IoError");
    ///
    /// let merged = base.merge(&cause);
    /// assert_eq!(merged.name(), "HttpError");
    /// assert_eq!(base.merge(&base), base);
    /// ```
    pub fn merge(&self, other: &Erreur) -> Self {
        let merged = self.stack.merge(&other.stack);
        if merged.ptr_eq(&self.stack) {
            return self.clone();
        }
        Self { stack: merged }
    }

    /// Layers the annotations of `other` on top of those of `self`.
    #[inline]
    pub fn merge_on(&self, other: &Erreur) -> Self {
        other.merge(self)
    }

    /// Drops shadowed annotations; see [`Stack::dedupe`].
    pub fn dedupe(&self) -> Self {
        let deduped = self.stack.dedupe();
        if deduped.ptr_eq(&self.stack) {
            return self.clone();
        }
        Self { stack: deduped }
    }

    /// The name, `"Erreur"` if none was set.
    #[inline]
    pub fn name(&self) -> &str {
        self.get(&NAME_KEY)
    }

    /// The message, `"[Erreur]"` if none was set.
    #[inline]
    pub fn message(&self) -> &str {
        self.get(&MESSAGE_KEY)
    }

    /// The stack trace, if one was attached.
    #[inline]
    pub fn stack_trace(&self) -> Option<&str> {
        self.get(&STACK_TRACE_KEY).map(|trace| &**trace)
    }

    /// The error that caused this one, if recorded.
    #[inline]
    pub fn cause(&self) -> Option<&Erreur> {
        self.get(&CAUSE_KEY)
    }

    /// The JSON projection: the value set with [`Erreur::with_json`], or an
    /// object with `name` and `message`.
    pub fn to_json(&self) -> JsonValue {
        match self.get(&JSON_KEY) {
            Some(json) => json.clone(),
            None => serde_json::json!({
                "name": self.name(),
                "message": self.message(),
            }),
        }
    }

    /// Newest-first dump of every annotation.
    #[inline]
    pub fn debug(&self) -> Vec<DebugEntry> {
        self.stack.debug()
    }

    /// Renders the error with a custom configuration.
    #[must_use]
    pub fn format_with(&self, config: &ErreurFormatConfig) -> String {
        config.format(self)
    }
}

impl From<Stack> for Erreur {
    #[inline]
    fn from(stack: Stack) -> Self {
        Self::from_stack(stack)
    }
}

impl From<&'static str> for Erreur {
    #[inline]
    fn from(message: &'static str) -> Self {
        Self::create(message)
    }
}

impl From<String> for Erreur {
    #[inline]
    fn from(message: String) -> Self {
        Self::create(message)
    }
}

pub(crate) fn display_to_string(value: &dyn Display) -> String {
    let mut out = String::new();
    let _ = write!(out, "{}", value);
    out
}
