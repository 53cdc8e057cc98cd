//! Declarative helpers for keys and errors.
//!
//! - [`macro@crate::static_key`] declares a key as a `static` item, so it can be
//!   shared across modules without lazy initialisation.
//! - [`macro@crate::erreur`] builds an [`Erreur`](crate::Erreur) from a message,
//!   formatting it only when arguments are given.
//!
//! # Examples
//!
//! ```
//! use erreur::{erreur, static_key, Erreur};
//!
//! static_key! {
//!     /// HTTP status attached to an error.
//!     pub STATUS: Key<u16> = "Status"
//! }
//!
//! let err = erreur!("user {} not found", 42).with(STATUS.provide(404));
//! assert_eq!(err.message(), "user 42 not found");
//! assert_eq!(err.get(&STATUS), Some(&404));
//! ```

/// Declares a key as a `static` item.
///
/// Three forms are accepted, one per key flavour:
///
/// ```
/// use erreur::static_key;
///
/// static_key! { pub CODE: Key<u16> = "Code" }
/// static_key! { pub RETRIES: DefaultKey<u32> = "Retries", default 3 }
/// static_key! { pub FATAL: EmptyKey = "Fatal" }
///
/// assert_eq!(CODE.name(), "Code");
/// assert_eq!(*RETRIES.default(), 3);
/// assert_eq!(FATAL.name(), "Fatal");
/// ```
///
/// Each invocation creates its own identity; the default must be a constant
/// expression.
#[macro_export]
macro_rules! static_key {
    ($(#[$attr:meta])* $vis:vis $name:ident : Key<$ty:ty> = $label:literal $(;)?) => {
        $(#[$attr])*
        $vis static $name: $crate::Key<$ty> = {
            static META: $crate::KeyMeta = $crate::KeyMeta::new($label);
            $crate::Key::from_static(&META)
        };
    };
    ($(#[$attr:meta])* $vis:vis $name:ident : DefaultKey<$ty:ty> = $label:literal, default $default:expr $(;)?) => {
        $(#[$attr])*
        $vis static $name: $crate::DefaultKey<$ty> = {
            static META: $crate::KeyMeta = $crate::KeyMeta::new($label);
            $crate::DefaultKey::from_static(&META, $default)
        };
    };
    ($(#[$attr:meta])* $vis:vis $name:ident : EmptyKey = $label:literal $(;)?) => {
        $(#[$attr])*
        $vis static $name: $crate::EmptyKey = {
            static META: $crate::KeyMeta = $crate::KeyMeta::marker($label);
            $crate::EmptyKey::from_static(&META)
        };
    };
}

/// Creates an [`Erreur`](crate::Erreur) carrying a message.
///
/// Accepts the same arguments as `format!`. A literal without placeholders
/// is stored without allocating.
///
/// ```
/// use erreur::erreur;
///
/// assert_eq!(erreur!("boom").message(), "boom");
/// let code = 7;
/// assert_eq!(erreur!("code {}", code).message(), "code 7");
/// assert_eq!(erreur!("code {code}").message(), "code 7");
/// ```
#[macro_export]
macro_rules! erreur {
    ($msg:literal $(,)?) => {
        match format_args!($msg).as_str() {
            Some(message) => $crate::Erreur::create(message),
            None => $crate::Erreur::create($crate::types::alloc_type::format!($msg)),
        }
    };
    ($fmt:literal, $($arg:tt)+) => {
        $crate::Erreur::create($crate::types::alloc_type::format!($fmt, $($arg)+))
    };
}
