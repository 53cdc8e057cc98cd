//! Helpers turning foreign failures into annotated [`Erreur`] values.
//!
//! - [`wrap`] runs a fallible closure and normalises its error.
//! - [`resolve`] runs a closure that may panic and turns the panic into an
//!   error (requires `std`).
//! - [`with_context`], [`with_context_result`] and [`context_fn`] attach
//!   providers while converting.
//!
//! In every helper an error that already is an [`Erreur`] passes through
//! untouched; only foreign errors reach the `on_error` conversion.

use crate::traits::{IntoErreur, IntoProviders};
use crate::types::Erreur;
use core::any::Any;

/// Runs `f`, converting a non-[`Erreur`] error with `on_error`.
///
/// # Examples
///
/// ```
/// use erreur::{wrap, Erreur};
///
/// let parsed = wrap(|| "42".parse::<u8>(), |e| Erreur::create(e.to_string()).with_name("Parse"));
/// assert_eq!(parsed, Ok(42));
///
/// let failed = wrap(|| "x".parse::<u8>(), |e| Erreur::create(e.to_string()).with_name("Parse"));
/// assert_eq!(failed.unwrap_err().name(), "Parse");
///
/// let original = Erreur::create("kept");
/// let passed = wrap(|| Err::<(), _>(original.clone()), |_| Erreur::create("replaced"));
/// assert_eq!(passed.unwrap_err(), original);
/// ```
#[inline]
pub fn wrap<T, E, F, H>(f: F, on_error: H) -> Result<T, Erreur>
where
    F: FnOnce() -> Result<T, E>,
    E: 'static,
    H: FnOnce(E) -> Erreur,
{
    f().map_err(|error| normalize(error, on_error))
}

/// Runs `f`, turning a panic into an error.
///
/// A panic raised with an [`Erreur`] payload (`std::panic::panic_any`) is
/// returned as is. Any other payload goes through `on_error`;
/// [`Erreur::from_panic`] is the usual choice. The panic hook still runs.
///
/// # Examples
///
/// ```
/// use erreur::{resolve, Erreur};
///
/// assert_eq!(resolve(|| 1 + 1, Erreur::from_panic), Ok(2));
///
/// let err = resolve(|| -> u8 { panic!("exploded") }, Erreur::from_panic).unwrap_err();
/// assert_eq!(err.message(), "exploded");
/// ```
#[cfg(feature = "std")]
pub fn resolve<T, F, H>(f: F, on_error: H) -> Result<T, Erreur>
where
    F: FnOnce() -> T,
    H: FnOnce(crate::types::alloc_type::Box<dyn Any + Send>) -> Erreur,
{
    std::panic::catch_unwind(std::panic::AssertUnwindSafe(f))
        .map_err(|payload| convert_panic(payload, on_error))
}

#[cfg(feature = "std")]
pub(crate) fn convert_panic<H>(payload: crate::types::alloc_type::Box<dyn Any + Send>, on_error: H) -> Erreur
where
    H: FnOnce(crate::types::alloc_type::Box<dyn Any + Send>) -> Erreur,
{
    let payload = match payload.downcast::<Erreur>() {
        Ok(erreur) => return *erreur,
        Err(payload) => payload,
    };
    let erreur = on_error(payload);
    #[cfg(feature = "tracing")]
    tracing::warn!(error = %erreur, "panic converted into an error");
    erreur
}

/// Converts `error` and pushes `providers` on it.
///
/// ```
/// use erreur::{with_context, Key};
///
/// let host: Key<&'static str> = Key::new("Host");
/// let err = with_context("unreachable", host.provide("db-1"));
/// assert_eq!(err.get(&host), Some(&"db-1"));
/// ```
#[inline]
pub fn with_context<E, P>(error: E, providers: P) -> Erreur
where
    E: IntoErreur,
    P: IntoProviders,
{
    error.into_erreur().with(providers)
}

/// [`with_context`] applied to the error side of `result`.
#[inline]
pub fn with_context_result<T, E, P>(result: Result<T, E>, providers: P) -> Result<T, Erreur>
where
    E: IntoErreur,
    P: IntoProviders,
{
    result.map_err(|error| with_context(error, providers))
}

/// Builds a reusable `map_err` closure pushing `providers`.
///
/// ```
/// use erreur::{context_fn, Key};
///
/// let stage: Key<&'static str> = Key::new("Stage");
/// let annotate = context_fn(stage.provide("decode"));
///
/// let err = Err::<(), _>("bad header").map_err(&annotate).unwrap_err();
/// assert_eq!(err.get(&stage), Some(&"decode"));
/// ```
#[inline]
pub fn context_fn<E, P>(providers: P) -> impl Fn(E) -> Erreur
where
    E: IntoErreur,
    P: IntoProviders + Clone,
{
    move |error| with_context(error, providers.clone())
}

/// Returns `error` itself when it is an [`Erreur`], `on_error(error)` otherwise.
pub(crate) fn normalize<E, H>(error: E, on_error: H) -> Erreur
where
    E: 'static,
    H: FnOnce(E) -> Erreur,
{
    let mut slot = Some(error);
    if let Some(erreur) = (&mut slot as &mut dyn Any)
        .downcast_mut::<Option<Erreur>>()
        .and_then(Option::take)
    {
        return erreur;
    }
    slot.map_or_else(Erreur::new, on_error)
}
