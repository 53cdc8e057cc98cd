//! Well-known keys read by [`Erreur`](super::Erreur) accessors.
use crate::types::alloc_type::Cow;
use crate::types::JsonValue;

use super::Erreur;

crate::static_key! {
    /// Display name of the error. Defaults to `"Erreur"`.
    pub NAME_KEY: DefaultKey<Cow<'static, str>> = "Name", default Cow::Borrowed("Erreur")
}

crate::static_key! {
    /// Human readable message. Defaults to `"[Erreur]"`.
    pub MESSAGE_KEY: DefaultKey<Cow<'static, str>> = "Message", default Cow::Borrowed("[Erreur]")
}

crate::static_key! {
    /// Explicit JSON projection, overriding the `{ name, message }` fallback.
    pub JSON_KEY: Key<JsonValue> = "Json"
}

crate::static_key! {
    /// Pre-captured stack trace.
    pub STACK_TRACE_KEY: Key<Cow<'static, str>> = "StackTrace"
}

crate::static_key! {
    /// The error that caused this one; exposed through `Error::source`.
    pub CAUSE_KEY: Key<Erreur> = "Cause"
}
