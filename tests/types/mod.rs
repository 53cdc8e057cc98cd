pub mod erreur;
pub mod error_formatter;

#[cfg(feature = "serde")]
pub mod json;
