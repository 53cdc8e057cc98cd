use super::Erreur;
use crate::types::error_formatter::ErreurFormatConfig;
use core::fmt::{self, Debug, Display};

impl Display for Erreur {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !f.alternate() {
            return write!(f, "{}: {}", self.name(), self.message());
        }
        f.write_str(&ErreurFormatConfig::pretty().format(self))
    }
}

impl Debug for Erreur {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Erreur")
            .field("name", &self.name())
            .field("message", &self.message())
            .field("context", self.stack())
            .finish()
    }
}

impl PartialEq for Erreur {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.stack().ptr_eq(other.stack())
    }
}

impl Eq for Erreur {}

impl core::error::Error for Erreur {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        self.cause().map(|cause| cause as &(dyn core::error::Error + 'static))
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Erreur {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serde::Serialize::serialize(&self.to_json(), serializer)
    }
}
