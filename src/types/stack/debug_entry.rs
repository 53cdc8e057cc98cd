use super::Entry;
use crate::types::alloc_type::{Cow, String};
use core::fmt::{self, Debug, Display, Write};

/// One record of a [`Stack::debug`](super::Stack::debug) dump.
///
/// `value` is the `Debug` rendering of the stored value, or `None` for
/// marker keys.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DebugEntry {
    pub name: Cow<'static, str>,
    pub value: Option<String>,
}

impl DebugEntry {
    /// A record for a key holding `value`.
    pub fn new(name: impl Into<Cow<'static, str>>, value: impl Debug) -> Self {
        Self { name: name.into(), value: Some(render(&value)) }
    }

    /// A record for a marker key.
    pub fn marker(name: impl Into<Cow<'static, str>>) -> Self {
        Self { name: name.into(), value: None }
    }
}

impl From<Entry<'_>> for DebugEntry {
    fn from(entry: Entry<'_>) -> Self {
        let key = entry.key();
        let value = (!key.is_marker()).then(|| render(&entry.node.value));
        Self { name: key.name_cow(), value }
    }
}

impl Display for DebugEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            Some(value) => write!(f, "{}: {}", self.name, value),
            None => f.write_str(&self.name),
        }
    }
}

fn render(value: &dyn Debug) -> String {
    let mut out = String::new();
    let _ = write!(out, "{:?}", value);
    out
}
