//! Low-level building blocks for code that walks or rebuilds stacks.

// Key internals
pub use crate::types::key::{Consumer, KeyId, KeyMeta, KeyValue};

// Stack traversal
pub use crate::types::stack::{debug, dedupe, merge, Entry, Iter};

// Provider adapters
pub use crate::traits::{providers_from, ProvidersFrom};
