//! Immutable, structurally shared context stack.
//!
//! A [`Stack`] is a persistent singly linked list of `(key, value)` entries,
//! newest first. Every "write" ([`Stack::push`], [`Stack::merge`],
//! [`Stack::dedupe`]) returns a new stack that shares as much of its input as
//! possible; existing stacks are never mutated, so any number of derived
//! errors can share the same history.
//!
//! Lookups walk from the newest entry to the oldest and stop at the first
//! entry whose key matches by identity. A later write for a key therefore
//! shadows earlier ones without removing them.
//!
//! # Examples
//!
//! ```
//! use erreur::{Key, Stack};
//!
//! let message: Key<&'static str> = Key::new("Message");
//!
//! let base = Stack::new().push(message.provide("first"));
//! let next = base.push(message.provide("second"));
//!
//! assert_eq!(next.get(&message), Some(&"second"));
//! assert_eq!(base.get(&message), Some(&"first"));
//! assert_eq!(next.len(), 2);
//! ```
use crate::traits::IntoProviders;
use crate::types::alloc_type::{Arc, Vec};
use crate::types::key::{AnyValue, Consumer, KeyId, KeyValue, Provider};
use crate::types::MissingContext;
use core::any::Any;
use core::fmt::{self, Debug};
use smallvec::SmallVec;

mod debug_entry;
mod dedup;
mod merging;

pub use debug_entry::DebugEntry;

/// Scratch buffer used while rebuilding part of a stack.
pub(crate) type NodeVec<'a> = SmallVec<[&'a Node; 8]>;

pub(crate) struct Node {
    pub(crate) key: KeyId,
    pub(crate) value: Arc<dyn AnyValue>,
    pub(crate) parent: Option<Arc<Node>>,
}

impl Drop for Node {
    // Unlink iteratively so that dropping a deep, unshared chain does not recurse.
    fn drop(&mut self) {
        let mut next = self.parent.take();
        while let Some(node) = next {
            match Arc::try_unwrap(node) {
                Ok(mut node) => next = node.parent.take(),
                Err(_) => break,
            }
        }
    }
}

/// Persistent newest-first list of annotations.
///
/// Cloning is cheap (one reference count). See the [module docs](self).
#[derive(Clone, Default)]
#[must_use]
pub struct Stack {
    head: Option<Arc<Node>>,
}

impl Stack {
    /// The empty stack.
    #[inline]
    pub const fn new() -> Self {
        Self { head: None }
    }

    /// Returns `true` if the stack has no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Number of entries, shadowed ones included.
    pub fn len(&self) -> usize {
        self.nodes().count()
    }

    /// Returns `true` if both stacks are the same structural value.
    ///
    /// Two empty stacks are always the same value.
    #[inline]
    pub fn ptr_eq(&self, other: &Stack) -> bool {
        match (&self.head, &other.head) {
            (None, None) => true,
            (Some(a), Some(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }

    /// Returns a new stack with `provider` on top.
    #[inline]
    pub fn push(&self, provider: Provider) -> Stack {
        self.push_raw(provider.key, provider.value)
    }

    /// Returns a new stack with every provider pushed in order.
    ///
    /// Later providers shadow earlier ones; all of them shadow `self`.
    pub fn with<P: IntoProviders>(&self, providers: P) -> Stack {
        providers
            .into_providers()
            .into_iter()
            .fold(self.clone(), |stack, provider| stack.push(provider))
    }

    /// Looks up `key`, falling back to its default.
    ///
    /// Returns `Option<&T>` for [`Key`](crate::Key) and [`EmptyKey`](crate::EmptyKey),
    /// `&T` for [`DefaultKey`](crate::DefaultKey).
    #[inline]
    pub fn get<'a, C: Consumer>(&'a self, key: &'a C) -> C::Output<'a> {
        key.resolve(self.find::<C::Value>(key.id()))
    }

    /// Looks up `key`, failing with [`MissingContext`] when there is neither
    /// an entry nor a default.
    pub fn get_or_fail<'a, C: Consumer>(&'a self, key: &'a C) -> Result<&'a C::Value, MissingContext> {
        self.find::<C::Value>(key.id())
            .or_else(|| key.default_value())
            .ok_or_else(|| MissingContext::new(key.id().name_cow()))
    }

    /// Returns `true` if an entry for `key` exists. Defaults are ignored.
    #[inline]
    pub fn has<C: Consumer>(&self, key: &C) -> bool {
        self.find::<C::Value>(key.id()).is_some()
    }

    /// Iterates over the entries, newest first.
    #[inline]
    pub fn iter(&self) -> Iter<'_> {
        Iter { nodes: self.nodes() }
    }

    /// Produces a newest-first dump of the stack for diagnostics and tests.
    pub fn debug(&self) -> Vec<DebugEntry> {
        self.iter().map(DebugEntry::from).collect()
    }

    pub(crate) fn push_raw(&self, key: KeyId, value: Arc<dyn AnyValue>) -> Stack {
        Stack { head: Some(Arc::new(Node { key, value, parent: self.head.clone() })) }
    }

    pub(crate) fn from_parent(parent: Option<Arc<Node>>) -> Stack {
        Stack { head: parent }
    }

    #[inline]
    pub(crate) fn head(&self) -> Option<&Arc<Node>> {
        self.head.as_ref()
    }

    #[inline]
    pub(crate) fn nodes(&self) -> Nodes<'_> {
        Nodes { next: self.head.as_deref() }
    }

    /// Nearest entry for `id`, whatever its type.
    pub(crate) fn find_raw(&self, id: &KeyId) -> Option<&Node> {
        self.nodes().find(|node| node.key == *id)
    }

    fn find<T: KeyValue>(&self, id: &KeyId) -> Option<&T> {
        self.nodes()
            .filter(|node| node.key == *id)
            .find_map(|node| node.value.as_any().downcast_ref::<T>())
    }
}

impl Debug for Stack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.iter().map(|entry| (entry.name(), &entry.node.value)))
            .finish()
    }
}

impl FromIterator<Provider> for Stack {
    fn from_iter<I: IntoIterator<Item = Provider>>(iter: I) -> Self {
        iter.into_iter().fold(Stack::new(), |stack, provider| stack.push(provider))
    }
}

pub(crate) struct Nodes<'a> {
    next: Option<&'a Node>,
}

impl<'a> Iterator for Nodes<'a> {
    type Item = &'a Node;

    #[inline]
    fn next(&mut self) -> Option<&'a Node> {
        let node = self.next?;
        self.next = node.parent.as_deref();
        Some(node)
    }
}

/// Borrowed view of one stack entry.
#[derive(Clone, Copy)]
pub struct Entry<'a> {
    node: &'a Node,
}

impl<'a> Entry<'a> {
    /// The key identity of the entry.
    #[inline]
    pub fn key(&self) -> &'a KeyId {
        &self.node.key
    }

    /// The diagnostic name of the entry's key.
    #[inline]
    pub fn name(&self) -> &'a str {
        self.node.key.name()
    }

    /// The stored value, type-erased.
    #[inline]
    pub fn value(&self) -> &'a dyn Any {
        self.node.value.as_any()
    }

    /// Returns `true` if this entry was written through `key`.
    #[inline]
    pub fn is<C: Consumer>(&self, key: &C) -> bool {
        self.node.key == *key.id()
    }

    /// The stored value, if it has type `T`.
    #[inline]
    pub fn downcast<T: KeyValue>(&self) -> Option<&'a T> {
        self.value().downcast_ref::<T>()
    }
}

impl Debug for Entry<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Entry")
            .field("name", &self.name())
            .field("value", &self.node.value)
            .finish()
    }
}

/// Iterator over the entries of a [`Stack`], newest first.
pub struct Iter<'a> {
    nodes: Nodes<'a>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = Entry<'a>;

    #[inline]
    fn next(&mut self) -> Option<Entry<'a>> {
        self.nodes.next().map(|node| Entry { node })
    }
}

impl<'a> IntoIterator for &'a Stack {
    type Item = Entry<'a>;
    type IntoIter = Iter<'a>;

    #[inline]
    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}

/// Free-function form of [`Stack::merge`].
#[inline]
pub fn merge(top: &Stack, base: &Stack) -> Stack {
    top.merge(base)
}

/// Free-function form of [`Stack::dedupe`].
#[inline]
pub fn dedupe(stack: &Stack) -> Stack {
    stack.dedupe()
}

/// Free-function form of [`Stack::debug`].
#[inline]
pub fn debug(stack: &Stack) -> Vec<DebugEntry> {
    stack.debug()
}
