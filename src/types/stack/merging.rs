use super::{Node, NodeVec, Stack};
use crate::types::alloc_type::Arc;
use smallvec::SmallVec;

impl Stack {
    /// Combines two independently built stacks.
    ///
    /// The entries of `base` end up at the bottom and the entries of `self` on
    /// top, so `self` wins on key collisions:
    /// `get(a.merge(b), k) == get(a, k)` when `a.has(k)`, else `get(b, k)`.
    ///
    /// `self` is walked newest first and redundant entries are omitted:
    /// - the newest entry for a key is skipped when `base` already answers the
    ///   same value for that key;
    /// - a deeper entry is skipped when its key and value already appear among
    ///   the kept newer entries or anywhere in `base`, or when the newest entry
    ///   for its key was skipped.
    ///
    /// When `self` contributes nothing, `base` itself is returned (see
    /// [`Stack::ptr_eq`]); when `base` is already part of `self`, `self` is
    /// returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use erreur::{Key, Stack};
    ///
    /// let name: Key<&'static str> = Key::new("Name");
    /// let a = Stack::new().push(name.provide("X"));
    /// let b = Stack::new().push(name.provide("Y"));
    ///
    /// assert_eq!(a.merge(&b).get(&name), Some(&"X"));
    ///
    /// // `a` adds nothing on top of a stack that already says "X".
    /// let c = b.push(name.provide("X"));
    /// assert!(a.merge(&c).ptr_eq(&c));
    /// ```
    pub fn merge(&self, base: &Stack) -> Stack {
        let Some(base_head) = base.head() else {
            return self.clone();
        };
        if self.is_empty() {
            return base.clone();
        }
        if self.nodes().any(|node| core::ptr::eq(node, &**base_head)) {
            return self.clone();
        }

        // Newest entry seen per key, sorted by key address, and whether it was kept.
        let mut newest: SmallVec<[(usize, bool); 8]> = SmallVec::new();
        let mut kept: NodeVec<'_> = SmallVec::new();

        for node in self.nodes() {
            let addr = node.key.addr();
            let slot = newest.binary_search_by_key(&addr, |&(key, _)| key);
            let redundant = match slot.map(|found| newest[found].1) {
                Err(slot) => {
                    let answered = base.find_raw(&node.key).is_some_and(|below| same_entry(below, node));
                    newest.insert(slot, (addr, !answered));
                    answered
                }
                Ok(false) => true,
                Ok(true) => {
                    kept.iter().any(|&newer| same_entry(newer, node))
                        || base.nodes().any(|below| same_entry(below, node))
                }
            };
            if !redundant {
                kept.push(node);
            }
        }

        kept
            .iter()
            .rev()
            .fold(base.clone(), |stack, node| stack.push_raw(node.key.clone(), node.value.clone()))
    }
}

fn same_entry(a: &Node, b: &Node) -> bool {
    a.key == b.key && (Arc::ptr_eq(&a.value, &b.value) || a.value.eq_dyn(&*b.value))
}
