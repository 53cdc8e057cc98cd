use super::{NodeVec, Stack};
use smallvec::SmallVec;

impl Stack {
    /// Collapses shadowed entries, keeping only the newest entry per key.
    ///
    /// Deeper entries for a key already seen closer to the top are dropped,
    /// whatever their value. The surviving entries keep their relative order,
    /// and every lookup answers the same as before.
    ///
    /// If nothing needs dropping the stack itself is returned, so
    /// `s.dedupe().dedupe()` is the same value as `s.dedupe()`. Entries below
    /// the deepest dropped one are shared, not copied.
    ///
    /// # Examples
    ///
    /// ```
    /// use erreur::{Key, Stack};
    ///
    /// let code: Key<u16> = Key::new("Code");
    /// let stack = Stack::new().push(code.provide(404)).push(code.provide(500));
    ///
    /// let deduped = stack.dedupe();
    /// assert_eq!(deduped.len(), 1);
    /// assert_eq!(deduped.get(&code), Some(&500));
    /// assert!(deduped.dedupe().ptr_eq(&deduped));
    /// ```
    pub fn dedupe(&self) -> Stack {
        // Sorted key addresses, so lookups stay logarithmic in the number of keys.
        let mut seen: SmallVec<[usize; 8]> = SmallVec::new();
        let mut kept: NodeVec<'_> = SmallVec::new();
        let mut deepest_dropped = None;

        for node in self.nodes() {
            let addr = node.key.addr();
            match seen.binary_search(&addr) {
                // Everything kept so far sits above this node and must be rebuilt.
                Ok(_) => deepest_dropped = Some((node, kept.len())),
                Err(slot) => {
                    seen.insert(slot, addr);
                    kept.push(node);
                }
            }
        }

        let Some((dropped, rebuilt)) = deepest_dropped else {
            return self.clone();
        };

        kept[..rebuilt]
            .iter()
            .rev()
            .fold(Stack::from_parent(dropped.parent.clone()), |stack, node| {
                stack.push_raw(node.key.clone(), node.value.clone())
            })
    }
}
