//! A multi-key hierarchical associative container.
//!
//! Values are stored under an ordered sequence of keys; intermediate nodes
//! are created on demand by `set` and pruned bottom-up by `remove` so the
//! tree never retains empty branches. Lookup, insert and remove are
//! O(depth) with the usual map cost per level.

use std::collections::BTreeMap;

/// One entry in a store node: either a leaf value or a nested node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Slot<K: Ord + Clone, V> {
    Value(V),
    Branch(BTreeMap<K, Slot<K, V>>),
}

impl<K: Ord + Clone, V> Slot<K, V> {
    pub fn value(&self) -> Option<&V> {
        match self {
            Slot::Value(v) => Some(v),
            Slot::Branch(_) => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct KeyedStore<K: Ord + Clone, V> {
    root: BTreeMap<K, Slot<K, V>>,
}

impl<K: Ord + Clone, V> Default for KeyedStore<K, V> {
    fn default() -> Self {
        Self {
            root: BTreeMap::new(),
        }
    }
}

impl<K: Ord + Clone, V> KeyedStore<K, V> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `value` under the full key sequence, creating intermediate
    /// branches as needed. An existing non-branch entry at an intermediate
    /// position is overwritten with a fresh branch (last-writer-wins on
    /// type conflict). `keys` must be non-empty.
    pub fn set(&mut self, keys: &[K], value: V) {
        let Some((last, prefix)) = keys.split_last() else {
            debug_assert!(false, "KeyedStore::set requires at least one key");
            return;
        };
        let mut node = &mut self.root;
        for key in prefix {
            let slot = node
                .entry(key.clone())
                .or_insert_with(|| Slot::Branch(BTreeMap::new()));
            if !matches!(slot, Slot::Branch(_)) {
                *slot = Slot::Branch(BTreeMap::new());
            }
            node = match slot {
                Slot::Branch(map) => map,
                Slot::Value(_) => unreachable!("slot was just normalized to a branch"),
            };
        }
        node.insert(last.clone(), Slot::Value(value));
    }

    /// Walk `keys` in order and return the slot reached, which may be a
    /// nested branch when fewer keys are supplied than were used to `set`.
    /// Returns `None` if any key along the way is absent. The walk stops at
    /// the first leaf value even if keys remain.
    pub fn get(&self, keys: &[K]) -> Option<&Slot<K, V>> {
        let mut node = &self.root;
        let mut iter = keys.iter().peekable();
        while let Some(key) = iter.next() {
            let slot = node.get(key)?;
            match slot {
                Slot::Value(_) => return Some(slot),
                Slot::Branch(map) => {
                    if iter.peek().is_none() {
                        return Some(slot);
                    }
                    node = map;
                }
            }
        }
        None
    }

    /// Return the leaf value at the exact key sequence, if any.
    pub fn value(&self, keys: &[K]) -> Option<&V> {
        match self.get(keys)? {
            Slot::Value(v) => Some(v),
            Slot::Branch(_) => None,
        }
    }

    /// Remove the entry at the key sequence and prune every ancestor branch
    /// that the removal leaves empty. Removing a non-existent path is a
    /// no-op. Returns the removed leaf value, if one was stored there.
    pub fn remove(&mut self, keys: &[K]) -> Option<V> {
        Self::remove_in(&mut self.root, keys)
    }

    fn remove_in(node: &mut BTreeMap<K, Slot<K, V>>, keys: &[K]) -> Option<V> {
        let (first, rest) = keys.split_first()?;
        if rest.is_empty() {
            return match node.remove(first) {
                Some(Slot::Value(v)) => Some(v),
                _ => None,
            };
        }
        match node.get_mut(first) {
            Some(Slot::Branch(child)) => {
                let removed = Self::remove_in(child, rest);
                if child.is_empty() {
                    node.remove(first);
                }
                removed
            }
            // An intermediate leaf or a missing key means the path does
            // not exist; leave siblings untouched.
            _ => None,
        }
    }

    /// Number of leaf values stored.
    pub fn len(&self) -> usize {
        fn count<K: Ord + Clone, V>(node: &BTreeMap<K, Slot<K, V>>) -> usize {
            node.values()
                .map(|slot| match slot {
                    Slot::Value(_) => 1,
                    Slot::Branch(map) => count(map),
                })
                .sum()
        }
        count(&self.root)
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_empty()
    }

    /// Total number of entries across all nodes, leaves and branches alike.
    /// Tests use this to verify that removals prune dead branches.
    pub fn node_count(&self) -> usize {
        fn count<K: Ord + Clone, V>(node: &BTreeMap<K, Slot<K, V>>) -> usize {
            node.values()
                .map(|slot| match slot {
                    Slot::Value(_) => 1,
                    Slot::Branch(map) => 1 + count(map),
                })
                .sum()
        }
        count(&self.root)
    }
}
