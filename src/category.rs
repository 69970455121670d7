//! Bidirectional grouping of items under categories.
//!
//! Answers both "what is in this category" and "what category is this item
//! in" in O(1) map lookups. An item belongs to at most one category at a
//! time; `move_to` rehomes it. Removal is O(n) in the category size, which
//! stays small in practice (a channel holds a handful of windows).

use std::collections::BTreeMap;

#[derive(Debug, Clone)]
pub struct CategoryIndex<C: Ord + Clone, I: Copy + Eq + Ord> {
    members: BTreeMap<C, Vec<I>>,
    item_to_category: BTreeMap<I, C>,
}

impl<C: Ord + Clone, I: Copy + Eq + Ord> Default for CategoryIndex<C, I> {
    fn default() -> Self {
        Self {
            members: BTreeMap::new(),
            item_to_category: BTreeMap::new(),
        }
    }
}

impl<C: Ord + Clone, I: Copy + Eq + Ord> CategoryIndex<C, I> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `item` to `category`, creating the category on first use.
    /// The caller is responsible for removing the item from any previous
    /// category first; `move_to` does both.
    pub fn put(&mut self, category: C, item: I) {
        self.members.entry(category.clone()).or_default().push(item);
        self.item_to_category.insert(item, category);
    }

    /// All items in `category`, in insertion order. An unknown category
    /// yields an empty slice, never an error.
    pub fn get(&self, category: &C) -> &[I] {
        self.members
            .get(category)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn item_category(&self, item: I) -> Option<&C> {
        self.item_to_category.get(&item)
    }

    /// Detach `item` from its category, if it has one.
    pub fn remove(&mut self, item: I) {
        if let Some(category) = self.item_to_category.remove(&item)
            && let Some(list) = self.members.get_mut(&category)
        {
            list.retain(|existing| *existing != item);
            if list.is_empty() {
                self.members.remove(&category);
            }
        }
    }

    /// Rehome `item` into `destination`. Equivalent to `remove` then `put`;
    /// the intermediate uncategorized state is never observable since all
    /// mutation happens on one event-processing context.
    pub fn move_to(&mut self, item: I, destination: C) {
        self.remove(item);
        self.put(destination, item);
    }
}
