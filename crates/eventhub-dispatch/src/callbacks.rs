//! Priority-ordered callback list shared by both dispatch subsystems.
//!
//! Entries are appended in registration order and sorted lazily on the
//! first read after a mutation. Higher priorities come first; entries with
//! equal priority keep their insertion order because the sort is stable.

use std::cmp::Reverse;
use std::fmt;

/// A callback together with its execution priority.
#[derive(Clone)]
struct Entry<T> {
    item: T,
    priority: i32,
}

/// Collection of `(callback, priority)` pairs.
#[derive(Clone)]
pub struct PriorityList<T> {
    /// Entries, in insertion order until the next sort.
    entries: Vec<Entry<T>>,
    /// Whether `entries` is currently priority-ordered.
    sorted: bool,
}

impl<T> PriorityList<T> {
    /// Creates an empty list.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            sorted: true,
        }
    }

    /// Appends `item` and marks the list unsorted.
    pub fn insert(&mut self, item: T, priority: i32) {
        self.entries.push(Entry { item, priority });
        self.sorted = false;
    }

    /// Returns the items in execution order.
    pub fn ordered(&mut self) -> impl Iterator<Item = &T> {
        self.sort();
        self.entries.iter().map(|e| &e.item)
    }

    /// Clones the items out in execution order.
    ///
    /// Dispatch iterates a snapshot so callbacks can run while the list
    /// itself is not borrowed.
    pub fn snapshot(&mut self) -> Vec<T>
    where
        T: Clone,
    {
        self.ordered().cloned().collect()
    }

    /// Removes every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.sorted = true;
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns whether the list holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns whether the entries are currently in execution order.
    pub fn is_sorted(&self) -> bool {
        self.sorted
    }

    fn sort(&mut self) {
        if !self.sorted {
            // `sort_by_key` is stable: equal priorities keep insertion order.
            self.entries.sort_by_key(|e| Reverse(e.priority));
            self.sorted = true;
        }
    }
}

impl<T> Default for PriorityList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for PriorityList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PriorityList")
            .field("len", &self.entries.len())
            .field("sorted", &self.sorted)
            .finish()
    }
}
