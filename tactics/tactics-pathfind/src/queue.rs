//! Min-priority queue for the A* open set.
//!
//! A binary min-heap of `(item, priority)` entries. Items are identified by
//! a key-extraction function so the queue can report whether a logically
//! equal item is already waiting.
//!
//! There is no decrease-key: inserting an item that is already queued adds
//! a second entry. The search discards the stale one when it is extracted.
//!
//! # Example
//!
//! ```
//! use tactics_pathfind::queue::PriorityQueue;
//!
//! let mut queue = PriorityQueue::new();
//! queue.insert('b', 2.0);
//! queue.insert('a', 1.0);
//! queue.insert('c', 1.0);
//!
//! assert_eq!(queue.extract_min(), Some('a'));
//! assert_eq!(queue.extract_min(), Some('c')); // equal priority: FIFO
//! assert_eq!(queue.extract_min(), Some('b'));
//! assert!(queue.is_empty());
//! ```

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};
use std::hash::Hash;

/// A heap entry. Ordered so that `BinaryHeap` pops the lowest priority,
/// and among equal priorities the earliest insertion.
struct Entry<T> {
    priority: f64,
    sequence: u64,
    item: T,
}

impl<T> PartialEq for Entry<T> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<T> Eq for Entry<T> {}

impl<T> PartialOrd for Entry<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for Entry<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering for min-heap behavior (smaller priority = popped first)
        other
            .priority
            .total_cmp(&self.priority)
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}

/// Min-heap keyed by `K = key_fn(&item)`.
pub struct PriorityQueue<T, K, F = fn(&T) -> K> {
    heap: BinaryHeap<Entry<T>>,
    /// Number of heap entries per key.
    queued: HashMap<K, usize>,
    key_fn: F,
    next_sequence: u64,
}

impl<T: Clone + Eq + Hash> PriorityQueue<T, T> {
    /// Creates an empty queue where each item is its own key.
    #[must_use]
    pub fn new() -> Self {
        Self::with_key(T::clone)
    }
}

impl<T: Clone + Eq + Hash> Default for PriorityQueue<T, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, K, F> PriorityQueue<T, K, F>
where
    K: Eq + Hash,
    F: Fn(&T) -> K,
{
    /// Creates an empty queue that identifies items by `key_fn`.
    ///
    /// # Example
    ///
    /// ```
    /// use tactics_pathfind::queue::PriorityQueue;
    ///
    /// let mut queue = PriorityQueue::with_key(|unit: &(u32, &str)| unit.0);
    /// queue.insert((7, "scout"), 3.0);
    /// assert!(queue.contains(&7));
    /// ```
    pub fn with_key(key_fn: F) -> Self {
        Self {
            heap: BinaryHeap::new(),
            queued: HashMap::new(),
            key_fn,
            next_sequence: 0,
        }
    }

    /// Adds an item.
    ///
    /// Returns `true` if an entry with the same key was already queued; the
    /// new entry is added alongside it rather than replacing it.
    pub fn insert(&mut self, item: T, priority: f64) -> bool {
        let count = self.queued.entry((self.key_fn)(&item)).or_insert(0);
        let duplicate = *count > 0;
        *count += 1;

        self.heap.push(Entry {
            priority,
            sequence: self.next_sequence,
            item,
        });
        self.next_sequence += 1;

        duplicate
    }

    /// Removes and returns the item with the lowest priority.
    pub fn extract_min(&mut self) -> Option<T> {
        let entry = self.heap.pop()?;
        let key = (self.key_fn)(&entry.item);
        if let Some(count) = self.queued.get_mut(&key) {
            *count -= 1;
            if *count == 0 {
                self.queued.remove(&key);
            }
        }
        Some(entry.item)
    }

    /// Returns the lowest queued priority without removing anything.
    #[must_use]
    pub fn peek_priority(&self) -> Option<f64> {
        self.heap.peek().map(|entry| entry.priority)
    }

    /// Returns `true` if at least one entry with `key` is queued.
    #[must_use]
    pub fn contains(&self, key: &K) -> bool {
        self.queued.contains_key(key)
    }

    /// Number of heap entries, duplicates included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Returns `true` if the queue is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Removes every entry.
    pub fn clear(&mut self) {
        self.heap.clear();
        self.queued.clear();
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_in_priority_order() {
        let mut queue = PriorityQueue::new();
        for (item, priority) in [(5, 5.0), (1, 1.0), (4, 4.0), (2, 2.0), (3, 3.0)] {
            queue.insert(item, priority);
        }
        let order: Vec<_> = std::iter::from_fn(|| queue.extract_min()).collect();
        assert_eq!(order, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_ties_are_fifo() {
        let mut queue = PriorityQueue::new();
        for item in ["first", "second", "third"] {
            queue.insert(item, 1.0);
        }
        assert_eq!(queue.extract_min(), Some("first"));
        assert_eq!(queue.extract_min(), Some("second"));
        assert_eq!(queue.extract_min(), Some("third"));
    }

    #[test]
    fn test_empty_queue() {
        let mut queue: PriorityQueue<u8, u8> = PriorityQueue::default();
        assert!(queue.is_empty());
        assert_eq!(queue.len(), 0);
        assert_eq!(queue.extract_min(), None);
        assert_eq!(queue.peek_priority(), None);
    }

    #[test]
    fn test_reinsert_keeps_both_entries() {
        let mut queue = PriorityQueue::new();
        assert!(!queue.insert('x', 5.0));
        assert!(queue.insert('x', 2.0));
        assert_eq!(queue.len(), 2);
        assert_eq!(queue.peek_priority(), Some(2.0));

        assert_eq!(queue.extract_min(), Some('x'));
        assert!(queue.contains(&'x'));
        assert_eq!(queue.extract_min(), Some('x'));
        assert!(!queue.contains(&'x'));
    }

    #[test]
    fn test_custom_key() {
        let mut queue = PriorityQueue::with_key(|pair: &(char, u32)| pair.0);
        assert!(!queue.insert(('a', 1), 3.0));
        assert!(queue.insert(('a', 2), 1.0));
        assert!(!queue.insert(('b', 1), 2.0));
        assert_eq!(queue.extract_min(), Some(('a', 2)));
        assert_eq!(queue.extract_min(), Some(('b', 1)));
        assert_eq!(queue.extract_min(), Some(('a', 1)));
    }

    #[test]
    fn test_nan_priority_sorts_last() {
        let mut queue = PriorityQueue::new();
        queue.insert(1, f64::NAN);
        queue.insert(2, 10.0);
        assert_eq!(queue.extract_min(), Some(2));
        assert_eq!(queue.extract_min(), Some(1));
    }

    #[test]
    fn test_clear() {
        let mut queue = PriorityQueue::new();
        queue.insert(1, 1.0);
        queue.clear();
        assert!(queue.is_empty());
        assert!(!queue.contains(&1));
    }
}
