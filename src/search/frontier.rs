//! Priority frontier for best-first search
//!
//! A binary heap keyed by a caller-supplied function. Besides push/pop it
//! supports membership tests, key lookup and deletion by value, which is what
//! best-first search needs to replace a queued node once a cheaper path to
//! the same state turns up (delete + reinsert).
//!
//! Lookup and deletion are linear scans over the heap; at 8-puzzle scale that
//! is cheaper than maintaining a position index.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;
use std::fmt::Debug;
use std::ops::Neg;

use crate::error::SearchError;

/// Which end of the key range comes out first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Order {
    #[default]
    Min,
    Max,
}

/// Heap entry. Equal keys fall back to comparing the items themselves.
#[derive(Debug)]
struct Entry<K, T> {
    key: K,
    item: T,
}

impl<K: Ord, T: Ord> PartialEq for Entry<K, T> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<K: Ord, T: Ord> Eq for Entry<K, T> {}

impl<K: Ord, T: Ord> PartialOrd for Entry<K, T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<K: Ord, T: Ord> Ord for Entry<K, T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key
            .cmp(&other.key)
            .then_with(|| self.item.cmp(&other.item))
    }
}

/// Priority queue ordered by `f(item)`.
///
/// Max ordering is implemented by storing negated keys, so `K` must support
/// negation. Keys reported back to the caller are always un-negated.
pub struct PriorityFrontier<T, K, F> {
    heap: BinaryHeap<Reverse<Entry<K, T>>>,
    order: Order,
    f: F,
}

impl<T, K, F> PriorityFrontier<T, K, F>
where
    T: Ord + Debug,
    K: Ord + Copy + Neg<Output = K>,
    F: FnMut(&T) -> K,
{
    pub fn new(order: Order, f: F) -> Self {
        Self {
            heap: BinaryHeap::new(),
            order,
            f,
        }
    }

    /// Frontier that yields the smallest key first
    pub fn min(f: F) -> Self {
        Self::new(Order::Min, f)
    }

    /// Frontier that yields the largest key first
    pub fn max(f: F) -> Self {
        Self::new(Order::Max, f)
    }

    #[inline]
    fn to_stored(&self, key: K) -> K {
        match self.order {
            Order::Min => key,
            Order::Max => -key,
        }
    }

    /// Evaluate the key function on `item` without inserting it
    pub fn key_of(&mut self, item: &T) -> K {
        (self.f)(item)
    }

    /// Insert one item. O(log n).
    pub fn push(&mut self, item: T) {
        let key = (self.f)(&item);
        let key = self.to_stored(key);
        self.heap.push(Reverse(Entry { key, item }));
    }

    /// Remove and return the best item
    pub fn pop(&mut self) -> Result<T, SearchError> {
        self.heap
            .pop()
            .map(|Reverse(entry)| entry.item)
            .ok_or(SearchError::EmptyFrontier)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Membership by value equality. O(n).
    pub fn contains(&self, item: &T) -> bool {
        self.heap.iter().any(|Reverse(e)| e.item == *item)
    }

    /// Key of the first entry equal to `item`. O(n).
    pub fn get(&self, item: &T) -> Result<K, SearchError> {
        self.heap
            .iter()
            .find(|Reverse(e)| e.item == *item)
            .map(|Reverse(e)| self.to_stored(e.key))
            .ok_or_else(|| SearchError::KeyNotFound(format!("{item:?}")))
    }

    /// Delete the first entry equal to `item` and restore heap order. O(n).
    pub fn remove(&mut self, item: &T) -> Result<(), SearchError> {
        let mut entries = std::mem::take(&mut self.heap).into_vec();
        let found = entries.iter().position(|Reverse(e)| e.item == *item);
        if let Some(idx) = found {
            entries.remove(idx);
        }
        self.heap = BinaryHeap::from(entries);
        match found {
            Some(_) => Ok(()),
            None => Err(SearchError::KeyNotFound(format!("{item:?}"))),
        }
    }
}

impl<T, K, F> Extend<T> for PriorityFrontier<T, K, F>
where
    T: Ord + Debug,
    K: Ord + Copy + Neg<Output = K>,
    F: FnMut(&T) -> K,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, items: I) {
        for item in items {
            self.push(item);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identity(x: &i64) -> i64 {
        *x
    }

    #[test]
    fn test_push_then_pop_returns_same_item() {
        let mut frontier = PriorityFrontier::min(identity);
        frontier.push(42);
        assert_eq!(frontier.pop(), Ok(42));
        assert!(frontier.is_empty());
    }

    #[test]
    fn test_pop_empty_fails() {
        let mut frontier = PriorityFrontier::min(identity);
        assert_eq!(frontier.pop(), Err(SearchError::EmptyFrontier));
    }

    #[test]
    fn test_min_order() {
        let mut frontier = PriorityFrontier::min(identity);
        frontier.extend([5, 1, 4, 2, 3]);
        let popped: Vec<i64> = (0..5).map(|_| frontier.pop().unwrap()).collect();
        assert_eq!(popped, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_max_order() {
        let mut frontier = PriorityFrontier::max(identity);
        frontier.extend([5, 1, 4, 2, 3]);
        let popped: Vec<i64> = (0..5).map(|_| frontier.pop().unwrap()).collect();
        assert_eq!(popped, vec![5, 4, 3, 2, 1]);
    }

    #[test]
    fn test_get_reports_caller_key_for_max_order() {
        let mut frontier = PriorityFrontier::max(|s: &&str| s.len() as i64);
        frontier.push("abc");
        assert_eq!(frontier.get(&"abc"), Ok(3));
    }

    #[test]
    fn test_equal_keys_break_ties_on_item() {
        let mut frontier = PriorityFrontier::min(|_: &char| 0i32);
        frontier.extend(['c', 'a', 'b']);
        assert_eq!(frontier.pop(), Ok('a'));
        assert_eq!(frontier.pop(), Ok('b'));
        assert_eq!(frontier.pop(), Ok('c'));
    }

    #[test]
    fn test_contains_and_len() {
        let mut frontier = PriorityFrontier::min(identity);
        frontier.extend([3, 7]);
        assert_eq!(frontier.len(), 2);
        assert!(frontier.contains(&7));
        assert!(!frontier.contains(&8));
    }

    #[test]
    fn test_remove_then_get_fails() {
        let mut frontier = PriorityFrontier::min(identity);
        frontier.extend([3, 7, 9]);
        assert_eq!(frontier.remove(&7), Ok(()));
        assert!(matches!(frontier.get(&7), Err(SearchError::KeyNotFound(_))));
        assert_eq!(frontier.len(), 2);
        assert_eq!(frontier.pop(), Ok(3));
        assert_eq!(frontier.pop(), Ok(9));
    }

    #[test]
    fn test_remove_missing_fails_and_keeps_contents() {
        let mut frontier = PriorityFrontier::min(identity);
        frontier.extend([3, 1]);
        assert!(matches!(frontier.remove(&5), Err(SearchError::KeyNotFound(_))));
        assert_eq!(frontier.len(), 2);
        assert_eq!(frontier.pop(), Ok(1));
    }

    #[test]
    fn test_decrease_key_by_delete_and_reinsert() {
        use std::cell::RefCell;
        use std::collections::HashMap;

        let costs = RefCell::new(HashMap::from([('a', 10), ('b', 5)]));
        let mut frontier = PriorityFrontier::min(|c: &char| costs.borrow()[c]);
        frontier.extend(['a', 'b']);
        assert_eq!(frontier.get(&'a'), Ok(10));

        costs.borrow_mut().insert('a', 1);
        assert_eq!(frontier.key_of(&'a'), 1);
        assert_eq!(frontier.get(&'a'), Ok(10));

        frontier.remove(&'a').unwrap();
        frontier.push('a');
        assert_eq!(frontier.get(&'a'), Ok(1));
        assert_eq!(frontier.pop(), Ok('a'));
        assert_eq!(frontier.pop(), Ok('b'));
    }
}
