use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// An item waiting in the [`Frontier`], along with the cost paid to reach it
/// and its estimated total cost.
#[derive(Debug, Clone, Copy)]
pub struct Entry<T> {
    pub item: T,
    pub cost: u64,
    pub priority: u64,
    /// Insertion order, used to break ties between equal priorities.
    seq: u64,
}

impl<T> PartialEq for Entry<T> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<T> Eq for Entry<T> {}

impl<T> Ord for Entry<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Flipped, so that the max-heap pops the lowest priority first, and the
        // oldest entry among equal priorities.
        other
            .priority
            .cmp(&self.priority)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl<T> PartialOrd for Entry<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// A min-priority queue with first-in-first-out tie breaking.
///
/// Entries are never updated in place. Pushing the same item again with a
/// better cost just adds another entry, and callers skip the stale one when it
/// is eventually popped.
#[derive(Debug, Clone)]
pub struct Frontier<T> {
    heap: BinaryHeap<Entry<T>>,
    next_seq: u64,
}

impl<T> Default for Frontier<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Frontier<T> {
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            next_seq: 0,
        }
    }

    pub fn push(&mut self, item: T, cost: u64, priority: u64) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Entry {
            item,
            cost,
            priority,
            seq,
        });
    }

    /// Removes and returns the entry with the lowest priority.
    pub fn pop(&mut self) -> Option<Entry<T>> {
        self.heap.pop()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[track_caller]
    fn do_test(pushes: &[(char, u64)], expected: &str) {
        let mut frontier = Frontier::new();
        for &(item, priority) in pushes {
            frontier.push(item, 0, priority);
        }
        assert_eq!(frontier.len(), pushes.len());

        let popped: String = std::iter::from_fn(|| frontier.pop())
            .map(|entry| entry.item)
            .collect();
        assert_eq!(popped, expected);
        assert!(frontier.is_empty());
    }

    #[test]
    fn empty() {
        do_test(&[], "");
    }

    #[test]
    fn lowest_priority_first() {
        do_test(&[('c', 3), ('a', 1), ('b', 2)], "abc");
        do_test(&[('a', 0), ('z', u64::MAX), ('m', 13)], "amz");
    }

    #[test]
    fn ties_pop_in_insertion_order() {
        do_test(&[('a', 5), ('b', 5), ('x', 1), ('c', 5)], "xabc");
    }

    #[test]
    fn keeps_cost() {
        let mut frontier = Frontier::new();
        frontier.push("state", 42, 50);
        let entry = frontier.pop().unwrap();
        assert_eq!((entry.item, entry.cost, entry.priority), ("state", 42, 50));
    }
}
