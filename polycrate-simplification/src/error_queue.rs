//! Min-priority queue of vertex slots keyed by removal error

use priority_queue::PriorityQueue;
use std::cmp::Ordering;

#[derive(Debug, Clone, Copy)]
struct ErrorKey {
    error: f64,
    id: usize,
}

impl PartialEq for ErrorKey {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}
impl Eq for ErrorKey {}

impl PartialOrd for ErrorKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ErrorKey {
    fn cmp(&self, other: &Self) -> Ordering {
        // Min-heap: smallest error first, then smallest id
        other
            .error
            .total_cmp(&self.error)
            .then_with(|| other.id.cmp(&self.id))
    }
}

/// Indexed min-heap of slot ids.
///
/// Each id is held at most once. [`ErrorQueue::delete_id`] removes an id
/// regardless of its priority, so a slot whose error changed can be
/// dropped and reinserted.
#[derive(Debug, Clone, Default)]
pub struct ErrorQueue {
    heap: PriorityQueue<usize, ErrorKey>,
}

impl ErrorQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            heap: PriorityQueue::with_capacity(capacity),
        }
    }

    /// Insert `id` with priority `error`. An id already present takes the
    /// new priority.
    pub fn insert(&mut self, error: f64, id: usize) {
        self.heap.push(id, ErrorKey { error, id });
    }

    /// Remove and return the id with the lowest error, or `None` when empty
    pub fn pop(&mut self) -> Option<usize> {
        self.heap.pop().map(|(id, _)| id)
    }

    /// Remove `id` if present
    pub fn delete_id(&mut self, id: usize) {
        self.heap.remove(&id);
    }

    /// Remove all entries, keeping the allocation
    pub fn reset(&mut self) {
        self.heap.clear();
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pops_lowest_error_first() {
        let mut queue = ErrorQueue::new();
        queue.insert(0.5, 1);
        queue.insert(0.1, 2);
        queue.insert(2.0, 3);
        assert_eq!(queue.pop(), Some(2));
        assert_eq!(queue.pop(), Some(1));
        assert_eq!(queue.pop(), Some(3));
        assert_eq!(queue.pop(), None);
    }

    #[test]
    fn test_ties_pop_lowest_id_first() {
        let mut queue = ErrorQueue::new();
        queue.insert(0.0, 7);
        queue.insert(0.0, 3);
        queue.insert(0.0, 5);
        assert_eq!(queue.pop(), Some(3));
        assert_eq!(queue.pop(), Some(5));
        assert_eq!(queue.pop(), Some(7));
    }

    #[test]
    fn test_delete_id() {
        let mut queue = ErrorQueue::new();
        queue.insert(0.1, 1);
        queue.insert(0.2, 2);
        queue.delete_id(1);
        queue.delete_id(42);
        assert_eq!(queue.len(), 1);
        assert_eq!(queue.pop(), Some(2));
    }

    #[test]
    fn test_reinsert_updates_priority() {
        let mut queue = ErrorQueue::new();
        queue.insert(0.1, 1);
        queue.insert(0.2, 2);
        queue.delete_id(1);
        queue.insert(0.9, 1);
        assert_eq!(queue.pop(), Some(2));
        assert_eq!(queue.pop(), Some(1));
    }

    #[test]
    fn test_reset() {
        let mut queue = ErrorQueue::with_capacity(4);
        queue.insert(1.0, 0);
        queue.insert(1.0, 1);
        queue.reset();
        assert!(queue.is_empty());
        assert_eq!(queue.pop(), None);
    }
}
