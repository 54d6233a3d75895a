//! Binary-heap priority queue with a configurable pop order

use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// Which end of the priority range `pop` yields first
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum HeapOrder {
    /// Lowest priority first. The right choice for cost minimisation.
    #[default]
    MinFirst,
    /// Highest priority first.
    ///
    /// Searches run in this mode do not get the "first goal popped is optimal"
    /// guarantee; [`UniformCostSearch`](crate::UniformCostSearch) falls back to
    /// exhausting the frontier when it is selected.
    MaxFirst,
}

/// A pending state together with its priority
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriorityItem<T, P> {
    pub state: T,
    pub priority: P,
}

impl<T, P> PriorityItem<T, P> {
    /// Split the item back into `(state, priority)`
    pub fn into_parts(self) -> (T, P) {
        (self.state, self.priority)
    }
}

/// Heap slot: the item plus the bookkeeping needed to order it
struct Entry<T, P> {
    item: PriorityItem<T, P>,
    seq: u64,
    order: HeapOrder,
}

impl<T, P: Ord> Ord for Entry<T, P> {
    fn cmp(&self, other: &Self) -> Ordering {
        // BinaryHeap pops the greatest entry. Equal priorities fall back to the
        // insertion sequence so that the older entry is popped first.
        let by_priority = match self.order {
            HeapOrder::MinFirst => other.item.priority.cmp(&self.item.priority),
            HeapOrder::MaxFirst => self.item.priority.cmp(&other.item.priority),
        };
        by_priority.then_with(|| other.seq.cmp(&self.seq))
    }
}

impl<T, P: Ord> PartialOrd for Entry<T, P> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T, P: Ord> PartialEq for Entry<T, P> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<T, P: Ord> Eq for Entry<T, P> {}

/// A priority queue of `(state, priority)` pairs
///
/// Backed by [`BinaryHeap`]. The root always holds the extremal priority per
/// the configured [`HeapOrder`]. There is no deduplication: the same state may
/// be queued several times with different priorities. Items with equal
/// priority are popped in insertion order (FIFO), so the pop sequence is fully
/// determined by the push sequence.
///
/// # Example
///
/// ```
/// use aoc_search::{HeapOrder, PriorityQueue};
///
/// let mut queue = PriorityQueue::new(HeapOrder::MinFirst);
/// queue.push("far", 10);
/// queue.push("near", 2);
/// queue.push("also near", 2);
///
/// assert_eq!(queue.pop(), Some(("near", 2)));
/// assert_eq!(queue.pop(), Some(("also near", 2)));
/// assert_eq!(queue.pop(), Some(("far", 10)));
/// assert_eq!(queue.pop(), None);
/// ```
pub struct PriorityQueue<T, P> {
    heap: BinaryHeap<Entry<T, P>>,
    order: HeapOrder,
    next_seq: u64,
}

impl<T, P: Ord> PriorityQueue<T, P> {
    /// Create an empty queue popping in the given order
    pub fn new(order: HeapOrder) -> Self {
        Self {
            heap: BinaryHeap::new(),
            order,
            next_seq: 0,
        }
    }

    /// Create an empty min-first queue
    pub fn min_first() -> Self {
        Self::new(HeapOrder::MinFirst)
    }

    /// Create an empty max-first queue
    pub fn max_first() -> Self {
        Self::new(HeapOrder::MaxFirst)
    }

    /// Create an empty queue with room for `capacity` items
    pub fn with_capacity(order: HeapOrder, capacity: usize) -> Self {
        Self {
            heap: BinaryHeap::with_capacity(capacity),
            order,
            next_seq: 0,
        }
    }

    /// The configured pop order
    pub fn order(&self) -> HeapOrder {
        self.order
    }

    /// Queue a state with the given priority. O(log n).
    pub fn push(&mut self, state: T, priority: P) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Entry {
            item: PriorityItem { state, priority },
            seq,
            order: self.order,
        });
    }

    /// Remove and return the item with the extremal priority. O(log n).
    ///
    /// Returns `None` when the queue is empty.
    pub fn pop(&mut self) -> Option<(T, P)> {
        self.heap.pop().map(|entry| entry.item.into_parts())
    }

    /// The item `pop` would return next, without removing it
    pub fn peek(&self) -> Option<&PriorityItem<T, P>> {
        self.heap.peek().map(|entry| &entry.item)
    }

    /// Number of pending items
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Drop every pending item, keeping the allocation
    pub fn clear(&mut self) {
        self.heap.clear();
    }
}

impl<T, P: Ord> Default for PriorityQueue<T, P> {
    fn default() -> Self {
        Self::min_first()
    }
}

impl<T, P: Ord> Extend<(T, P)> for PriorityQueue<T, P> {
    fn extend<I: IntoIterator<Item = (T, P)>>(&mut self, iter: I) {
        for (state, priority) in iter {
            self.push(state, priority);
        }
    }
}

impl<T, P> std::fmt::Debug for PriorityQueue<T, P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PriorityQueue")
            .field("order", &self.order)
            .field("len", &self.heap.len())
            .finish()
    }
}
