use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::fmt;

/// Returned by [`Frontier::pop_min`] when nothing is queued.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyFrontier;

impl fmt::Display for EmptyFrontier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "frontier: pop on empty queue")
    }
}

impl std::error::Error for EmptyFrontier {}

/// Heap entry ordered by `cost`, then by insertion order.
struct Entry<T> {
    cost: u64,
    seq: u64,
    item: T,
}

impl<T> PartialEq for Entry<T> {
    fn eq(&self, other: &Self) -> bool {
        self.cost == other.cost && self.seq == other.seq
    }
}

impl<T> Eq for Entry<T> {}

impl<T> Ord for Entry<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest cost, oldest first.
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl<T> PartialOrd for Entry<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Min-priority queue keyed by accumulated cost.
///
/// The same item may be pushed any number of times with different costs;
/// stale copies are expected to be discarded by the caller when popped.
/// Among equal costs, items come out in the order they were pushed.
pub struct Frontier<T> {
    heap: BinaryHeap<Entry<T>>,
    seq: u64,
}

impl<T> Default for Frontier<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Frontier<T> {
    /// Create an empty frontier.
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            seq: 0,
        }
    }

    /// Create an empty frontier with room for `cap` entries.
    pub fn with_capacity(cap: usize) -> Self {
        Self {
            heap: BinaryHeap::with_capacity(cap),
            seq: 0,
        }
    }

    /// Queue `item` at `cost`. O(log n).
    pub fn push(&mut self, cost: u64, item: T) {
        let seq = self.seq;
        self.seq += 1;
        self.heap.push(Entry { cost, seq, item });
    }

    /// Remove and return the cheapest entry.
    pub fn pop_min(&mut self) -> Result<(u64, T), EmptyFrontier> {
        self.heap
            .pop()
            .map(|e| (e.cost, e.item))
            .ok_or(EmptyFrontier)
    }

    /// Cost of the entry `pop_min` would return next.
    pub fn peek_cost(&self) -> Option<u64> {
        self.heap.peek().map(|e| e.cost)
    }

    /// Number of queued entries, stale ones included.
    #[inline]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Drop every entry and restart the insertion sequence.
    pub fn clear(&mut self) {
        self.heap.clear();
        self.seq = 0;
    }
}
