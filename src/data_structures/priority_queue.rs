use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;
use std::fmt::Debug;

/// A heap entry ordered by priority, then by insertion sequence.
///
/// The vertex takes no part in the ordering, so vertex types do not need `Ord`.
#[derive(Debug)]
struct FrontierEntry<V, P> {
    priority: P,
    seq: u64,
    vertex: V,
}

impl<V, P: Ord> PartialEq for FrontierEntry<V, P> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<V, P: Ord> Eq for FrontierEntry<V, P> {}

impl<V, P: Ord> PartialOrd for FrontierEntry<V, P> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<V, P: Ord> Ord for FrontierEntry<V, P> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.priority
            .cmp(&other.priority)
            .then_with(|| self.seq.cmp(&other.seq))
    }
}

/// Min-priority frontier of (tentative distance, vertex) candidates.
///
/// Pushing a vertex that is already queued is valid: the newer entry carries
/// an improved distance and the older one goes stale. Stale entries are left
/// in the heap and must be filtered by the caller when they are popped.
/// Equal distances pop in insertion order.
#[derive(Debug)]
pub struct PriorityFrontier<V, P>
where
    V: Debug,
    P: Ord + Copy + Debug,
{
    /// The underlying binary heap
    heap: BinaryHeap<Reverse<FrontierEntry<V, P>>>,
    /// Next insertion sequence number
    next_seq: u64,
}

impl<V, P> PriorityFrontier<V, P>
where
    V: Debug,
    P: Ord + Copy + Debug,
{
    /// Creates a new empty frontier
    pub fn new() -> Self {
        PriorityFrontier {
            heap: BinaryHeap::new(),
            next_seq: 0,
        }
    }

    /// Creates an empty frontier with room for `capacity` entries
    pub fn with_capacity(capacity: usize) -> Self {
        PriorityFrontier {
            heap: BinaryHeap::with_capacity(capacity),
            next_seq: 0,
        }
    }

    /// Returns true if the frontier holds no entries, stale or not
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Returns the number of entries, stale ones included
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Inserts a candidate entry without any deduplication
    pub fn push(&mut self, priority: P, vertex: V) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Reverse(FrontierEntry {
            priority,
            seq,
            vertex,
        }));
    }

    /// Removes and returns the entry with the smallest distance
    pub fn pop_min(&mut self) -> Option<(P, V)> {
        self.heap
            .pop()
            .map(|Reverse(entry)| (entry.priority, entry.vertex))
    }

    /// Returns the entry `pop_min` would return, without removing it
    pub fn peek_min(&self) -> Option<(P, &V)> {
        self.heap
            .peek()
            .map(|Reverse(entry)| (entry.priority, &entry.vertex))
    }

    /// Drops every entry
    pub fn clear(&mut self) {
        self.heap.clear();
    }
}

impl<V, P> Default for PriorityFrontier<V, P>
where
    V: Debug,
    P: Ord + Copy + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}
