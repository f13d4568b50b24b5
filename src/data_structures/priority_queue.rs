use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::fmt::Debug;

/// Min-priority frontier for shortest-path searches.
///
/// A thin wrapper around `BinaryHeap` ordering entries by ascending
/// priority. Ties on priority break by ascending vertex, so pop order among
/// equal-distance entries is deterministic. Stale entries for a vertex may
/// coexist under old priorities; the search skips them on pop.
#[derive(Debug)]
pub struct FrontierQueue<V, P>
where
    V: Copy + Eq + Debug + Ord,
    P: Copy + Debug + Ord,
{
    heap: BinaryHeap<Reverse<(P, V)>>,
}

impl<V, P> FrontierQueue<V, P>
where
    V: Copy + Eq + Debug + Ord,
    P: Copy + Debug + Ord,
{
    /// Creates a new empty frontier
    pub fn new() -> Self {
        FrontierQueue {
            heap: BinaryHeap::new(),
        }
    }

    /// Returns true if the frontier is empty
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Returns the number of entries in the frontier
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Pushes a vertex with the given priority
    pub fn push(&mut self, vertex: V, priority: P) {
        self.heap.push(Reverse((priority, vertex)));
    }

    /// Removes and returns the minimum-priority entry
    pub fn pop(&mut self) -> Option<(V, P)> {
        self.heap
            .pop()
            .map(|Reverse((priority, vertex))| (vertex, priority))
    }

    /// Returns the minimum-priority entry without removing it
    pub fn peek(&self) -> Option<(V, P)> {
        self.heap
            .peek()
            .map(|&Reverse((priority, vertex))| (vertex, priority))
    }

    /// Clears the frontier
    pub fn clear(&mut self) {
        self.heap.clear();
    }
}

impl<V, P> Default for FrontierQueue<V, P>
where
    V: Copy + Eq + Debug + Ord,
    P: Copy + Debug + Ord,
{
    fn default() -> Self {
        Self::new()
    }
}
