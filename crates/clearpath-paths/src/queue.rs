//! Open-set implementations for the weighted jump search.
//!
//! The search only needs push / pop-minimum / length, so the open set sits
//! behind the [`OpenSet`] trait. Ties between equal scores pop in
//! implementation-defined order; nothing observable depends on it other than
//! which of several equal-cost paths gets reconstructed.

use std::collections::BinaryHeap;

/// Reference into the score map, ordered by `score` for use in `BinaryHeap`.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct NodeRef {
    pub idx: usize,
    pub score: i32,
}

impl Ord for NodeRef {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest score first.
        other
            .score
            .cmp(&self.score)
            .then_with(|| other.idx.cmp(&self.idx))
    }
}

impl PartialOrd for NodeRef {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Priority queue of pending search entries. Duplicates are allowed.
pub trait OpenSet {
    /// Create an empty set sized for roughly `capacity` entries.
    fn with_capacity(capacity: usize) -> Self
    where
        Self: Sized;

    /// Queue an entry.
    fn push(&mut self, node: NodeRef);

    /// Remove and return an entry with the smallest score.
    fn pop(&mut self) -> Option<NodeRef>;

    /// Number of queued entries.
    fn len(&self) -> usize;

    /// Whether nothing is queued.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Binary-heap open set. `O(log n)` push and pop.
#[derive(Debug, Default)]
pub struct HeapOpenSet {
    heap: BinaryHeap<NodeRef>,
}

impl OpenSet for HeapOpenSet {
    fn with_capacity(capacity: usize) -> Self {
        Self {
            heap: BinaryHeap::with_capacity(capacity),
        }
    }

    #[inline]
    fn push(&mut self, node: NodeRef) {
        self.heap.push(node);
    }

    #[inline]
    fn pop(&mut self) -> Option<NodeRef> {
        self.heap.pop()
    }

    #[inline]
    fn len(&self) -> usize {
        self.heap.len()
    }
}

/// Unordered vector with a linear scan for the minimum on every pop.
///
/// `O(n)` pop. Among equal scores the earliest-queued entry wins, which
/// matches a first-found-minimum scan over an insertion-ordered array.
#[derive(Debug, Default)]
pub struct ScanOpenSet {
    entries: Vec<NodeRef>,
}

impl OpenSet for ScanOpenSet {
    fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
        }
    }

    #[inline]
    fn push(&mut self, node: NodeRef) {
        self.entries.push(node);
    }

    fn pop(&mut self) -> Option<NodeRef> {
        let mut best = 0;
        for (i, e) in self.entries.iter().enumerate().skip(1) {
            if e.score < self.entries[best].score {
                best = i;
            }
        }
        if self.entries.is_empty() {
            return None;
        }
        // Preserve insertion order of the remaining entries.
        Some(self.entries.remove(best))
    }

    #[inline]
    fn len(&self) -> usize {
        self.entries.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drain<Q: OpenSet>(mut q: Q) -> Vec<i32> {
        let mut out = Vec::new();
        while let Some(n) = q.pop() {
            out.push(n.score);
        }
        out
    }

    fn filled<Q: OpenSet>() -> Q {
        let mut q = Q::with_capacity(8);
        for (idx, score) in [(0, 5), (1, 1), (2, 9), (3, 3), (4, 1), (5, 7)] {
            q.push(NodeRef { idx, score });
        }
        q
    }

    #[test]
    fn heap_pops_in_score_order() {
        let q: HeapOpenSet = filled();
        assert_eq!(q.len(), 6);
        assert_eq!(drain(q), vec![1, 1, 3, 5, 7, 9]);
    }

    #[test]
    fn scan_pops_in_score_order() {
        let q: ScanOpenSet = filled();
        assert_eq!(drain(q), vec![1, 1, 3, 5, 7, 9]);
    }

    #[test]
    fn scan_breaks_ties_by_insertion() {
        let mut q: ScanOpenSet = filled();
        assert_eq!(q.pop(), Some(NodeRef { idx: 1, score: 1 }));
        assert_eq!(q.pop(), Some(NodeRef { idx: 4, score: 1 }));
    }

    #[test]
    fn empty_sets_pop_none() {
        let mut h = HeapOpenSet::default();
        let mut s = ScanOpenSet::default();
        assert!(h.is_empty() && s.is_empty());
        assert_eq!(h.pop(), None);
        assert_eq!(s.pop(), None);
    }
}
