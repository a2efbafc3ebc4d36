/*!
# Mutable-Key Priority Queue

A min-priority queue over [`VertexId`]s, realized as a binary heap with lazy
deletion — the fallback the component contract explicitly sanctions in place of a
Fibonacci or pairing heap. `insert` and `decrease_key` both just push; staleness is
resolved at `extract_min` time by asking the caller whether the popped entry is still
live.

Ties are broken by ascending vertex id, which falls out for free from ordering the
`(key, vertex_id)` tuple directly — no separate tie-break field is threaded through.
*/

use crate::core::id::VertexId;
use std::cmp::Reverse;
use std::collections::BinaryHeap;

/// Lazy-deletion min-heap over `(u32 key, VertexId)` entries.
#[derive(Default)]
pub struct LazyMinQueue {
    heap: BinaryHeap<Reverse<(u32, u32)>>,
}

impl LazyMinQueue {
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
        }
    }

    /// Associates `key` with `vertex`.
    pub fn insert(&mut self, key: u32, vertex: VertexId) {
        self.heap.push(Reverse((key, vertex.0)));
    }

    /// Re-registers `vertex` under a (smaller-or-equal) `new_key`. Implemented as a
    /// fresh push: the stale entry under the old key is discarded lazily the next
    /// time it would otherwise surface from `extract_min`.
    pub fn decrease_key(&mut self, vertex: VertexId, new_key: u32) {
        self.insert(new_key, vertex);
    }

    /// Pops entries until one is found that is still active and whose key matches
    /// the vertex's true current key (as reported by `current_key`); discards
    /// everything stale along the way. Returns `None` once exhausted.
    pub fn extract_min(
        &mut self,
        is_active: impl Fn(VertexId) -> bool,
        current_key: impl Fn(VertexId) -> u32,
    ) -> Option<(u32, VertexId)> {
        while let Some(Reverse((key, raw))) = self.heap.pop() {
            let vertex = VertexId::new(raw);
            if !is_active(vertex) {
                continue;
            }
            if current_key(vertex) != key {
                continue;
            }
            return Some((key, vertex));
        }
        None
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn extract_min_breaks_ties_by_ascending_id() {
        let mut q = LazyMinQueue::new();
        q.insert(5, VertexId::new(2));
        q.insert(5, VertexId::new(0));
        q.insert(5, VertexId::new(1));
        let (key, v) = q
            .extract_min(|_| true, |_| 5)
            .expect("queue should not be empty");
        assert_eq!(key, 5);
        assert_eq!(v, VertexId::new(0));
    }

    #[test]
    fn extract_min_skips_stale_and_inactive_entries() {
        let mut q = LazyMinQueue::new();
        let inactive: HashSet<VertexId> = [VertexId::new(1)].into_iter().collect();
        q.insert(1, VertexId::new(1)); // inactive, should be skipped
        q.insert(2, VertexId::new(0)); // stale: current key is actually 4
        q.decrease_key(VertexId::new(0), 4);
        q.insert(3, VertexId::new(3));

        let current_key = |v: VertexId| if v == VertexId::new(0) { 4 } else { 3 };
        let (key, v) = q
            .extract_min(|v| !inactive.contains(&v), current_key)
            .expect("an entry should remain");
        assert_eq!((key, v), (3, VertexId::new(3)));
    }
}
