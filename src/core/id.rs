/*!
# Vertex Identifiers

Internal vertex ids are dense `u32`s in `[0, n)`, assigned in first-seen order by
[`IdMap`] as external ids are interned during [`crate::core::graph::Graph::build`].
*/

use std::collections::HashMap;
use std::fmt;

/// Opaque internal vertex id, dense in `[0, n)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VertexId(pub(crate) u32);

impl VertexId {
    /// Wraps a raw dense index as a `VertexId`. Callers working with the raw
    /// `u32` neighbour arrays returned by [`crate::core::graph::Graph::neighbours`]
    /// use this to get back a typed id.
    pub fn new(index: u32) -> Self {
        VertexId(index)
    }

    /// Returns the dense internal index, usable directly for array lookups.
    pub fn index(&self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Bidirectional mapping between external (file-supplied) ids and dense internal
/// [`VertexId`]s, built once at load time. Only the reverse lookup is needed after
/// construction, for display purposes.
#[derive(Debug, Clone, Default)]
pub struct IdMap {
    external: Vec<u64>,
    internal: HashMap<u64, VertexId>,
}

impl IdMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the internal id for `external`, interning it if not yet seen.
    pub fn intern(&mut self, external: u64) -> VertexId {
        if let Some(&id) = self.internal.get(&external) {
            return id;
        }
        let id = VertexId::new(self.external.len() as u32);
        self.external.push(external);
        self.internal.insert(external, id);
        id
    }

    /// Returns the external id that was interned as `id`, if any.
    pub fn external(&self, id: VertexId) -> Option<u64> {
        self.external.get(id.index()).copied()
    }

    /// Number of distinct vertices interned so far.
    pub fn len(&self) -> usize {
        self.external.len()
    }

    pub fn is_empty(&self) -> bool {
        self.external.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interns_each_external_id_once() {
        let mut map = IdMap::new();
        let a = map.intern(42);
        let b = map.intern(7);
        let a_again = map.intern(42);
        assert_eq!(a, a_again);
        assert_ne!(a, b);
        assert_eq!(map.len(), 2);
        assert_eq!(map.external(a), Some(42));
        assert_eq!(map.external(b), Some(7));
    }

    #[test]
    fn ids_are_dense_in_first_seen_order() {
        let mut map = IdMap::new();
        let first = map.intern(100);
        let second = map.intern(200);
        assert_eq!(first.index(), 0);
        assert_eq!(second.index(), 1);
    }
}
