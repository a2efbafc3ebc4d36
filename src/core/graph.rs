/*!
# Graph Engine

A simple undirected graph stored as a CSR-like adjacency list: `offsets[0..=n]` and
`neighbours[0..2m]`, each edge appearing twice. The topology is built once and never
mutated; it is held behind an [`Arc`] so that deriving a [`PeelState`] for a private
algorithm run is O(n), not O(n+m).

Peeling (the iterated removal of vertices performed by the Charikar and Greedy++
families) never touches the `Graph` itself — each algorithm call works against its
own [`PeelState`], which carries the `active` bitmap and the `degree` counters
described by the component contract.
*/

use crate::core::id::{IdMap, VertexId};
use std::collections::HashSet;
use std::sync::Arc;

struct Topology {
    offsets: Vec<u32>,
    neighbours: Vec<u32>,
    n: usize,
    m: usize,
}

/// An immutable, simple, undirected graph.
#[derive(Clone)]
pub struct Graph {
    topo: Arc<Topology>,
}

impl Graph {
    /// Builds a `Graph` from an iterator of unordered external-id pairs.
    ///
    /// Self-loops are dropped. Duplicate edges are collapsed to one. Edges are
    /// otherwise unordered: `(u, v)` and `(v, u)` denote the same edge.
    pub fn build(edges: impl IntoIterator<Item = (u64, u64)>) -> (Graph, IdMap) {
        let mut id_map = IdMap::new();
        let mut seen: HashSet<(u32, u32)> = HashSet::new();
        let mut canonical_edges: Vec<(u32, u32)> = Vec::new();

        for (u_ext, v_ext) in edges {
            // Intern both endpoints before the self-loop check, so a self-loop
            // line still registers an isolated vertex the way a real dataset's
            // lone-vertex convention (`v v`) would expect.
            let u = id_map.intern(u_ext).0;
            let v = id_map.intern(v_ext).0;
            if u == v {
                continue; // drop self-loops
            }
            let key = if u < v { (u, v) } else { (v, u) };
            if seen.insert(key) {
                canonical_edges.push(key);
            }
        }

        let n = id_map.len();
        let m = canonical_edges.len();

        let mut degree = vec![0u32; n];
        for &(u, v) in &canonical_edges {
            degree[u as usize] += 1;
            degree[v as usize] += 1;
        }

        let mut offsets = vec![0u32; n + 1];
        for v in 0..n {
            offsets[v + 1] = offsets[v] + degree[v];
        }

        let mut cursor = offsets.clone();
        let mut neighbours = vec![0u32; 2 * m];
        for &(u, v) in &canonical_edges {
            neighbours[cursor[u as usize] as usize] = v;
            cursor[u as usize] += 1;
            neighbours[cursor[v as usize] as usize] = u;
            cursor[v as usize] += 1;
        }

        let graph = Graph {
            topo: Arc::new(Topology {
                offsets,
                neighbours,
                n,
                m,
            }),
        };
        (graph, id_map)
    }

    /// Number of vertices.
    pub fn n(&self) -> usize {
        self.topo.n
    }

    /// Number of (deduplicated, self-loop-free) edges.
    pub fn m(&self) -> usize {
        self.topo.m
    }

    /// Raw, unfiltered neighbour slice for `v`.
    pub fn neighbours(&self, v: VertexId) -> &[u32] {
        let i = v.index();
        let start = self.topo.offsets[i] as usize;
        let end = self.topo.offsets[i + 1] as usize;
        &self.topo.neighbours[start..end]
    }

    /// Original (un-peeled) degree of `v` in `G`, i.e. `deg_G(v)` from §4.D.5.
    pub fn static_degree(&self, v: VertexId) -> u32 {
        self.neighbours(v).len() as u32
    }

    /// All vertex ids, in internal-id order.
    pub fn vertices(&self) -> impl Iterator<Item = VertexId> + '_ {
        (0..self.topo.n as u32).map(VertexId::new)
    }

    /// Creates a fresh [`PeelState`] with every vertex active.
    pub fn peel_state(&self) -> PeelState<'_> {
        let degree: Vec<u32> = (0..self.topo.n)
            .map(|i| self.topo.offsets[i + 1] - self.topo.offsets[i])
            .collect();
        PeelState {
            graph: self,
            active: vec![true; self.topo.n],
            degree,
            active_edge_count: self.topo.m as u64,
        }
    }

    /// Density ρ(S) of the given vertex set, computed from the immutable topology
    /// alone — never from any peel state. Empty and singleton sets have density 0.
    pub fn subgraph_density(&self, s: &HashSet<VertexId>) -> f64 {
        if s.len() < 2 {
            return 0.0;
        }
        let mut edge_count = 0u64;
        for &v in s {
            for &u in self.neighbours(v) {
                if u > v.0 && s.contains(&VertexId::new(u)) {
                    edge_count += 1;
                }
            }
        }
        edge_count as f64 / s.len() as f64
    }
}

/// Mutable peeling session over a shared, immutable [`Graph`] topology.
///
/// `degree[v]` always reflects only active neighbours (invariant D1); deactivating a
/// vertex decrements the degree of its still-active neighbours and the running
/// `active_edge_count` (invariant D2).
pub struct PeelState<'g> {
    graph: &'g Graph,
    active: Vec<bool>,
    degree: Vec<u32>,
    active_edge_count: u64,
}

impl<'g> PeelState<'g> {
    pub fn is_active(&self, v: VertexId) -> bool {
        self.active[v.index()]
    }

    /// Current degree of `v` with respect to active neighbours only. Debug-asserts
    /// that `v` is active, per the component contract.
    pub fn degree(&self, v: VertexId) -> u32 {
        debug_assert!(self.active[v.index()], "degree queried on inactive vertex");
        self.degree[v.index()]
    }

    /// Raw, unfiltered neighbour slice — callers filter by [`PeelState::is_active`]
    /// when they need only the live neighbourhood.
    pub fn neighbours(&self, v: VertexId) -> &[u32] {
        self.graph.neighbours(v)
    }

    /// Number of currently active vertices.
    pub fn active_count(&self) -> usize {
        self.active.iter().filter(|&&a| a).count()
    }

    /// Edges with both endpoints active (invariant D2).
    pub fn active_edge_count(&self) -> u64 {
        self.active_edge_count
    }

    /// Density of the currently active subgraph, `active_edge_count / active_count`.
    pub fn density(&self) -> f64 {
        let count = self.active_count();
        if count == 0 {
            0.0
        } else {
            self.active_edge_count as f64 / count as f64
        }
    }

    /// All currently active vertex ids.
    pub fn active_vertices(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.active
            .iter()
            .enumerate()
            .filter(|(_, &a)| a)
            .map(|(i, _)| VertexId::new(i as u32))
    }

    /// Snapshot of the currently active vertex set, suitable as a candidate `S`.
    pub fn active_set(&self) -> HashSet<VertexId> {
        self.active_vertices().collect()
    }

    /// Deactivates `v`. Precondition: `v` is active. Decrements the degree of every
    /// still-active neighbour and the running edge count once per active incident
    /// edge.
    pub fn deactivate(&mut self, v: VertexId) {
        debug_assert!(self.active[v.index()], "deactivating an already-inactive vertex");
        self.active[v.index()] = false;
        for &u_raw in self.graph.neighbours(v) {
            let u = u_raw as usize;
            if self.active[u] {
                self.degree[u] -= 1;
                self.active_edge_count -= 1;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle_plus_pendant() -> Graph {
        // 0-1-2 triangle, plus pendant 3 attached to 0.
        let (g, _) = Graph::build([(0, 1), (1, 2), (0, 2), (0, 3)]);
        g
    }

    #[test]
    fn build_drops_self_loops_and_duplicates() {
        let (g, _) = Graph::build([(0, 1), (0, 1), (1, 0), (2, 2)]);
        assert_eq!(g.n(), 3);
        assert_eq!(g.m(), 1);
    }

    #[test]
    fn static_degree_matches_topology() {
        let g = triangle_plus_pendant();
        assert_eq!(g.static_degree(VertexId::new(0)), 3);
        assert_eq!(g.static_degree(VertexId::new(3)), 1);
    }

    #[test]
    fn deactivate_updates_degree_and_edge_count_d1_d2() {
        let g = triangle_plus_pendant();
        let mut peel = g.peel_state();
        assert_eq!(peel.active_edge_count(), 4);
        peel.deactivate(VertexId::new(3));
        assert_eq!(peel.active_edge_count(), 3);
        assert_eq!(peel.degree(VertexId::new(0)), 2);

        for v in [VertexId::new(0), VertexId::new(1), VertexId::new(2)] {
            let live_neighbours = peel
                .neighbours(v)
                .iter()
                .filter(|&&u| peel.is_active(VertexId::new(u)))
                .count();
            assert_eq!(live_neighbours as u32, peel.degree(v));
        }
    }

    #[test]
    fn subgraph_density_empty_and_singleton_are_zero() {
        let g = triangle_plus_pendant();
        assert_eq!(g.subgraph_density(&HashSet::new()), 0.0);
        let mut singleton = HashSet::new();
        singleton.insert(VertexId::new(0));
        assert_eq!(g.subgraph_density(&singleton), 0.0);
    }

    #[test]
    fn subgraph_density_is_independent_of_peel_state() {
        let g = triangle_plus_pendant();
        let mut peel = g.peel_state();
        peel.deactivate(VertexId::new(3));
        let triangle: HashSet<VertexId> = [0, 1, 2].into_iter().map(VertexId::new).collect();
        assert_eq!(g.subgraph_density(&triangle), 1.0);
    }
}
