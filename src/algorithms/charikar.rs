/*!
# Charikar's Greedy Peel

Repeatedly removes a minimum-degree active vertex, tracking the densest active
subgraph seen along the way. Both variants below return identical results (P6); the
heap variant exists because a linear scan for the minimum is O(n) per step, while the
lazy priority queue amortises it.
*/

use crate::core::graph::Graph;
use crate::core::id::VertexId;
use crate::core::pqueue::LazyMinQueue;
use std::collections::HashSet;
use tracing::debug;

/// Charikar-Linear: selects the minimum-degree vertex via a full linear scan of the
/// active set each round.
pub fn charikar_linear(graph: &Graph) -> HashSet<VertexId> {
    if graph.n() == 0 {
        return HashSet::new();
    }
    let mut peel = graph.peel_state();
    let mut best_density = peel.density();
    let mut best_set = peel.active_set();

    loop {
        let current_density = peel.density();
        if current_density > best_density {
            best_density = current_density;
            best_set = peel.active_set();
        }

        let min_vertex = peel
            .active_vertices()
            .min_by_key(|&v| (peel.degree(v), v));
        let Some(v) = min_vertex else {
            break;
        };
        peel.deactivate(v);
        if peel.active_count() == 0 {
            break;
        }
    }

    debug!(best_density, set_size = best_set.len(), "charikar_linear done");
    best_set
}

/// Charikar-Heap: identical semantics to [`charikar_linear`], selecting the minimum
/// via a [`LazyMinQueue`] keyed on current degree.
pub fn charikar_heap(graph: &Graph) -> HashSet<VertexId> {
    if graph.n() == 0 {
        return HashSet::new();
    }
    let mut peel = graph.peel_state();
    let mut queue = LazyMinQueue::new();
    for v in peel.active_vertices() {
        queue.insert(peel.degree(v), v);
    }

    let mut best_density = peel.density();
    let mut best_set = peel.active_set();

    loop {
        let current_density = peel.density();
        if current_density > best_density {
            best_density = current_density;
            best_set = peel.active_set();
        }

        let popped = queue.extract_min(|v| peel.is_active(v), |v| peel.degree(v));
        let Some((_, v)) = popped else {
            break;
        };

        for &u_raw in peel.neighbours(v) {
            let u = VertexId::new(u_raw);
            if peel.is_active(u) {
                queue.decrease_key(u, peel.degree(u) - 1);
            }
        }
        peel.deactivate(v);
        if peel.active_count() == 0 {
            break;
        }
    }

    debug!(best_density, set_size = best_set.len(), "charikar_heap done");
    best_set
}

#[cfg(test)]
mod tests {
    use super::*;

    fn k4() -> Graph {
        let (g, _) = Graph::build([(0, 1), (0, 2), (0, 3), (1, 2), (1, 3), (2, 3)]);
        g
    }

    #[test]
    fn empty_graph_returns_empty_set() {
        let (g, _) = Graph::build(Vec::<(u64, u64)>::new());
        assert!(charikar_linear(&g).is_empty());
        assert!(charikar_heap(&g).is_empty());
    }

    #[test]
    fn single_edge_density_one_half() {
        let (g, _) = Graph::build([(0, 1)]);
        let s = charikar_linear(&g);
        assert_eq!(s.len(), 2);
        assert_eq!(g.subgraph_density(&s), 0.5);
    }

    #[test]
    fn k4_is_the_densest_subgraph() {
        let g = k4();
        let s = charikar_linear(&g);
        assert_eq!(s.len(), 4);
        assert_eq!(g.subgraph_density(&s), 1.5);
    }

    #[test]
    fn linear_and_heap_variants_agree_p6() {
        let g = k4();
        assert_eq!(charikar_linear(&g), charikar_heap(&g));

        let (triangle_pendant, _) = Graph::build([(0, 1), (1, 2), (0, 2), (0, 3)]);
        assert_eq!(
            charikar_linear(&triangle_pendant),
            charikar_heap(&triangle_pendant)
        );
    }

    #[test]
    fn deterministic_across_runs_p7() {
        let g = k4();
        assert_eq!(charikar_linear(&g), charikar_linear(&g));
        assert_eq!(charikar_heap(&g), charikar_heap(&g));
    }
}
