/*!
# Greedy++

Boob et al.'s multi-pass refinement of Charikar's peel: instead of discarding the
degree bookkeeping between passes, each vertex accumulates a persistent "load" `ℓ[v]`
across passes, and each pass peels by `ℓ[v] + degree_in_pass(v)` rather than raw
degree alone. Running more passes tends to find denser subgraphs than a single
Charikar pass, at the cost of doing T of them.
*/

use crate::core::graph::Graph;
use crate::core::id::VertexId;
use crate::core::pqueue::LazyMinQueue;
use std::collections::HashSet;
use tracing::debug;

/// Runs exactly `iterations` full peeling passes, selecting by linear scan of
/// `load[v] + degree_in_pass(v)` each step.
pub fn greedy_pp(graph: &Graph, iterations: u32) -> HashSet<VertexId> {
    if graph.n() == 0 {
        return HashSet::new();
    }
    let mut load = vec![0u64; graph.n()];
    let mut best_density = 0.0f64;
    let mut best_set: HashSet<VertexId> = graph.vertices().collect();

    for pass in 0..iterations {
        let mut peel = graph.peel_state();
        loop {
            let current_density = peel.density();
            if current_density > best_density {
                best_density = current_density;
                best_set = peel.active_set();
            }

            let min_vertex = peel
                .active_vertices()
                .min_by_key(|&v| (load[v.index()] + peel.degree(v) as u64, v));
            let Some(v) = min_vertex else {
                break;
            };
            load[v.index()] += peel.degree(v) as u64;
            peel.deactivate(v);
            if peel.active_count() == 0 {
                break;
            }
        }
        debug!(pass, best_density, "greedy_pp pass complete");
    }

    best_set
}

/// Same semantics as [`greedy_pp`], maintaining priorities via a [`LazyMinQueue`]
/// instead of a linear scan.
pub fn greedy_pp_heap(graph: &Graph, iterations: u32) -> HashSet<VertexId> {
    if graph.n() == 0 {
        return HashSet::new();
    }
    let mut load = vec![0u64; graph.n()];
    let mut best_density = 0.0f64;
    let mut best_set: HashSet<VertexId> = graph.vertices().collect();

    let key_of = |load: &[u64], degree: u32, v: VertexId| -> u32 {
        let combined = load[v.index()] + degree as u64;
        combined.min(u32::MAX as u64) as u32
    };

    for pass in 0..iterations {
        let mut peel = graph.peel_state();
        let mut queue = LazyMinQueue::new();
        for v in peel.active_vertices() {
            queue.insert(key_of(&load, peel.degree(v), v), v);
        }

        loop {
            let current_density = peel.density();
            if current_density > best_density {
                best_density = current_density;
                best_set = peel.active_set();
            }

            let popped = queue.extract_min(
                |v| peel.is_active(v),
                |v| key_of(&load, peel.degree(v), v),
            );
            let Some((_, v)) = popped else {
                break;
            };
            load[v.index()] += peel.degree(v) as u64;

            for &u_raw in peel.neighbours(v) {
                let u = VertexId::new(u_raw);
                if peel.is_active(u) {
                    queue.decrease_key(u, key_of(&load, peel.degree(u) - 1, u));
                }
            }
            peel.deactivate(v);
            if peel.active_count() == 0 {
                break;
            }
        }
        debug!(pass, best_density, "greedy_pp_heap pass complete");
    }

    best_set
}
