//! Property-based tests (P1-P8) over randomly generated graphs.

use dsgraph::algorithms::charikar::{charikar_heap, charikar_linear};
use dsgraph::algorithms::goldberg::goldberg_exact;
use dsgraph::algorithms::greedypp::greedy_pp;
use dsgraph::core::generators::erdos_renyi_graph;
use dsgraph::core::graph::Graph;
use dsgraph::core::id::VertexId;
use proptest::prelude::*;
use std::collections::HashSet;

fn small_graph_strategy() -> impl Strategy<Value = (usize, f64, u64)> {
    (2usize..=12, 0.1f64..=0.9, any::<u64>())
}

fn brute_force_optimal_density(graph: &Graph) -> f64 {
    let n = graph.n();
    if n == 0 {
        return 0.0;
    }
    let all: Vec<VertexId> = graph.vertices().collect();
    let mut best = 0.0f64;
    for mask in 1u32..(1u32 << n) {
        let subset: HashSet<VertexId> = all
            .iter()
            .enumerate()
            .filter(|(i, _)| mask & (1 << i) != 0)
            .map(|(_, &v)| v)
            .collect();
        let density = graph.subgraph_density(&subset);
        if density > best {
            best = density;
        }
    }
    best
}

proptest! {
    // P1: after any sequence of deactivate calls, degree[v] equals the recomputed
    // count of active neighbours.
    #[test]
    fn p1_degree_consistency((n, p, seed) in small_graph_strategy()) {
        let graph = erdos_renyi_graph(n, p, seed).unwrap();
        let mut peel = graph.peel_state();
        let order: Vec<VertexId> = graph.vertices().collect();
        for v in order {
            if peel.is_active(v) {
                peel.deactivate(v);
            }
            for u in graph.vertices() {
                if peel.is_active(u) {
                    let recomputed = peel
                        .neighbours(u)
                        .iter()
                        .filter(|&&w| peel.is_active(VertexId::new(w)))
                        .count() as u32;
                    prop_assert_eq!(recomputed, peel.degree(u));
                }
            }
        }
    }

    // P2: Charikar-Linear's best density is >= m/n and >= the density of every
    // intermediate peel state it visited. Re-peels independently (instrumenting
    // every intermediate density) and checks the algorithm's returned density
    // against that independently recorded maximum.
    #[test]
    fn p2_density_monotonicity_absence((n, p, seed) in small_graph_strategy()) {
        let graph = erdos_renyi_graph(n, p, seed).unwrap();
        let initial_density = if graph.n() == 0 {
            0.0
        } else {
            graph.m() as f64 / graph.n() as f64
        };

        let mut peel = graph.peel_state();
        let mut max_visited = peel.density();
        loop {
            let current_density = peel.density();
            if current_density > max_visited {
                max_visited = current_density;
            }
            let min_vertex = peel
                .active_vertices()
                .min_by_key(|&v| (peel.degree(v), v));
            let Some(v) = min_vertex else { break };
            peel.deactivate(v);
            if peel.active_count() == 0 {
                break;
            }
        }

        let returned_density = graph.subgraph_density(&charikar_linear(&graph));
        prop_assert!(returned_density >= initial_density - 1e-9);
        prop_assert!(returned_density >= max_visited - 1e-9);
    }

    // P3: Charikar's returned density is at least half the true optimum.
    #[test]
    fn p3_two_approximation_guarantee((n, p, seed) in small_graph_strategy()) {
        let graph = erdos_renyi_graph(n, p, seed).unwrap();
        if graph.m() == 0 {
            return Ok(());
        }
        let optimal = brute_force_optimal_density(&graph);
        let found = graph.subgraph_density(&charikar_linear(&graph));
        prop_assert!(found >= optimal / 2.0 - 1e-9);
    }

    // P4: Greedy++ never finds a worse density than a single Charikar pass.
    #[test]
    fn p4_greedypp_dominates_charikar((n, p, seed) in small_graph_strategy()) {
        let graph = erdos_renyi_graph(n, p, seed).unwrap();
        let charikar_density = graph.subgraph_density(&charikar_linear(&graph));
        let greedypp_density = graph.subgraph_density(&greedy_pp(&graph, 5));
        prop_assert!(greedypp_density >= charikar_density - 1e-9);
    }

    // P6: Charikar-Linear and Charikar-Heap agree on every input.
    #[test]
    fn p6_heap_equivalence((n, p, seed) in small_graph_strategy()) {
        let graph = erdos_renyi_graph(n, p, seed).unwrap();
        prop_assert_eq!(charikar_linear(&graph), charikar_heap(&graph));
    }

    // P7: every algorithm is deterministic across repeated runs on the same graph.
    #[test]
    fn p7_determinism((n, p, seed) in small_graph_strategy()) {
        let graph = erdos_renyi_graph(n, p, seed).unwrap();
        prop_assert_eq!(charikar_linear(&graph), charikar_linear(&graph));
        prop_assert_eq!(greedy_pp(&graph, 3), greedy_pp(&graph, 3));
        prop_assert_eq!(goldberg_exact(&graph), goldberg_exact(&graph));
    }

    // P8: subgraph_density matches a direct recount of edges within S.
    #[test]
    fn p8_density_round_trip((n, p, seed) in small_graph_strategy()) {
        let graph = erdos_renyi_graph(n, p, seed).unwrap();
        let s = charikar_linear(&graph);
        let mut edge_count = 0u64;
        for &v in &s {
            for &u_raw in graph.neighbours(v) {
                if u_raw > v.index() as u32 && s.contains(&VertexId::new(u_raw)) {
                    edge_count += 1;
                }
            }
        }
        let expected = if s.len() < 2 {
            0.0
        } else {
            edge_count as f64 / s.len() as f64
        };
        prop_assert!((graph.subgraph_density(&s) - expected).abs() < 1e-9);
    }

    // P5: Goldberg-Exact matches brute-force optimal density on small graphs.
    #[test]
    fn p5_goldberg_matches_brute_force((n, p, seed) in (2usize..=9, 0.2f64..=0.8, any::<u64>())) {
        let graph = erdos_renyi_graph(n, p, seed).unwrap();
        let optimal = brute_force_optimal_density(&graph);
        let found = graph.subgraph_density(&goldberg_exact(&graph));
        prop_assert!((found - optimal).abs() < 1e-6);
    }
}
