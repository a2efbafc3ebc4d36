/*!
# Synthetic Graph Generator

A seeded Erdos-Renyi generator, used by benchmarks and by the property tests in
`tests/property_tests.rs` that need graphs of varying size and density rather than
the small hand-built fixtures. Mirrors the seeding/RNG convention of the teacher
crate's `core::generators::erdos_renyi_graph`.
*/

use crate::core::error::DsgError;
use crate::core::graph::Graph;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Generates a random undirected simple graph on `n` vertices where each of the
/// `n*(n-1)/2` possible edges is present independently with probability `p`.
pub fn erdos_renyi_graph(n: usize, p: f64, seed: u64) -> Result<Graph, DsgError> {
    if !(0.0..=1.0).contains(&p) {
        return Err(DsgError::MalformedInput(
            "probability p must be in [0.0, 1.0]".into(),
        ));
    }
    let mut rng = StdRng::seed_from_u64(seed);
    let mut edges = Vec::new();
    // Self-loops intern every vertex (even ones that end up isolated) and are
    // dropped by `Graph::build`, guaranteeing the result has exactly `n` vertices.
    for i in 0..n {
        edges.push((i as u64, i as u64));
    }
    for i in 0..n {
        for j in (i + 1)..n {
            if rng.random_bool(p) {
                edges.push((i as u64, j as u64));
            }
        }
    }
    let (graph, _) = Graph::build(edges);
    Ok(graph)
}
