/*!
# Goldberg-Exact

Finds the true densest subgraph by binary-searching over a candidate density `g` and
testing, for each candidate, whether some subgraph achieves density at least `g` via a
parametric min-cut. The flow network at each step has a source `s`, a sink `t`, one
node per vertex, arcs `s -> v` of capacity `m`, arcs `v -> t` of capacity
`m + 2g - deg_G(v)`, and arcs of capacity 1 in each direction for every undirected
edge. The source side of the min cut (minus `s` itself) is the best subgraph found so
far at that density threshold.
*/

use crate::core::flow::FlowNetwork;
use crate::core::graph::Graph;
use crate::core::id::VertexId;
use std::collections::HashSet;
use tracing::debug;

/// Finds the exact densest subgraph of `graph` via parametric max-flow binary search.
pub fn goldberg_exact(graph: &Graph) -> HashSet<VertexId> {
    let n = graph.n();
    if n == 0 {
        return HashSet::new();
    }
    let m = graph.m();
    if m == 0 {
        // No edges: every vertex has density 0; any single vertex is optimal.
        let mut s = HashSet::new();
        s.insert(VertexId::new(0));
        return s;
    }

    let epsilon = if n > 1 {
        1.0 / (n as f64 * (n as f64 - 1.0))
    } else {
        1e-9
    };
    let max_iterations = {
        let bound = (m as f64 * n as f64 * (n as f64 - 1.0).max(1.0)).max(2.0);
        bound.log2().ceil() as u32 + 10
    };

    let mut lower = 0.0f64;
    let mut upper = m as f64;
    let mut best: HashSet<VertexId> = HashSet::new();

    for iteration in 0..max_iterations {
        if upper - lower < epsilon {
            break;
        }
        let g = (lower + upper) / 2.0;
        let source_side = min_cut_source_side(graph, m, g);

        if source_side.len() <= 1 {
            // Source side is just {s}: no subgraph at density >= g exists.
            upper = g;
        } else {
            lower = g;
            best = source_side
                .into_iter()
                .skip(1) // drop s, which is always node 0
                .map(|node| VertexId::new((node - 1) as u32))
                .collect();
        }
        debug!(iteration, g, lower, upper, "goldberg_exact binary search step");
    }

    best
}

/// Builds the parametric flow network at candidate density `g` and returns the
/// residual-reachable source side (including the source node, index 0).
fn min_cut_source_side(graph: &Graph, m: usize, g: f64) -> Vec<usize> {
    let n = graph.n();
    let source = 0usize;
    let sink = n + 1;
    let mut network = FlowNetwork::new(n + 2);

    for v in graph.vertices() {
        let node = v.index() + 1;
        network.add_arc(source, node, m as f64);
        let deg = graph.static_degree(v) as f64;
        network.add_arc(node, sink, m as f64 + 2.0 * g - deg);
    }
    for v in graph.vertices() {
        let node = v.index() + 1;
        for &u_raw in graph.neighbours(v) {
            if u_raw > v.0 {
                let other_node = u_raw as usize + 1;
                network.add_arc(node, other_node, 1.0);
                network.add_arc(other_node, node, 1.0);
            }
        }
    }

    let (_, source_side) = network
        .min_cut(source, sink)
        .expect("goldberg flow network capacities are always finite by construction");
    source_side
}
