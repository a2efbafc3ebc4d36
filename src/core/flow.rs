/*!
# Max-Flow / Min-Cut Solver

Dinic's algorithm over a small directed graph with non-negative real capacities,
used only by Goldberg-Exact's parametric binary search. Capacities are represented
as `f64`; a caller that computes a negative capacity (Goldberg's
`m + 2g − deg_G(v)` construction can do this) has it clamped to zero at arc
insertion time, matching the precedent set by petgraph's own push-relabel min-cut
for negative edge weights.

The minimum cut's source side is computed, after a max flow is found, as the set of
nodes reachable from `source` in the residual graph — the inclusion-minimal such
set, which is what Goldberg's density-extraction step requires.
*/

use crate::core::error::DsgError;
use std::collections::VecDeque;

const EPS: f64 = 1e-9;

struct FlowEdge {
    to: usize,
    cap: f64,
}

/// A small directed flow network built fresh for each Goldberg-Exact binary-search
/// iteration.
pub struct FlowNetwork {
    num_nodes: usize,
    edges: Vec<FlowEdge>,
    adjacency: Vec<Vec<usize>>,
}

impl FlowNetwork {
    pub fn new(num_nodes: usize) -> Self {
        Self {
            num_nodes,
            edges: Vec::new(),
            adjacency: vec![Vec::new(); num_nodes],
        }
    }

    /// Adds a directed arc `from -> to` with the given capacity, plus its paired
    /// zero-capacity reverse arc. Negative capacities are clamped to zero.
    pub fn add_arc(&mut self, from: usize, to: usize, capacity: f64) {
        let capacity = capacity.max(0.0);
        let forward_idx = self.edges.len();
        self.edges.push(FlowEdge { to, cap: capacity });
        self.adjacency[from].push(forward_idx);

        let backward_idx = self.edges.len();
        self.edges.push(FlowEdge { to: from, cap: 0.0 });
        self.adjacency[to].push(backward_idx);
    }

    fn bfs_levels(&self, source: usize) -> Vec<i32> {
        let mut level = vec![-1i32; self.num_nodes];
        level[source] = 0;
        let mut queue = VecDeque::new();
        queue.push_back(source);
        while let Some(u) = queue.pop_front() {
            for &edge_idx in &self.adjacency[u] {
                let edge = &self.edges[edge_idx];
                if edge.cap > EPS && level[edge.to] < 0 {
                    level[edge.to] = level[u] + 1;
                    queue.push_back(edge.to);
                }
            }
        }
        level
    }

    fn dfs_blocking_flow(
        &mut self,
        u: usize,
        sink: usize,
        pushed: f64,
        level: &[i32],
        iter: &mut [usize],
    ) -> f64 {
        if u == sink || pushed <= EPS {
            return pushed;
        }
        while iter[u] < self.adjacency[u].len() {
            let edge_idx = self.adjacency[u][iter[u]];
            let to = self.edges[edge_idx].to;
            let cap = self.edges[edge_idx].cap;
            if cap > EPS && level[to] == level[u] + 1 {
                let sent = self.dfs_blocking_flow(to, sink, pushed.min(cap), level, iter);
                if sent > EPS {
                    self.edges[edge_idx].cap -= sent;
                    let rev_idx = edge_idx ^ 1;
                    self.edges[rev_idx].cap += sent;
                    return sent;
                }
            }
            iter[u] += 1;
        }
        0.0
    }

    /// Runs Dinic's algorithm and returns `(cut_value, source_side)`, where
    /// `source_side` is the set of node indices (including `source`) reachable
    /// from `source` in the residual graph after a max flow is found.
    pub fn min_cut(
        mut self,
        source: usize,
        sink: usize,
    ) -> Result<(f64, Vec<usize>), DsgError> {
        let mut total_flow = 0.0;
        loop {
            let level = self.bfs_levels(source);
            if level[sink] < 0 {
                break; // sink unreachable: max flow found (or network disconnected)
            }
            let mut iter = vec![0usize; self.num_nodes];
            loop {
                let pushed = self.dfs_blocking_flow(source, sink, f64::INFINITY, &level, &mut iter);
                if pushed <= EPS {
                    break;
                }
                total_flow += pushed;
                if !total_flow.is_finite() {
                    return Err(DsgError::NumericOverflow);
                }
            }
        }

        // Residual reachability from source gives the inclusion-minimal source side.
        let mut reachable = vec![false; self.num_nodes];
        reachable[source] = true;
        let mut queue = VecDeque::new();
        queue.push_back(source);
        while let Some(u) = queue.pop_front() {
            for &edge_idx in &self.adjacency[u] {
                let edge = &self.edges[edge_idx];
                if edge.cap > EPS && !reachable[edge.to] {
                    reachable[edge.to] = true;
                    queue.push_back(edge.to);
                }
            }
        }
        let source_side: Vec<usize> = (0..self.num_nodes).filter(|&i| reachable[i]).collect();
        Ok((total_flow, source_side))
    }
}
