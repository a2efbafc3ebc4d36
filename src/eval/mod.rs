/*!
# Evaluator

Drives one [`crate::algorithms::Algorithm`] against one [`Graph`], measuring wall
time and memory, and scoring the result against the true optimum (always obtained via
Goldberg-Exact, regardless of which algorithm is under test).
*/

pub mod memory;
pub mod record;

use crate::algorithms::{goldberg::goldberg_exact, Algorithm};
use crate::core::graph::Graph;
use crate::core::id::VertexId;
use crate::eval::record::EvaluationRecord;
use std::collections::HashSet;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::time::Instant;
use tracing::warn;

/// Runs an [`Algorithm`] against a [`Graph`] and produces an [`EvaluationRecord`].
pub struct Evaluator;

impl Evaluator {
    /// Evaluates `algorithm` on `graph`. Never panics: an unexpected panic inside the
    /// strategy is caught and recorded as an empty result, per the error-handling
    /// contract.
    pub fn evaluate(algorithm: Algorithm, graph: &Graph) -> EvaluationRecord {
        let (baseline_allocator_peak, baseline_rss) = memory::sample();
        let start = Instant::now();

        let identified: HashSet<VertexId> =
            match catch_unwind(AssertUnwindSafe(|| algorithm.run(graph))) {
                Ok(set) => set,
                Err(payload) => {
                    let message = panic_message(&payload);
                    warn!(algorithm = %algorithm, message, "algorithm panicked; recording empty result");
                    HashSet::new()
                }
            };

        let running_time = start.elapsed().as_secs_f64();
        let (peak_allocator_after, rss_after) = memory::sample();
        let allocator_delta_mb =
            peak_allocator_after.saturating_sub(baseline_allocator_peak) as f64 / 1_000_000.0;
        let rss_delta_mb = rss_after.saturating_sub(baseline_rss) as f64 / 1_000_000.0;
        let memory_used = allocator_delta_mb.max(rss_delta_mb);

        let identified_subgraph_size = identified.len();
        let identified_subgraph_density = graph.subgraph_density(&identified);

        let optimal_set = if graph.n() == 0 {
            None
        } else {
            Some(goldberg_exact(graph))
        };
        let optimal_density = optimal_set.as_ref().map(|s| graph.subgraph_density(s));

        let overlap_with_optimal_subgraph = match &optimal_set {
            Some(optimal) if !optimal.is_empty() => {
                let shared = identified.intersection(optimal).count();
                (shared as f64 / optimal.len() as f64) * 100.0
            }
            _ => 0.0,
        };

        let density_ratio = match optimal_density {
            Some(opt) if opt > 0.0 => (identified_subgraph_density / opt) * 100.0,
            Some(_) => 100.0, // both the candidate and the optimum are edgeless
            None => 0.0,
        };
        let accuracy = (density_ratio + overlap_with_optimal_subgraph) / 2.0;

        EvaluationRecord {
            algorithm: algorithm.name().to_string(),
            running_time,
            memory_used,
            identified_subgraph_size,
            identified_subgraph_density,
            optimal_density,
            overlap_with_optimal_subgraph,
            accuracy,
            dataset_nodes: graph.n(),
            dataset_edges: graph.m(),
        }
    }
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic payload".to_string()
    }
}
