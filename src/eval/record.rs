/*!
# Evaluation Record

The flat, serializable result of one [`crate::eval::Evaluator::evaluate`] call. Field
names match the external contract exactly, including the two `#`-prefixed dataset
size keys, which aren't valid Rust identifiers and need an explicit `serde(rename)`.
*/

use serde::Serialize;

/// One algorithm's measured performance and accuracy on one dataset.
#[derive(Debug, Clone, Serialize)]
pub struct EvaluationRecord {
    pub algorithm: String,
    pub running_time: f64,
    pub memory_used: f64,
    pub identified_subgraph_size: usize,
    pub identified_subgraph_density: f64,
    pub optimal_density: Option<f64>,
    pub overlap_with_optimal_subgraph: f64,
    pub accuracy: f64,

    #[serde(rename = "#_dataset_nodes")]
    pub dataset_nodes: usize,
    #[serde(rename = "#_dataset_edges")]
    pub dataset_edges: usize,
}
