/*!
# Unified Error Type

This module provides a single error enum shared by the graph engine, the priority
queue, the max-flow solver, the algorithm strategies, and the evaluator.
*/

use std::error::Error;
use std::fmt;

/// Unified error type for all `dsgraph` operations.
#[derive(Debug)]
pub enum DsgError {
    /// The dataset file could not be parsed (§6 format violation).
    MalformedInput(String),

    /// n=0. Not a true failure: algorithms return `∅` for this case, and the
    /// evaluator records `optimal_density = None`.
    EmptyGraph,

    /// The max-flow solver produced a non-finite capacity or flow value.
    NumericOverflow,

    /// An algorithm strategy panicked unexpectedly; caught at the evaluator
    /// boundary and converted into an empty-result record.
    AlgorithmFailure(String),
}

impl fmt::Display for DsgError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            DsgError::MalformedInput(msg) => write!(f, "malformed dataset input: {}", msg),
            DsgError::EmptyGraph => write!(f, "graph has no vertices"),
            DsgError::NumericOverflow => write!(f, "numeric overflow in max-flow computation"),
            DsgError::AlgorithmFailure(msg) => write!(f, "algorithm failure: {}", msg),
        }
    }
}

impl Error for DsgError {}

impl From<std::io::Error> for DsgError {
    fn from(e: std::io::Error) -> Self {
        DsgError::MalformedInput(e.to_string())
    }
}
