/*!
# Algorithm Strategies

Five densest-subgraph strategies behind one sum type. `T` (the Greedy++ pass count)
is a variant-local field rather than a separate optional argument threaded through
every call site, so a caller can't accidentally run Greedy++ with an unset `T`.
*/

pub mod charikar;
pub mod goldberg;
pub mod greedypp;

use crate::core::graph::Graph;
use crate::core::id::VertexId;
use std::collections::HashSet;
use std::fmt;

/// Default number of Greedy++ passes when a caller doesn't specify one.
pub const DEFAULT_GREEDYPP_ITERATIONS: u32 = 10;

/// One of the five densest-subgraph strategies this crate implements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    CharikarLinear,
    CharikarHeap,
    GreedyPP { iterations: u32 },
    GreedyPPHeap { iterations: u32 },
    GoldbergExact,
}

impl Algorithm {
    /// Runs this strategy against `graph`, returning the identified vertex set.
    pub fn run(self, graph: &Graph) -> HashSet<VertexId> {
        match self {
            Algorithm::CharikarLinear => charikar::charikar_linear(graph),
            Algorithm::CharikarHeap => charikar::charikar_heap(graph),
            Algorithm::GreedyPP { iterations } => greedypp::greedy_pp(graph, iterations),
            Algorithm::GreedyPPHeap { iterations } => {
                greedypp::greedy_pp_heap(graph, iterations)
            }
            Algorithm::GoldbergExact => goldberg::goldberg_exact(graph),
        }
    }

    /// The canonical lowercase-hyphen name used by the CLI and evaluation records.
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::CharikarLinear => "charikar-linear",
            Algorithm::CharikarHeap => "charikar-heap",
            Algorithm::GreedyPP { .. } => "greedy-pp",
            Algorithm::GreedyPPHeap { .. } => "greedy-pp-heap",
            Algorithm::GoldbergExact => "goldberg-exact",
        }
    }

    /// Parses a CLI-facing algorithm name, applying [`DEFAULT_GREEDYPP_ITERATIONS`]
    /// for the two Greedy++ variants when `iterations` is `None`.
    pub fn parse(name: &str, iterations: Option<u32>) -> Option<Algorithm> {
        let t = iterations.unwrap_or(DEFAULT_GREEDYPP_ITERATIONS);
        match name {
            "charikar-linear" => Some(Algorithm::CharikarLinear),
            "charikar-heap" => Some(Algorithm::CharikarHeap),
            "greedy-pp" => Some(Algorithm::GreedyPP { iterations: t }),
            "greedy-pp-heap" => Some(Algorithm::GreedyPPHeap { iterations: t }),
            "goldberg-exact" => Some(Algorithm::GoldbergExact),
            _ => None,
        }
    }

    /// All five strategies, Greedy++ variants using [`DEFAULT_GREEDYPP_ITERATIONS`].
    pub fn all() -> [Algorithm; 5] {
        [
            Algorithm::CharikarLinear,
            Algorithm::CharikarHeap,
            Algorithm::GreedyPP {
                iterations: DEFAULT_GREEDYPP_ITERATIONS,
            },
            Algorithm::GreedyPPHeap {
                iterations: DEFAULT_GREEDYPP_ITERATIONS,
            },
            Algorithm::GoldbergExact,
        ]
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_round_trips_through_name() {
        for algorithm in Algorithm::all() {
            let parsed = Algorithm::parse(algorithm.name(), Some(3));
            assert!(parsed.is_some());
        }
    }

    #[test]
    fn parse_rejects_unknown_names() {
        assert!(Algorithm::parse("not-an-algorithm", None).is_none());
    }

    #[test]
    fn run_dispatches_to_the_right_strategy() {
        let (g, _) = Graph::build([(0, 1), (0, 2), (0, 3), (1, 2), (1, 3), (2, 3)]);
        for algorithm in Algorithm::all() {
            let s = algorithm.run(&g);
            assert!(!s.is_empty());
        }
    }
}
