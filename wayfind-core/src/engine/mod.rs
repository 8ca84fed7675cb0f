mod astar;
mod dijkstra;
mod frontier;
mod heuristic;
mod path;

pub use astar::astar;
pub use dijkstra::dijkstra;
pub use heuristic::{estimate, HeuristicMode};
pub use path::reconstruct;

use serde::Serialize;

use crate::graph::NodeId;

/// Outcome of one search call.
///
/// An unreachable goal is a defined outcome, not an error: the path is
/// empty and the distance is `f64::INFINITY`. `expanded` counts the nodes
/// settled before termination and is the search-effort metric the shell
/// reports.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SearchResult {
    pub path: Vec<NodeId>,
    pub distance: f64,
    pub expanded: u64,
}

impl SearchResult {
    pub(crate) fn unreachable(expanded: u64) -> Self {
        SearchResult {
            path: Vec::new(),
            distance: f64::INFINITY,
            expanded,
        }
    }

    pub fn is_reachable(&self) -> bool {
        self.distance.is_finite()
    }
}
