use crate::graph::{NodeId, WeightedGraph};

/// Distance metric used for the A* estimate.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HeuristicMode {
    #[default]
    Euclidean,
    Manhattan,
}

impl HeuristicMode {
    /// Map a mode name to a metric. Unrecognized names fall back to
    /// euclidean; callers needing strict validation must check the name
    /// before calling.
    pub fn from_name(name: &str) -> Self {
        match name {
            "manhattan" => HeuristicMode::Manhattan,
            _ => HeuristicMode::Euclidean,
        }
    }
}

/// Estimated remaining cost from `node` to `goal`.
///
/// When either endpoint has no position this returns 0, which is admissible
/// and consistent by construction and makes A* expand exactly like
/// uniform-cost search.
pub fn estimate(graph: &WeightedGraph, node: &NodeId, goal: &NodeId, mode: HeuristicMode) -> f64 {
    let (Some((x1, y1)), Some((x2, y2))) = (graph.position(node), graph.position(goal)) else {
        return 0.0;
    };
    match mode {
        HeuristicMode::Euclidean => (x1 - x2).hypot(y1 - y2),
        HeuristicMode::Manhattan => (x1 - x2).abs() + (y1 - y2).abs(),
    }
}
