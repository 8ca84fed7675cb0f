pub mod engine;
pub mod graph;

pub use engine::{astar, dijkstra, reconstruct, HeuristicMode, SearchResult};
pub use graph::load::{load_dataset, DatasetMeta, DatasetSpec, LoadError};
pub use graph::{NodeId, Position, WeightedGraph};

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
