use std::fmt;
use std::str::FromStr;

use indexmap::IndexMap;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

pub mod load;

/// 2-D coordinates attached to a node, used only by the A* heuristic.
pub type Position = (f64, f64);

/// Node identifier.
///
/// Edge-list datasets use plain integers; hand-built graphs and tests may
/// use labels. Parsing tries the integer form first and falls back to a
/// label, so both kinds round-trip through user input unchanged.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NodeId {
    Int(i64),
    Label(String),
}

impl NodeId {
    pub fn parse(s: &str) -> Self {
        match s.parse::<i64>() {
            Ok(v) => NodeId::Int(v),
            Err(_) => NodeId::Label(s.to_string()),
        }
    }
}

impl FromStr for NodeId {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeId::Int(v) => write!(f, "{v}"),
            NodeId::Label(s) => f.write_str(s),
        }
    }
}

impl From<i64> for NodeId {
    fn from(v: i64) -> Self {
        NodeId::Int(v)
    }
}

impl From<&str> for NodeId {
    fn from(s: &str) -> Self {
        NodeId::parse(s)
    }
}

/// Read-only adjacency view of an undirected weighted graph.
///
/// The adjacency relation is symmetric by construction: `add_edge` inserts
/// both directions with the same weight, and re-adding an edge overwrites
/// the weight on both sides. Node and neighbor iteration order is insertion
/// order (`IndexMap`), which keeps every downstream tie-break deterministic.
#[derive(Clone, Debug, Default)]
pub struct WeightedGraph {
    adjacency: IndexMap<NodeId, Vec<(NodeId, f64)>>,
    positions: FxHashMap<NodeId, Position>,
    edges: usize,
}

impl WeightedGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ensure `node` exists, with no incident edges yet.
    pub fn add_node(&mut self, node: NodeId) {
        self.adjacency.entry(node).or_default();
    }

    /// Insert the undirected edge `a -- b` with the given weight.
    /// Re-inserting an existing edge overwrites its weight in both directions.
    pub fn add_edge(&mut self, a: NodeId, b: NodeId, weight: f64) {
        let fresh = self.insert_half(a.clone(), b.clone(), weight);
        if a != b {
            self.insert_half(b, a, weight);
        }
        if fresh {
            self.edges += 1;
        }
    }

    fn insert_half(&mut self, from: NodeId, to: NodeId, weight: f64) -> bool {
        let list = self.adjacency.entry(from).or_default();
        match list.iter_mut().find(|(n, _)| *n == to) {
            Some((_, w)) => {
                *w = weight;
                false
            }
            None => {
                list.push((to, weight));
                true
            }
        }
    }

    pub fn contains(&self, node: &NodeId) -> bool {
        self.adjacency.contains_key(node)
    }

    /// Neighbors of `node` with the connecting edge weights, in insertion
    /// order. Unknown nodes yield an empty slice.
    pub fn neighbors(&self, node: &NodeId) -> &[(NodeId, f64)] {
        self.adjacency.get(node).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn position(&self, node: &NodeId) -> Option<Position> {
        self.positions.get(node).copied()
    }

    pub fn set_position(&mut self, node: NodeId, pos: Position) {
        self.positions.insert(node, pos);
    }

    pub fn has_positions(&self) -> bool {
        !self.positions.is_empty()
    }

    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges
    }

    pub fn nodes(&self) -> impl Iterator<Item = &NodeId> {
        self.adjacency.keys()
    }
}
