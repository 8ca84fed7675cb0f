use rustc_hash::{FxHashMap, FxHashSet};
use tracing::debug;

use crate::graph::{NodeId, WeightedGraph};

use super::frontier::Frontier;
use super::path::reconstruct;
use super::SearchResult;

/// Uniform-cost search from `start` to `goal`.
///
/// A node moves Unvisited -> Frontier -> Settled; once settled its cost is
/// final and it is never expanded again. The frontier may hold several
/// stale entries per node (no decrease-key); every pop after the first is
/// discarded. Expansion stops as soon as the goal settles.
///
/// An absent endpoint or an unreachable goal is an ordinary outcome: empty
/// path, infinite distance, never an error.
pub fn dijkstra(graph: &WeightedGraph, start: &NodeId, goal: &NodeId) -> SearchResult {
    if !graph.contains(start) || !graph.contains(goal) {
        return SearchResult::unreachable(0);
    }
    debug!(%start, %goal, "dijkstra: begin");

    let mut best_cost: FxHashMap<NodeId, f64> = FxHashMap::default();
    let mut parents: FxHashMap<NodeId, Option<NodeId>> = FxHashMap::default();
    let mut settled: FxHashSet<NodeId> = FxHashSet::default();
    let mut open = Frontier::default();
    let mut expanded: u64 = 0;

    best_cost.insert(start.clone(), 0.0);
    parents.insert(start.clone(), None);
    open.push(0.0, 0.0, start.clone());

    while let Some(entry) = open.pop() {
        let u = entry.node;
        if !settled.insert(u.clone()) {
            // Stale duplicate of an already-settled node.
            continue;
        }
        expanded += 1;
        if u == *goal {
            break;
        }

        let d = entry.g;
        for (v, w) in graph.neighbors(&u) {
            let candidate = d + w;
            // Strict `<`: ties never update, so the first-found predecessor
            // wins and pop order stays deterministic.
            if candidate < best_cost.get(v).copied().unwrap_or(f64::INFINITY) {
                best_cost.insert(v.clone(), candidate);
                parents.insert(v.clone(), Some(u.clone()));
                open.push(candidate, candidate, v.clone());
            }
        }
    }

    let distance = best_cost.get(goal).copied().unwrap_or(f64::INFINITY);
    let path = if distance.is_finite() {
        reconstruct(&parents, start, goal)
    } else {
        Vec::new()
    };
    debug!(distance, expanded, "dijkstra: done");
    SearchResult {
        path,
        distance,
        expanded,
    }
}
