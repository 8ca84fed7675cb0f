use rustc_hash::{FxHashMap, FxHashSet};
use tracing::debug;

use crate::graph::{NodeId, WeightedGraph};

use super::frontier::Frontier;
use super::heuristic::{estimate, HeuristicMode};
use super::path::reconstruct;
use super::SearchResult;

/// Heuristic-guided search from `start` to `goal`.
///
/// Same skeleton and lazy-deletion discipline as [`super::dijkstra`]; the
/// priority key is `f = g + h`. Relaxation compares `g`, never `f`, against
/// the best known cost, and `f` is recomputed fresh from the updated `g` at
/// every push. On a graph without positions the estimate is identically
/// zero and the expansion order matches uniform-cost search exactly.
pub fn astar(
    graph: &WeightedGraph,
    start: &NodeId,
    goal: &NodeId,
    mode: HeuristicMode,
) -> SearchResult {
    if !graph.contains(start) || !graph.contains(goal) {
        return SearchResult::unreachable(0);
    }
    debug!(%start, %goal, ?mode, "astar: begin");

    let mut best_cost: FxHashMap<NodeId, f64> = FxHashMap::default();
    let mut parents: FxHashMap<NodeId, Option<NodeId>> = FxHashMap::default();
    let mut settled: FxHashSet<NodeId> = FxHashSet::default();
    let mut open = Frontier::default();
    let mut expanded: u64 = 0;

    best_cost.insert(start.clone(), 0.0);
    parents.insert(start.clone(), None);
    let h0 = estimate(graph, start, goal, mode);
    open.push(h0, 0.0, start.clone());

    while let Some(entry) = open.pop() {
        let u = entry.node;
        if !settled.insert(u.clone()) {
            continue;
        }
        expanded += 1;
        if u == *goal {
            break;
        }

        let g = entry.g;
        for (v, w) in graph.neighbors(&u) {
            let candidate = g + w;
            if candidate < best_cost.get(v).copied().unwrap_or(f64::INFINITY) {
                best_cost.insert(v.clone(), candidate);
                parents.insert(v.clone(), Some(u.clone()));
                let h = estimate(graph, v, goal, mode);
                open.push(candidate + h, candidate, v.clone());
            }
        }
    }

    let distance = best_cost.get(goal).copied().unwrap_or(f64::INFINITY);
    let path = if distance.is_finite() {
        reconstruct(&parents, start, goal)
    } else {
        Vec::new()
    };
    debug!(distance, expanded, "astar: done");
    SearchResult {
        path,
        distance,
        expanded,
    }
}
