use rustc_hash::FxHashMap;

use crate::graph::NodeId;

/// Rebuild the start-to-goal node sequence from parent links.
///
/// Returns an empty path when `goal` was never discovered. A malformed map
/// (dangling parent or cycle) also yields an empty path: the walk is
/// bounded by the map size, so it can neither loop forever nor panic.
pub fn reconstruct(
    parents: &FxHashMap<NodeId, Option<NodeId>>,
    start: &NodeId,
    goal: &NodeId,
) -> Vec<NodeId> {
    if !parents.contains_key(goal) {
        return Vec::new();
    }

    let mut path = vec![goal.clone()];
    let mut cur = goal.clone();
    while cur != *start {
        match parents.get(&cur) {
            Some(Some(prev)) => {
                cur = prev.clone();
                path.push(cur.clone());
            }
            // Dangling reference, or walked past a root that is not `start`.
            _ => return Vec::new(),
        }
        if path.len() > parents.len() {
            // More steps than distinct nodes: the map contains a cycle.
            return Vec::new();
        }
    }
    path.reverse();
    path
}
