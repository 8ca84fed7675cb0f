use wayfind_core::{astar, dijkstra, HeuristicMode, NodeId, SearchResult, WeightedGraph};

fn n(v: i64) -> NodeId {
    NodeId::Int(v)
}

/// Weight of the edge a--b, if present.
fn edge_weight(g: &WeightedGraph, a: &NodeId, b: &NodeId) -> Option<f64> {
    g.neighbors(a).iter().find(|(v, _)| v == b).map(|(_, w)| *w)
}

/// Every consecutive pair in the path must be an edge, and the edge weights
/// must sum to the reported distance.
fn assert_path_consistent(g: &WeightedGraph, res: &SearchResult) {
    let mut total = 0.0;
    for pair in res.path.windows(2) {
        let w = edge_weight(g, &pair[0], &pair[1])
            .unwrap_or_else(|| panic!("{} -- {} is not an edge", pair[0], pair[1]));
        total += w;
    }
    assert!(
        (total - res.distance).abs() < 1e-9,
        "path weighs {total}, result claims {}",
        res.distance
    );
}

/// The diamond from the weighted-graph examples: two routes A->D, the
/// cheaper one through C.
fn diamond() -> WeightedGraph {
    let mut g = WeightedGraph::new();
    g.add_edge(n(1), n(2), 1.0);
    g.add_edge(n(1), n(3), 3.0);
    g.add_edge(n(2), n(4), 5.0);
    g.add_edge(n(3), n(4), 1.0);
    g
}

/// Two disconnected components: {1,2,3} and {8,9}.
fn split_graph() -> WeightedGraph {
    let mut g = WeightedGraph::new();
    g.add_edge(n(1), n(2), 1.0);
    g.add_edge(n(2), n(3), 1.0);
    g.add_edge(n(8), n(9), 1.0);
    g
}

/// `side x side` unit-weight grid with coordinates, node id = y * side + x.
fn grid(side: i64) -> WeightedGraph {
    let mut g = WeightedGraph::new();
    for y in 0..side {
        for x in 0..side {
            let id = y * side + x;
            if x + 1 < side {
                g.add_edge(n(id), n(id + 1), 1.0);
            }
            if y + 1 < side {
                g.add_edge(n(id), n(id + side), 1.0);
            }
        }
    }
    for y in 0..side {
        for x in 0..side {
            g.set_position(n(y * side + x), (x as f64, y as f64));
        }
    }
    g
}

/// All-pairs shortest distances by Floyd-Warshall, for cross-checking.
fn brute_force_distances(g: &WeightedGraph) -> Vec<Vec<f64>> {
    let nodes: Vec<NodeId> = g.nodes().cloned().collect();
    let k = nodes.len();
    let idx = |node: &NodeId| nodes.iter().position(|m| m == node).unwrap();

    let mut dist = vec![vec![f64::INFINITY; k]; k];
    for (i, row) in dist.iter_mut().enumerate() {
        row[i] = 0.0;
        for (v, w) in g.neighbors(&nodes[i]) {
            let j = idx(v);
            if *w < row[j] {
                row[j] = *w;
            }
        }
    }
    for m in 0..k {
        for i in 0..k {
            for j in 0..k {
                if dist[i][m] + dist[m][j] < dist[i][j] {
                    dist[i][j] = dist[i][m] + dist[m][j];
                }
            }
        }
    }
    dist
}

#[test]
fn dijkstra_finds_the_cheap_branch() {
    let g = diamond();
    let res = dijkstra(&g, &n(1), &n(4));
    assert_eq!(res.path, vec![n(1), n(3), n(4)]);
    assert!((res.distance - 4.0).abs() < 1e-9);
    assert_path_consistent(&g, &res);
}

#[test]
fn dijkstra_matches_brute_force_on_all_pairs() {
    let mut g = WeightedGraph::new();
    g.add_edge(n(1), n(2), 4.0);
    g.add_edge(n(1), n(3), 2.0);
    g.add_edge(n(2), n(3), 1.0);
    g.add_edge(n(2), n(4), 5.0);
    g.add_edge(n(3), n(4), 8.0);
    g.add_edge(n(4), n(5), 2.0);
    g.add_edge(n(3), n(5), 10.0);
    g.add_edge(n(5), n(6), 3.0);

    let nodes: Vec<NodeId> = g.nodes().cloned().collect();
    let expected = brute_force_distances(&g);
    for (i, a) in nodes.iter().enumerate() {
        for (j, b) in nodes.iter().enumerate() {
            let res = dijkstra(&g, a, b);
            assert!(
                (res.distance - expected[i][j]).abs() < 1e-9,
                "{a} -> {b}: got {}, expected {}",
                res.distance,
                expected[i][j]
            );
            assert_path_consistent(&g, &res);
        }
    }
}

#[test]
fn four_cycle_has_two_equally_short_branches() {
    // A-B-C-D-A, all weight 1: both branches to the opposite corner cost 2.
    let mut g = WeightedGraph::new();
    g.add_edge(n(1), n(2), 1.0);
    g.add_edge(n(2), n(3), 1.0);
    g.add_edge(n(3), n(4), 1.0);
    g.add_edge(n(4), n(1), 1.0);

    for res in [dijkstra(&g, &n(1), &n(3)), astar(&g, &n(1), &n(3), HeuristicMode::Euclidean)] {
        assert!((res.distance - 2.0).abs() < 1e-9);
        assert_eq!(res.path.len(), 3);
        assert_path_consistent(&g, &res);
    }
}

#[test]
fn absent_endpoint_is_a_defined_outcome() {
    let g = diamond();
    for res in [
        dijkstra(&g, &n(99), &n(4)),
        dijkstra(&g, &n(1), &n(99)),
        astar(&g, &n(99), &n(4), HeuristicMode::Euclidean),
        astar(&g, &n(1), &n(99), HeuristicMode::Euclidean),
    ] {
        assert!(res.path.is_empty());
        assert!(res.distance.is_infinite());
        assert_eq!(res.expanded, 0);
        assert!(!res.is_reachable());
    }
}

#[test]
fn start_equals_goal() {
    let mut g = WeightedGraph::new();
    g.add_node(n(7));
    for res in [dijkstra(&g, &n(7), &n(7)), astar(&g, &n(7), &n(7), HeuristicMode::Euclidean)] {
        assert_eq!(res.path, vec![n(7)]);
        assert_eq!(res.distance, 0.0);
        assert_eq!(res.expanded, 1);
    }
}

#[test]
fn unreachable_goal_exhausts_the_start_component() {
    let g = split_graph();
    for res in [dijkstra(&g, &n(1), &n(9)), astar(&g, &n(1), &n(9), HeuristicMode::Euclidean)] {
        assert!(res.path.is_empty());
        assert!(res.distance.is_infinite());
        // All three nodes reachable from 1 get settled before the frontier
        // runs dry.
        assert_eq!(res.expanded, 3);
    }
}

#[test]
fn astar_without_positions_degenerates_to_dijkstra() {
    let g = diamond();
    let d = dijkstra(&g, &n(1), &n(4));
    let a = astar(&g, &n(1), &n(4), HeuristicMode::Euclidean);
    assert_eq!(a.path, d.path);
    assert_eq!(a.distance, d.distance);
    // Zero estimate everywhere means the same keys in the same insertion
    // order: expansion counts match exactly.
    assert_eq!(a.expanded, d.expanded);
}

#[test]
fn astar_agrees_with_dijkstra_and_expands_no_more() {
    let g = grid(6);
    let start = n(0);
    let goal = n(35);
    let d = dijkstra(&g, &start, &goal);

    for mode in [HeuristicMode::Euclidean, HeuristicMode::Manhattan] {
        let a = astar(&g, &start, &goal, mode);
        assert!((a.distance - d.distance).abs() < 1e-9);
        assert_eq!(a.path.len(), d.path.len());
        assert_path_consistent(&g, &a);
        assert!(
            a.expanded <= d.expanded,
            "{mode:?}: astar expanded {} > dijkstra {}",
            a.expanded,
            d.expanded
        );
    }
}

#[test]
fn informative_heuristic_skips_the_wrong_direction() {
    // A corridor on the x axis with a dead-end tail behind the start.
    // Uniform-cost search floods the tail; the guided search never looks
    // back, because every tail node estimates farther from the goal than
    // the goal itself costs.
    let mut g = WeightedGraph::new();
    for i in -5..10 {
        g.add_edge(n(i), n(i + 1), 1.0);
    }
    for i in -5..=10 {
        g.set_position(n(i), (i as f64, 0.0));
    }

    let d = dijkstra(&g, &n(0), &n(10));
    assert_eq!(d.expanded, 16);

    for mode in [HeuristicMode::Euclidean, HeuristicMode::Manhattan] {
        let a = astar(&g, &n(0), &n(10), mode);
        assert!((a.distance - d.distance).abs() < 1e-9);
        assert_eq!(a.path, d.path);
        assert_eq!(a.expanded, 11, "{mode:?} should only walk the corridor");
        assert!(a.expanded < d.expanded);
    }
}

#[test]
fn repeated_calls_are_identical() {
    let g = grid(5);
    let first = dijkstra(&g, &n(0), &n(24));
    let second = dijkstra(&g, &n(0), &n(24));
    assert_eq!(first, second);

    let first = astar(&g, &n(0), &n(24), HeuristicMode::Euclidean);
    let second = astar(&g, &n(0), &n(24), HeuristicMode::Euclidean);
    assert_eq!(first, second);
}

#[test]
fn label_nodes_work_end_to_end() {
    let mut g = WeightedGraph::new();
    g.add_edge("depot".into(), "junction".into(), 2.5);
    g.add_edge("junction".into(), "yard".into(), 1.5);

    let res = dijkstra(&g, &"depot".into(), &"yard".into());
    assert!((res.distance - 4.0).abs() < 1e-9);
    assert_eq!(res.path.len(), 3);
}
