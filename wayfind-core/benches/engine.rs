use criterion::{black_box, criterion_group, criterion_main, Criterion};

use wayfind_core::{astar, dijkstra, HeuristicMode, NodeId, WeightedGraph};

/// `side x side` unit-weight grid with coordinates; node id = y * side + x.
fn grid(side: i64) -> WeightedGraph {
    let mut g = WeightedGraph::new();
    for y in 0..side {
        for x in 0..side {
            let id = y * side + x;
            if x + 1 < side {
                g.add_edge(NodeId::Int(id), NodeId::Int(id + 1), 1.0);
            }
            if y + 1 < side {
                g.add_edge(NodeId::Int(id), NodeId::Int(id + side), 1.0);
            }
            g.set_position(NodeId::Int(id), (x as f64, y as f64));
        }
    }
    g
}

fn bench_search(c: &mut Criterion) {
    let side = 64;
    let g = grid(side);
    let start = NodeId::Int(0);
    let goal = NodeId::Int(side * side - 1);

    let mut group = c.benchmark_group("grid_64");
    group.bench_function("dijkstra", |b| {
        b.iter(|| dijkstra(black_box(&g), &start, &goal))
    });
    group.bench_function("astar_euclidean", |b| {
        b.iter(|| astar(black_box(&g), &start, &goal, HeuristicMode::Euclidean))
    });
    group.bench_function("astar_manhattan", |b| {
        b.iter(|| astar(black_box(&g), &start, &goal, HeuristicMode::Manhattan))
    });
    group.finish();
}

criterion_group!(benches, bench_search);
criterion_main!(benches);
