use path_core::{
    graph::Graph,
    search::astar::AStar,
    search::dijkstra::Dijkstra,
    util::math::straight_line,
};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::prelude::*;

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);

/// Square grid with jittered coordinates, every node connected to its right
/// and lower neighbor with the euclidean distance as weight.
fn gen_grid_graph(width: usize) -> Graph<usize> {
    let mut rng = rand::thread_rng();

    let mut g = Graph::<usize>::with_capacity(width * width);

    for i in 0..width * width {
        let x = (i % width) as f64 + rng.gen_range(-0.3..0.3);
        let y = (i / width) as f64 + rng.gen_range(-0.3..0.3);
        g.add_node(i, [x, y]).unwrap();
    }

    for i in 0..width * width {
        if i % width + 1 < width {
            g.add_euclidean_edge(&i, &(i + 1)).unwrap();
        }
        if i + width < width * width {
            g.add_euclidean_edge(&i, &(i + width)).unwrap();
        }
    }

    g
}

fn criterion_benchmark(c: &mut Criterion) {
    let graphs: Vec<Graph<usize>> = [30, 100, 300].iter().map(|w| gen_grid_graph(*w)).collect();

    let mut group = c.benchmark_group("astar_vs_dijkstra");
    let mut rng = rand::thread_rng();
    for graph in graphs {
        let src = rng.gen_range(0..graph.num_nodes());
        let dst = rng.gen_range(0..graph.num_nodes());

        group.bench_with_input(
            BenchmarkId::new("Dijkstra", graph.num_nodes()),
            &graph,
            |b, g| {
                let mut dijkstra = Dijkstra::new(g);
                b.iter(|| {
                    dijkstra.search(&src, &dst).unwrap();
                });
            },
        );
        group.bench_with_input(
            BenchmarkId::new("AStar", graph.num_nodes()),
            &graph,
            |b, g| {
                let mut astar = AStar::new(g);
                b.iter(|| {
                    astar.search(&src, &dst, straight_line).unwrap();
                });
            },
        );
    }
    group.finish();
}
