use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use lazy_sssp::graph::generators::{generate_grid, generate_random};
use lazy_sssp::{Dijkstra, ShortestPathAlgorithm};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn bench_random_graphs(c: &mut Criterion) {
    let mut group = c.benchmark_group("dijkstra_random");
    let dijkstra = Dijkstra::new();

    for &size in &[1_000usize, 10_000, 50_000] {
        let mut rng = StdRng::seed_from_u64(size as u64);
        let graph = generate_random(size, 2.0, 100.0, &mut rng);
        group.bench_with_input(BenchmarkId::from_parameter(size), &graph, |b, graph| {
            b.iter(|| dijkstra.compute_shortest_paths(graph, black_box(&0)).unwrap())
        });
    }
    group.finish();
}

fn bench_grid(c: &mut Criterion) {
    let graph = generate_grid(100, 100);
    let dijkstra = Dijkstra::new();
    c.bench_function("dijkstra_grid_100x100", |b| {
        b.iter(|| dijkstra.compute_shortest_paths(&graph, black_box(&0)).unwrap())
    });
}

criterion_group!(benches, bench_random_graphs, bench_grid);
criterion_main!(benches);
