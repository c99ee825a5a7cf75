//! Criterion benchmarks for tabu-tsp.
//!
//! Uses synthetic complete graphs so the initial tour is found without
//! backtracking and the timings reflect the search loop itself.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use tabu_tsp::construct::InitialTourFinder;
use tabu_tsp::graph::{build_graph, Graph};
use tabu_tsp::tabu::{TabuConfig, TabuRunner};

// ===========================================================================
// Synthetic complete graph with deterministic pseudo-random weights
// ===========================================================================

fn complete_graph(n: usize) -> Graph {
    let rows: Vec<Vec<u64>> = (0..n)
        .map(|i| {
            (0..n)
                .map(|j| {
                    if i == j {
                        0
                    } else {
                        let (a, b) = (i.min(j) as u64, i.max(j) as u64);
                        (a * 31 + b * 17) % 97 + 1
                    }
                })
                .collect()
        })
        .collect();
    build_graph(&rows).expect("square matrix")
}

// ===========================================================================
// Benchmarks
// ===========================================================================

fn bench_initial_tour(c: &mut Criterion) {
    let mut group = c.benchmark_group("initial_tour");

    for n in [10usize, 50, 200] {
        let graph = complete_graph(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &graph, |b, g| {
            b.iter(|| black_box(InitialTourFinder::default().find(black_box(g))))
        });
    }
    group.finish();
}

fn bench_tabu_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("tabu_search");
    group.sample_size(10);

    for (n, iters) in [(10usize, 500usize), (30, 300), (60, 200)] {
        let graph = complete_graph(n);
        let config = TabuConfig::default()
            .with_tabu_size(n / 2)
            .with_max_iterations(iters)
            .with_seed(42);
        group.bench_with_input(
            BenchmarkId::new(format!("n{}_i{}", n, iters), n),
            &(graph, config),
            |b, (g, c)| {
                b.iter(|| {
                    let result = TabuRunner::run(black_box(g), black_box(c));
                    black_box(result)
                })
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_initial_tour, bench_tabu_search);
criterion_main!(benches);
