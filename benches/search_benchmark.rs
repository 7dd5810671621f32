//! Benchmarks for the knight-tour search driver.
//!
//! The exhaustive group enumerates the full 4x4 state space under both
//! frontier disciplines; the first-tour benchmark measures the depth-first
//! dive to the first complete 5x5 tour.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use knights_tour::searcher::{FrontierDiscipline, SearchStrategy, Searcher, SilentRenderer};

fn exhaustive_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("exhaustive_4x4");
    group.sample_size(10);

    for &order in &[FrontierDiscipline::Fifo, FrontierDiscipline::Lifo] {
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{:?}", order)),
            &order,
            |b, &order| {
                b.iter(|| {
                    let mut searcher =
                        Searcher::new(black_box(4), SearchStrategy::exhaustive(order));
                    searcher.run(&mut SilentRenderer)
                })
            },
        );
    }

    group.finish();
}

fn first_tour_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("first_tour_5x5");
    group.sample_size(10);

    group.bench_function("lifo", |b| {
        b.iter(|| {
            let mut searcher = Searcher::new(black_box(5), SearchStrategy::first_tour());
            searcher.run(&mut SilentRenderer)
        })
    });

    group.finish();
}

criterion_group!(benches, exhaustive_benchmark, first_tour_benchmark);
criterion_main!(benches);
