//! Criterion benchmarks for the N-Queens GA.
//!
//! Measures conflict counting on its own and fixed-length GA runs, so the
//! numbers do not depend on when a solution happens to appear.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use nqueens_ga::ga::{GaConfig, GaRunner};
use nqueens_ga::random::create_rng;
use nqueens_ga::Board;

fn bench_conflicts(c: &mut Criterion) {
    let mut group = c.benchmark_group("conflicts");

    for &n in &[8usize, 16, 32, 64] {
        let mut rng = create_rng(42);
        let board = Board::random(n, &mut rng);
        group.bench_with_input(BenchmarkId::from_parameter(n), &board, |b, board| {
            b.iter(|| black_box(board).conflicts())
        });
    }
    group.finish();
}

fn bench_ga_generations(c: &mut Criterion) {
    let mut group = c.benchmark_group("ga_generations");
    group.sample_size(10);

    // N = 3 has no solution, so every run evaluates exactly `gen` generations.
    for (pop, gen) in [(40usize, 50usize), (100, 50), (200, 20)] {
        let config = GaConfig::default()
            .with_board_size(3)
            .with_population_size(pop)
            .with_max_generations(gen)
            .with_seed(42);
        group.bench_with_input(
            BenchmarkId::new(format!("p{}_g{}", pop, gen), pop),
            &config,
            |b, c| {
                b.iter(|| {
                    let result = GaRunner::run(black_box(c));
                    black_box(result)
                })
            },
        );
    }
    group.finish();
}

fn bench_ga_solve(c: &mut Criterion) {
    let mut group = c.benchmark_group("ga_solve");
    group.sample_size(10);

    for &n in &[6usize, 8] {
        let config = GaConfig::default()
            .with_board_size(n)
            .with_population_size(100)
            .with_max_generations(5_000)
            .with_seed(42);
        group.bench_with_input(BenchmarkId::from_parameter(n), &config, |b, c| {
            b.iter(|| {
                let result = GaRunner::run(black_box(c));
                black_box(result)
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_conflicts, bench_ga_generations, bench_ga_solve);
criterion_main!(benches);
