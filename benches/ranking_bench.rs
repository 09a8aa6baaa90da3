//! Criterion benchmarks for u-ranking.
//!
//! Uses synthetic populations (uniform fitness, half-feasible violations)
//! to measure pure ranking overhead independent of any domain.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use u_ranking::penalty::penalized_fitness;
use u_ranking::ranking::{stochastic_ranking, DEFAULT_PR};

/// A population where roughly half the individuals are feasible.
fn synthetic_population(n: usize, seed: u64) -> (Vec<f64>, Vec<f64>) {
    let mut rng = StdRng::seed_from_u64(seed);
    let fitness: Vec<f64> = (0..n).map(|_| rng.random_range(0.0..100.0)).collect();
    let violation: Vec<f64> = (0..n)
        .map(|_| {
            if rng.random_bool(0.5) {
                0.0
            } else {
                rng.random_range(0.0..10.0)
            }
        })
        .collect();
    (fitness, violation)
}

fn bench_stochastic_ranking(c: &mut Criterion) {
    let mut group = c.benchmark_group("stochastic_ranking");

    for &n in &[64_usize, 256, 1024] {
        let (fitness, violation) = synthetic_population(n, 42);

        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, _| {
            b.iter(|| {
                let mut rng = StdRng::seed_from_u64(7);
                stochastic_ranking(
                    black_box(&fitness),
                    black_box(&violation),
                    DEFAULT_PR,
                    None,
                    &mut rng,
                )
            });
        });
    }

    group.finish();
}

fn bench_penalized_fitness(c: &mut Criterion) {
    let mut group = c.benchmark_group("penalized_fitness");

    for &n in &[256_usize, 4096] {
        let (fitness, violation) = synthetic_population(n, 42);

        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, _| {
            b.iter(|| penalized_fitness(black_box(&fitness), black_box(&violation), None));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_stochastic_ranking, bench_penalized_fitness);
criterion_main!(benches);
