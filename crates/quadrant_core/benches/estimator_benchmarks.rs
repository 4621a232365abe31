//! Criterion benchmarks for the estimation engine.
//!
//! Benchmarks cover:
//! - Raw xoshiro256** draw throughput (u64 and double)
//! - The quarter-circle sampling kernel
//! - Full estimation runs across worker counts

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use quadrant_core::{count_hits, EstimatorConfig, PiEstimator, Xoshiro256StarStar};
use rand::{RngCore, SeedableRng};

/// Benchmark raw generator throughput (foundation for the sampling kernel).
fn bench_rng_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("rng_generation");

    for n_draws in [1_000u64, 10_000, 100_000] {
        group.throughput(Throughput::Elements(n_draws));
        group.bench_with_input(BenchmarkId::new("next_u64", n_draws), &n_draws, |b, &n| {
            let mut rng = Xoshiro256StarStar::seed_from_u64(42);
            b.iter(|| {
                let mut acc = 0u64;
                for _ in 0..n {
                    acc = acc.wrapping_add(rng.next_u64());
                }
                black_box(acc)
            });
        });

        group.bench_with_input(
            BenchmarkId::new("next_double", n_draws),
            &n_draws,
            |b, &n| {
                let mut rng = Xoshiro256StarStar::seed_from_u64(42);
                b.iter(|| {
                    let mut acc = 0.0f64;
                    for _ in 0..n {
                        acc += rng.next_double();
                    }
                    black_box(acc)
                });
            },
        );
    }

    group.finish();
}

/// Benchmark the sampling kernel at increasing iteration counts.
fn bench_sampling_kernel(c: &mut Criterion) {
    let mut group = c.benchmark_group("sampling_kernel");

    for iterations in [10_000u64, 100_000, 1_000_000] {
        group.throughput(Throughput::Elements(iterations));
        group.bench_with_input(
            BenchmarkId::new("count_hits", iterations),
            &iterations,
            |b, &n| {
                b.iter(|| count_hits(black_box(n), black_box(12345)));
            },
        );
    }

    group.finish();
}

/// Benchmark full estimation runs across worker counts.
fn bench_estimation(c: &mut Criterion) {
    let mut group = c.benchmark_group("estimation");
    group.sample_size(20);

    let iterations = 1_000_000u64;
    group.throughput(Throughput::Elements(iterations));

    for num_workers in [1u32, 2, 4, 8] {
        group.bench_with_input(
            BenchmarkId::new("parallel", num_workers),
            &num_workers,
            |b, &workers| {
                let config = EstimatorConfig::builder()
                    .total_iterations(iterations)
                    .num_workers(workers)
                    .base_seed(12345)
                    .build()
                    .unwrap();
                let estimator = PiEstimator::new(config).unwrap();
                b.iter(|| estimator.estimate().unwrap());
            },
        );
    }

    group.bench_function("sequential", |b| {
        let config = EstimatorConfig::builder()
            .total_iterations(iterations)
            .num_workers(1)
            .base_seed(12345)
            .build()
            .unwrap();
        let estimator = PiEstimator::new(config).unwrap();
        b.iter(|| estimator.estimate_sequential());
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_rng_generation,
    bench_sampling_kernel,
    bench_estimation
);
criterion_main!(benches);
