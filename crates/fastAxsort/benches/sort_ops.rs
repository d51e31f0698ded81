//! Sorting benchmarks using Criterion.
//!
//! Benchmarks cover:
//! - Scalability (1K to 1M elements)
//! - Segment geometry (one wide segment vs. many narrow ones)
//! - Key patterns (uniform, nearly-sorted, heavy ties)
//! - All three operations (sort, argsort, lexsort)
//!
//! For the serial reference path, use `FASTAXSORT_BACKEND=serial cargo bench`.
//! For the parallel CPU path, use `FASTAXSORT_BACKEND=parallel cargo bench`.
//! For the GPU path (requires the `gpu` feature), use `FASTAXSORT_BACKEND=gpu cargo bench`.

use axsort::internals::primitives::backend::Backend;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use fastAxsort::prelude::*;
use rand::prelude::*;
use rand_distr::Uniform;
use std::env;
use std::hint::black_box;

// ============================================================================
// Helper Functions
// ============================================================================

fn get_config() -> (bool, Backend, &'static str) {
    match env::var("FASTAXSORT_BACKEND").ok().as_deref() {
        Some("serial") => (false, Backend::CPU, "serial"),
        Some("gpu") => (true, Backend::GPU, "gpu"),
        _ => (true, Backend::CPU, "parallel"),
    }
}

fn make_sorter() -> (ArraySorter, &'static str) {
    let (parallel, backend, label) = get_config();
    let sorter = Sorter::new()
        .backend(backend)
        .parallel(parallel)
        .build()
        .expect("failed to build sorter for benchmark");
    (sorter, label)
}

// ============================================================================
// Data Generation with Reproducible RNG
// ============================================================================

/// Uniformly distributed f32 keys.
fn generate_uniform(size: usize, seed: u64) -> Vec<f32> {
    let mut rng = StdRng::seed_from_u64(seed);
    let dist = Uniform::new(-1.0e6_f32, 1.0e6).unwrap();
    (0..size).map(|_| dist.sample(&mut rng)).collect()
}

/// Nearly-sorted keys: ascending with 1% random swaps.
fn generate_nearly_sorted(size: usize, seed: u64) -> Vec<f32> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut data: Vec<f32> = (0..size).map(|i| i as f32).collect();
    for _ in 0..size / 100 {
        let a = rng.random_range(0..size);
        let b = rng.random_range(0..size);
        data.swap(a, b);
    }
    data
}

/// Heavy-tie keys: only 16 distinct values.
fn generate_ties(size: usize, seed: u64) -> Vec<f32> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..size).map(|_| rng.random_range(0..16) as f32).collect()
}

// ============================================================================
// Benchmarks
// ============================================================================

fn bench_sort_scaling(c: &mut Criterion) {
    let (mut sorter, label) = make_sorter();
    let mut group = c.benchmark_group(format!("sort_scaling/{label}"));

    for &size in &[1_000usize, 10_000, 100_000, 1_000_000] {
        let data = generate_uniform(size, 42);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &data, |b, data| {
            b.iter(|| {
                let mut work = data.clone();
                sorter.sort(black_box(&mut work)).unwrap();
                work
            })
        });
    }
    group.finish();
}

fn bench_sort_patterns(c: &mut Criterion) {
    let (mut sorter, label) = make_sorter();
    let mut group = c.benchmark_group(format!("sort_patterns/{label}"));
    let size = 100_000;

    let cases = [
        ("uniform", generate_uniform(size, 42)),
        ("nearly_sorted", generate_nearly_sorted(size, 42)),
        ("ties", generate_ties(size, 42)),
    ];
    for (name, data) in cases {
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(name), &data, |b, data| {
            b.iter(|| {
                let mut work = data.clone();
                sorter.sort(black_box(&mut work)).unwrap();
                work
            })
        });
    }
    group.finish();
}

fn bench_segmented_sort(c: &mut Criterion) {
    let (mut sorter, label) = make_sorter();
    let mut group = c.benchmark_group(format!("sort_segments/{label}"));
    let total = 262_144;

    for &segments in &[1usize, 64, 4096] {
        let shape = Shape::new(&[segments, total / segments]).unwrap();
        let data = generate_uniform(total, 7);
        group.throughput(Throughput::Elements(total as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(segments),
            &data,
            |b, data| {
                b.iter(|| {
                    let mut work = data.clone();
                    sorter.sort_slice(black_box(&mut work), &shape).unwrap();
                    work
                })
            },
        );
    }
    group.finish();
}

fn bench_argsort(c: &mut Criterion) {
    let (mut sorter, label) = make_sorter();
    let mut group = c.benchmark_group(format!("argsort/{label}"));

    for &size in &[10_000usize, 100_000] {
        let data = generate_uniform(size, 11);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &data, |b, data| {
            b.iter(|| sorter.argsort(black_box(data)).unwrap())
        });
    }
    group.finish();
}

fn bench_lexsort(c: &mut Criterion) {
    let (mut sorter, label) = make_sorter();
    let mut group = c.benchmark_group(format!("lexsort/{label}"));
    let columns = 50_000;

    for &rows in &[1usize, 2, 4] {
        let keys: Vec<f32> = (0..rows)
            .flat_map(|r| generate_ties(columns, r as u64))
            .collect();
        group.throughput(Throughput::Elements(columns as u64));
        group.bench_with_input(BenchmarkId::from_parameter(rows), &keys, |b, keys| {
            let km = KeyMatrix::new(keys, rows, columns).unwrap();
            b.iter(|| sorter.lexsort(black_box(&km)).unwrap())
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_sort_scaling,
    bench_sort_patterns,
    bench_segmented_sort,
    bench_argsort,
    bench_lexsort
);
criterion_main!(benches);
