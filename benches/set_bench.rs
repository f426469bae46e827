//! Benchmark for Set vs standard HashSet.
//!
//! Compares refset's `Set` against Rust's standard `HashSet` for common
//! operations, and measures the cost of mixed `Value` members.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use refset::{Set, Value};
use std::collections::HashSet;
use std::hint::black_box;

// =============================================================================
// add Benchmark
// =============================================================================

fn benchmark_add(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("add");

    for size in [1_000, 10_000, 100_000] {
        group.bench_with_input(
            BenchmarkId::new("Set", size),
            &size,
            |bencher, &size| {
                bencher.iter(|| {
                    let mut set: Set<i64> = Set::new();
                    for index in 0..size {
                        set.add(black_box(index));
                    }
                    black_box(set)
                });
            },
        );

        group.bench_with_input(
            BenchmarkId::new("HashSet", size),
            &size,
            |bencher, &size| {
                bencher.iter(|| {
                    let mut set = HashSet::new();
                    for index in 0..size {
                        set.insert(black_box(index));
                    }
                    black_box(set)
                });
            },
        );

        // Alternating domains: numbers and strings
        group.bench_with_input(
            BenchmarkId::new("Set<Value>", size),
            &size,
            |bencher, &size| {
                bencher.iter(|| {
                    let mut set: Set<Value> = Set::new();
                    for index in 0..size {
                        if index % 2 == 0 {
                            set.add(black_box(index));
                        } else {
                            set.add(black_box(index.to_string()));
                        }
                    }
                    black_box(set)
                });
            },
        );
    }

    group.finish();
}

// =============================================================================
// contains Benchmark
// =============================================================================

fn benchmark_contains(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("contains");

    for size in [1_000, 10_000, 100_000] {
        let set: Set<i64> = (0..size).collect();
        let standard: HashSet<i64> = (0..size).collect();

        group.bench_with_input(
            BenchmarkId::new("Set", size),
            &size,
            |bencher, &size| {
                bencher.iter(|| {
                    for index in 0..size {
                        black_box(set.contains(&black_box(index)));
                    }
                });
            },
        );

        group.bench_with_input(
            BenchmarkId::new("HashSet", size),
            &size,
            |bencher, &size| {
                bencher.iter(|| {
                    for index in 0..size {
                        black_box(standard.contains(&black_box(index)));
                    }
                });
            },
        );
    }

    group.finish();
}

// =============================================================================
// remove Benchmark
// =============================================================================

fn benchmark_remove(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("remove");

    for size in [1_000, 10_000] {
        let set: Set<i64> = (0..size).collect();

        group.bench_with_input(
            BenchmarkId::new("Set", size),
            &size,
            |bencher, &size| {
                bencher.iter(|| {
                    let mut set = set.copy();
                    for index in (0..size).step_by(10) {
                        set.remove(&black_box(index));
                    }
                    black_box(set)
                });
            },
        );
    }

    group.finish();
}

// =============================================================================
// Binary Operation Benchmarks
// =============================================================================

fn benchmark_binary_operations(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("binary_operations");

    for size in [1_000, 10_000] {
        let left: Set<i64> = (0..size).collect();
        let right: Set<i64> = (size / 2..size + size / 2).collect();

        group.bench_with_input(
            BenchmarkId::new("union", size),
            &size,
            |bencher, _| {
                bencher.iter(|| black_box(left.union(black_box(&right))));
            },
        );

        group.bench_with_input(
            BenchmarkId::new("intersection", size),
            &size,
            |bencher, _| {
                bencher.iter(|| black_box(left.intersection(black_box(&right))));
            },
        );

        group.bench_with_input(
            BenchmarkId::new("difference", size),
            &size,
            |bencher, _| {
                bencher.iter(|| black_box(left.difference(black_box(&right))));
            },
        );

        group.bench_with_input(
            BenchmarkId::new("symmetric_difference", size),
            &size,
            |bencher, _| {
                bencher.iter(|| black_box(left.symmetric_difference(black_box(&right))));
            },
        );

        group.bench_with_input(
            BenchmarkId::new("is_subset", size),
            &size,
            |bencher, _| {
                bencher.iter(|| black_box(left.is_subset(black_box(&right))));
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_add,
    benchmark_contains,
    benchmark_remove,
    benchmark_binary_operations
);
criterion_main!(benches);
