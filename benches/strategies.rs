// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Criterion benchmarks for the Two Sum strategies.
//!
//! Run with `cargo bench --features bench`.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use pair_sum::harness::Workload;
use pair_sum::{PairFinder, Strategy};
use std::hint::black_box;

const SIZES: &[usize] = &[100, 1_000, 4_000];

fn bench_strategies(c: &mut Criterion) {
    let mut group = c.benchmark_group("two_sum");
    for &size in SIZES {
        let (nums, target) = Workload::Ascending
            .generate(size, 0)
            .expect("benchmark sizes are at least two");
        for strategy in Strategy::all() {
            group.bench_with_input(BenchmarkId::new(strategy.name(), size), &nums, |b, nums| {
                b.iter(|| strategy.find_pair(black_box(nums), black_box(target)))
            });
        }
    }
    group.finish();
}

fn bench_shuffled(c: &mut Criterion) {
    let (nums, target) = Workload::Shuffled
        .generate(10_000, 42)
        .expect("benchmark sizes are at least two");
    let mut group = c.benchmark_group("two_sum_shuffled");
    for strategy in [Strategy::HashIndex, Strategy::TwoPointer] {
        group.bench_function(strategy.name(), |b| {
            b.iter(|| strategy.find_pair(black_box(&nums), black_box(target)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_strategies, bench_shuffled);
criterion_main!(benches);
