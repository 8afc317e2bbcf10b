//! Benchmarks for windowing and the uniqueness checks
//!
//! Run with: `cargo bench --bench sequence`

use auxiliary_core::seq::{
    IteratorExt, all_unique, all_unique_eq, all_unique_ord, chunk, rotate, window,
};
use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

fn bench_window(c: &mut Criterion) {
    let mut group = c.benchmark_group("window");

    for size in [16, 256, 4096] {
        let values: Vec<u32> = (0..size).collect();

        group.bench_with_input(BenchmarkId::new("borrowed", size), &values, |b, values| {
            b.iter(|| {
                let windows = window(values, black_box(4), 1, false).unwrap();
                black_box(windows.iter().map(|w| w[0]).sum::<u32>());
            });
        });

        group.bench_with_input(BenchmarkId::new("materialized", size), &size, |b, &size| {
            b.iter(|| {
                let windows = window((0..size).materialize(), black_box(4), 1, false).unwrap();
                black_box(windows.iter().map(|w| w[0]).sum::<u32>());
            });
        });

        group.bench_with_input(BenchmarkId::new("chunk", size), &values, |b, values| {
            b.iter(|| {
                let chunks = chunk(values, black_box(8)).unwrap();
                black_box(chunks.len());
            });
        });
    }

    group.finish();
}

fn bench_rotate(c: &mut Criterion) {
    let mut group = c.benchmark_group("rotate");

    for size in [16, 4096] {
        let values: Vec<u32> = (0..size).collect();
        group.bench_with_input(BenchmarkId::from_parameter(size), &values, |b, values| {
            b.iter(|| black_box(rotate(values, black_box(-3))));
        });
    }

    group.finish();
}

fn bench_all_unique(c: &mut Criterion) {
    let mut group = c.benchmark_group("all_unique");

    // The pairwise check is quadratic, so it stops at the middle size.
    for size in [16, 256, 4096] {
        let values: Vec<u64> = (0..size).collect();

        group.bench_with_input(BenchmarkId::new("hash", size), &values, |b, values| {
            b.iter(|| black_box(all_unique(values)));
        });

        group.bench_with_input(BenchmarkId::new("ord", size), &values, |b, values| {
            b.iter(|| black_box(all_unique_ord(values)));
        });

        if size <= 256 {
            group.bench_with_input(BenchmarkId::new("eq", size), &values, |b, values| {
                b.iter(|| black_box(all_unique_eq(values)));
            });
        }
    }

    group.finish();
}

criterion_group!(benches, bench_window, bench_rotate, bench_all_unique);
criterion_main!(benches);
