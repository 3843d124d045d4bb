//! # Dot Product Benchmarks
//!
//! Measures the textbook O(R × L × C) product for square matrices of growing
//! size, per result discipline and through a transposed view.
//!
//! Run: `cargo bench --bench dot_bench`

use criterion::{black_box, criterion_group, criterion_main, Criterion, BenchmarkId, Throughput};
use cmx_core::prelude::*;

fn square(n: usize) -> Grid {
    (0..n)
        .map(|i| {
            (0..n)
                .map(|j| C64::new((i % 7) as f64 - 3.0, (j % 5) as f64 - 2.0))
                .collect()
        })
        .collect()
}

/// Benchmark dot product per discipline
fn bench_dot_square(c: &mut Criterion) {
    let mut group = c.benchmark_group("dot_square");

    for size in [4, 16, 64].iter() {
        let grid = square(*size);
        let imm = ImmutableMatrix::new(grid.clone()).unwrap();
        let mat = MutableMatrix::new(grid).unwrap();

        group.throughput(Throughput::Elements((size * size * size) as u64));

        group.bench_with_input(
            BenchmarkId::new("immutable", size),
            &imm,
            |b, m| {
                b.iter(|| black_box(m.dot(m).unwrap()))
            }
        );

        group.bench_with_input(
            BenchmarkId::new("mutable", size),
            &mat,
            |b, m| {
                b.iter(|| black_box(m.dot(m).unwrap()))
            }
        );
    }

    group.finish();
}

/// Benchmark dot product through a transposed view
fn bench_dot_transposed(c: &mut Criterion) {
    let mut group = c.benchmark_group("dot_transposed");

    for size in [16, 64].iter() {
        let imm = ImmutableMatrix::new(square(*size)).unwrap();
        let view = imm.transpose();

        group.bench_with_input(
            BenchmarkId::new("view_times_plain", size),
            &view,
            |b, v| {
                b.iter(|| black_box(v.dot(&imm).unwrap()))
            }
        );

        group.bench_with_input(
            BenchmarkId::new("materialized_times_plain", size),
            &view,
            |b, v| {
                b.iter(|| black_box(v.immutable().dot(&imm).unwrap()))
            }
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_dot_square,
    bench_dot_transposed,
);

criterion_main!(benches);
