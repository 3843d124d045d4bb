//! # Discipline Benchmarks
//!
//! Compares copy-on-write and in-place storage for the changing operations.
//! Immutable `set` copies one row; mutable `set` writes through.
//!
//! Run: `cargo bench --bench discipline_bench`

use criterion::{black_box, criterion_group, criterion_main, Criterion, BenchmarkId};
use cmx_core::prelude::*;

fn filled(n: usize) -> Grid {
    vec![vec![C64::new(1.0, -1.0); n]; n]
}

/// Benchmark single-element writes
fn bench_set(c: &mut Criterion) {
    let mut group = c.benchmark_group("set");

    for size in [16, 128, 512].iter() {
        let imm = ImmutableMatrix::new(filled(*size)).unwrap();
        let mat = MutableMatrix::new(filled(*size)).unwrap();
        let last = size - 1;

        group.bench_with_input(BenchmarkId::new("immutable", size), &imm, |b, m| {
            b.iter(|| black_box(m.set(C64::new(2.0, 2.0), last, last).unwrap()))
        });

        group.bench_with_input(BenchmarkId::new("mutable", size), &mat, |b, m| {
            b.iter(|| black_box(m.set(C64::new(2.0, 2.0), last, last).unwrap()))
        });
    }

    group.finish();
}

/// Benchmark whole-matrix operations
fn bench_whole(c: &mut Criterion) {
    let mut group = c.benchmark_group("whole");

    let imm = ImmutableMatrix::new(filled(128)).unwrap();
    let mat = MutableMatrix::new(filled(128)).unwrap();

    group.bench_function("immutable_scale", |b| {
        b.iter(|| black_box(imm.scale(C64::new(1.0, 0.0))))
    });

    group.bench_function("mutable_scale", |b| {
        b.iter(|| black_box(mat.scale(C64::new(1.0, 0.0))))
    });

    group.bench_function("immutable_add", |b| {
        b.iter(|| black_box(imm.add(&imm).unwrap()))
    });

    group.bench_function("mutable_to_immutable", |b| {
        b.iter(|| black_box(mat.immutable()))
    });

    group.bench_function("transpose_view", |b| {
        b.iter(|| black_box(imm.transpose()))
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_set,
    bench_whole,
);

criterion_main!(benches);
