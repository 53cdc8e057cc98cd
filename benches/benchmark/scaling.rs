use crate::common::{configure_criterion, stack_of_depth, Keys};
use criterion::{criterion_group, BenchmarkId, Criterion};
use erreur::Key;
use std::hint::black_box;

pub fn bench_lookup_depth(c: &mut Criterion) {
    let keys = Keys::new();
    let absent: Key<u8> = Key::new("Absent");
    let mut group = c.benchmark_group("scaling/lookup_miss");

    for depth in [4, 16, 64, 256] {
        let stack = stack_of_depth(&keys, depth);
        group.bench_with_input(BenchmarkId::from_parameter(depth), &stack, |b, stack| {
            b.iter(|| black_box(stack.get(black_box(&absent))))
        });
    }
    group.finish();
}

pub fn bench_dedupe_depth(c: &mut Criterion) {
    let keys = Keys::new();
    let mut group = c.benchmark_group("scaling/dedupe");

    for depth in [4, 16, 64, 256] {
        let stack = stack_of_depth(&keys, depth);
        group.bench_with_input(BenchmarkId::from_parameter(depth), &stack, |b, stack| {
            b.iter(|| black_box(stack.dedupe()))
        });
    }
    group.finish();
}

pub fn bench_merge_depth(c: &mut Criterion) {
    let keys = Keys::new();
    let mut group = c.benchmark_group("scaling/merge");

    for depth in [4, 16, 64] {
        let top = stack_of_depth(&keys, depth);
        let base = stack_of_depth(&keys, depth);
        group.bench_with_input(BenchmarkId::from_parameter(depth), &(top, base), |b, (top, base)| {
            b.iter(|| black_box(top.merge(base)))
        });
    }
    group.finish();
}

criterion_group! {
    name = scaling_benches;
    config = configure_criterion();
    targets = bench_lookup_depth, bench_dedupe_depth, bench_merge_depth,
}
