use crate::common::{configure_criterion, realistic_error, stack_of_depth, Keys};
use criterion::{criterion_group, Criterion};
use erreur::Erreur;
use std::hint::black_box;

pub fn bench_merge(c: &mut Criterion) {
    let keys = Keys::new();
    let base = realistic_error(&keys);
    let cause = Erreur::create("socket closed")
        .with_name("IoError")
        .with(keys.host.provide("db-replica-02"));

    c.bench_function("stack/merge_independent", |b| b.iter(|| black_box(base.merge(black_box(&cause)))));
    c.bench_function("stack/merge_self", |b| b.iter(|| black_box(base.merge(black_box(&base)))));

    let redundant = Erreur::from_stack(stack_of_depth(&keys, 8));
    let over = redundant.with(keys.attempt.provide(99));
    c.bench_function("stack/merge_shared_suffix", |b| b.iter(|| black_box(over.merge(black_box(&redundant)))));
}

pub fn bench_dedupe(c: &mut Criterion) {
    let keys = Keys::new();
    let clean = realistic_error(&keys);
    let noisy = Erreur::from_stack(stack_of_depth(&keys, 32));

    c.bench_function("stack/dedupe_noop", |b| b.iter(|| black_box(clean.dedupe())));
    c.bench_function("stack/dedupe_32", |b| b.iter(|| black_box(noisy.dedupe())));
}

pub fn bench_debug(c: &mut Criterion) {
    let keys = Keys::new();
    let err = realistic_error(&keys);

    c.bench_function("stack/debug_dump", |b| b.iter(|| black_box(err.debug())));
}

criterion_group! {
    name = stack_ops_benches;
    config = configure_criterion();
    targets = bench_merge, bench_dedupe, bench_debug,
}
