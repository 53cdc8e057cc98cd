use crate::common::{configure_criterion, realistic_error, Keys};
use criterion::{criterion_group, Criterion};
use erreur::{Erreur, Stack};
use std::hint::black_box;

pub fn bench_error_creation(c: &mut Criterion) {
    let keys = Keys::new();

    c.bench_function("core/error_creation", |b| {
        b.iter(|| black_box(realistic_error(black_box(&keys))))
    });

    c.bench_function("core/error_create_message_only", |b| {
        b.iter(|| black_box(Erreur::create(black_box("boom"))))
    });
}

pub fn bench_push(c: &mut Criterion) {
    let keys = Keys::new();
    let base = Stack::new().push(keys.user_id.provide(1));

    c.bench_function("core/push", |b| b.iter(|| black_box(base.push(keys.attempt.provide(black_box(2))))));
}

pub fn bench_lookup(c: &mut Criterion) {
    let keys = Keys::new();
    let err = realistic_error(&keys);

    c.bench_function("core/get_hit", |b| b.iter(|| black_box(err.get(black_box(&keys.host)))));
    c.bench_function("core/name_message", |b| {
        b.iter(|| {
            let err = black_box(&err);
            black_box((err.name(), err.message()))
        })
    });
}

pub fn bench_clone_and_display(c: &mut Criterion) {
    let keys = Keys::new();
    let err = realistic_error(&keys);

    c.bench_function("core/error_clone", |b| b.iter(|| black_box(err.clone())));
    c.bench_function("core/display", |b| b.iter(|| black_box(err.to_string())));
    c.bench_function("core/display_pretty", |b| b.iter(|| black_box(format!("{:#}", err))));
}

criterion_group! {
    name = core_benches;
    config = configure_criterion();
    targets =
        bench_error_creation,
        bench_push,
        bench_lookup,
        bench_clone_and_display,
}
