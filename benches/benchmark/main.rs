use criterion::criterion_main;

mod common;
mod core;
mod scaling;
mod stack_ops;


#[cfg(feature = "serde")]
criterion_main!(
    core::core_benches,
    stack_ops::stack_ops_benches,
    scaling::scaling_benches,
    features::serde_benches,
);

#[cfg(not(feature = "serde"))]
criterion_main!(core::core_benches, stack_ops::stack_ops_benches, scaling::scaling_benches);
