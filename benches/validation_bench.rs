//! Validation throughput, single design and batch

use chassis_audit::core::config::ValidationOptions;
use chassis_audit::validation::{validate, validate_all};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

#[path = "../tests/common/mod.rs"]
mod common;

fn bench_single(c: &mut Criterion) {
    let options = ValidationOptions::default();
    let mut group = c.benchmark_group("validate");
    for design in common::all() {
        group.bench_function(design.chassis.as_str(), |b| {
            b.iter(|| validate(black_box(&design), &options))
        });
    }
    group.finish();
}

fn bench_batch(c: &mut Criterion) {
    let options = ValidationOptions::default();
    let designs: Vec<_> = (0..200).flat_map(|_| common::all()).collect();
    c.bench_function("validate_all_1200", |b| {
        b.iter(|| validate_all(black_box(&designs), &options))
    });
}

criterion_group!(benches, bench_single, bench_batch);
criterion_main!(benches);
