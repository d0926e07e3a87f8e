//! Criterion benchmarks for staffcost_core
//!
//! Run with: cargo bench -p staffcost_core

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use staffcost_core::compare::compare;
use staffcost_core::model::templates::apply_template;
use staffcost_core::model::{Industry, Parameters};

fn bench_compare(c: &mut Criterion) {
    let params = Parameters::default();
    c.bench_function("compare_defaults", |b| {
        b.iter(|| compare(black_box(&params)))
    });

    let tech = apply_template(&params, Industry::Tech);
    c.bench_function("compare_tech_template", |b| {
        b.iter(|| compare(black_box(&tech)))
    });
}

fn bench_apply_template(c: &mut Criterion) {
    let params = Parameters::default();
    c.bench_function("apply_template", |b| {
        b.iter(|| apply_template(black_box(&params), black_box(Industry::Finance)))
    });
}

criterion_group!(benches, bench_compare, bench_apply_template);
criterion_main!(benches);
