//! Benchmarks for nodal curve operations.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use strata_basics::ValueAdjustment;
use strata_market::prelude::*;
use strata_math::CurveInterpolator;

fn discount_curve() -> InterpolatedNodalCurve {
    let xs: Vec<f64> = (1..=30_i32).map(|i| f64::from(i) * 0.5).collect();
    let ys = xs.iter().map(|t| (-0.035 * t).exp()).collect();
    InterpolatedNodalCurve::of("USD-Disc", xs, ys, CurveInterpolator::LogLinear).unwrap()
}

fn bench_lookup(c: &mut Criterion) {
    let curve = discount_curve();
    c.bench_function("y_value", |b| b.iter(|| curve.y_value(black_box(7.3))));
    c.bench_function("y_value_at_node", |b| b.iter(|| curve.y_value(black_box(7.5))));
    c.bench_function("y_value_parameter_sensitivity", |b| {
        b.iter(|| curve.y_value_parameter_sensitivity(black_box(7.3)));
    });
}

fn bench_shift(c: &mut Criterion) {
    let curve = discount_curve();
    let adjustments = vec![ValueAdjustment::DeltaMultiplier(0.0001); 30];
    c.bench_function("shifted_by_adjustments", |b| {
        b.iter(|| curve.shifted_by_adjustments(black_box(&adjustments)));
    });
    c.bench_function("with_node", |b| {
        b.iter(|| curve.with_node(black_box(0), 0.25, 0.999));
    });
}

criterion_group!(benches, bench_lookup, bench_shift);
criterion_main!(benches);
