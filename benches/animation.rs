// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for animation curve sampling.
//!
//! The spring and easing curves are sampled once per rendered frame while a
//! transition is in flight, so they sit on the 60 Hz tick path.

use criterion::{criterion_group, criterion_main, Criterion};
use iced_snackbar::snackbar::{EasingCurve, SpringCurve};
use std::hint::black_box;

/// Benchmark spring-curve sampling across a full transition.
fn bench_spring_sample(c: &mut Criterion) {
    let mut group = c.benchmark_group("animation");

    let spring = SpringCurve::new(0.8, 1.0);

    group.bench_function("spring_sample_sweep", |b| {
        b.iter(|| {
            for i in 0..=100 {
                black_box(spring.sample(i as f32 / 100.0));
            }
        });
    });

    let bouncy = SpringCurve::new(0.2, 2.0);
    group.bench_function("spring_sample_underdamped", |b| {
        b.iter(|| {
            for i in 0..=100 {
                black_box(bouncy.sample(i as f32 / 100.0));
            }
        });
    });

    group.finish();
}

/// Benchmark easing-curve evaluation.
fn bench_easing(c: &mut Criterion) {
    let mut group = c.benchmark_group("animation");

    let curves = [
        EasingCurve::Linear,
        EasingCurve::EaseIn,
        EasingCurve::EaseOut,
        EasingCurve::EaseInOut,
    ];

    group.bench_function("easing_sweep", |b| {
        b.iter(|| {
            for curve in curves {
                for i in 0..=100 {
                    black_box(curve.apply(i as f32 / 100.0));
                }
            }
        });
    });

    group.finish();
}

criterion_group!(benches, bench_spring_sample, bench_easing);
criterion_main!(benches);
