// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::time::Duration;

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use kurbo::Vec2;
use understory_motion::interpolate::Interpolation;
use understory_motion::spring::SpringConfig;
use understory_motion::value::{Animated2D, AnimatedXY};

fn bench_spring(c: &mut Criterion) {
    let mut group = c.benchmark_group("spring");
    for &ms in &[8u64, 16, 33] {
        let dt = Duration::from_millis(ms);
        group.bench_function(format!("settle_dt{}ms", ms), |b| {
            b.iter_batched(
                || {
                    let mut v = AnimatedXY::new(Vec2::new(120.0, 80.0));
                    v.spring_to(Vec2::ZERO, SpringConfig::default());
                    v
                },
                |mut v| {
                    while v.advance(dt).is_none() {}
                    black_box(v.value());
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

fn bench_interpolate(c: &mut Criterion) {
    let rotation = Interpolation::new([-600.0, 0.0, 600.0], [-120.0, 0.0, 120.0]).unwrap();
    c.bench_function("rotation_sample", |b| {
        b.iter(|| {
            let mut acc = 0.0;
            for i in -100..100 {
                acc += rotation.sample(black_box(i as f64 * 9.0));
            }
            black_box(acc)
        })
    });
}

criterion_group!(benches, bench_spring, bench_interpolate);
criterion_main!(benches);
