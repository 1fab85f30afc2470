// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use glam::Vec3;
use kurbo::Point;
use understory_pointer::{
    FrameInput, InteractionLayer, InteractionPhase, PointerHit, PointerHitProvider, PointerId,
    Ray, ScreenRay, Touch, Unifier,
};

struct Ortho;

impl ScreenRay for Ortho {
    #[expect(clippy::cast_possible_truncation, reason = "screen coordinates fit in f32")]
    fn screen_point_to_ray(&self, p: Point) -> Ray {
        Ray::new(Vec3::new(p.x as f32, p.y as f32, -1.0), Vec3::Z)
    }
}

/// A row of 64-pixel-wide buttons along x.
struct Buttons;

impl PointerHitProvider<u32> for Buttons {
    #[expect(clippy::cast_possible_truncation, reason = "button index is small and non-negative")]
    fn cast(&self, ray: Ray, _target: &u32) -> Option<PointerHit<u32>> {
        (ray.origin.x >= 0.0).then(|| PointerHit {
            point: ray.origin,
            normal: Vec3::NEG_Z,
            target: (ray.origin.x / 64.0) as u32,
        })
    }
}

/// `n` touches; every fourth one began this frame.
fn touch_frame(n: i32) -> FrameInput {
    (0..n).fold(FrameInput::new().with_touch_support(true), |f, i| {
        let phase = if i % 4 == 0 {
            InteractionPhase::Began
        } else {
            InteractionPhase::Stationary
        };
        f.with_touch(Touch::new(i, (f64::from(i) * 16.0, 8.0), phase))
    })
}

fn bench_pointer(c: &mut Criterion) {
    let mut group = c.benchmark_group("understory_pointer");

    let mouse = FrameInput::new()
        .with_mouse_position((100.0, 8.0))
        .with_mouse_phase(InteractionPhase::Began);
    group.bench_function("begin(mouse)", |b| {
        let layer = InteractionLayer::new(&mouse, &Buttons);
        b.iter(|| black_box(layer.query_interaction_begin(black_box(&1_u32), &Ortho)));
    });

    for &n in &[1_i32, 5, 10] {
        let frame = touch_frame(n);
        group.bench_function(format!("begin(touches={n})"), |b| {
            let layer = InteractionLayer::new(&frame, &Buttons);
            b.iter(|| black_box(layer.query_interaction_begin(black_box(&0_u32), &Ortho)));
        });
        group.bench_function(format!("held(touches={n})"), |b| {
            let pointer = Unifier::new(&frame);
            b.iter(|| black_box(pointer.is_button_held(black_box(PointerId(n - 1)))));
        });
        group.bench_function(format!("samples(touches={n})"), |b| {
            let pointer = Unifier::new(&frame);
            b.iter(|| black_box(pointer.samples()));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_pointer);
criterion_main!(benches);
