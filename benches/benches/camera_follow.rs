// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use glam::Vec3;
use understory_bounds::{Aabb3, BoundsTree, NodeId, UnionSeed};
use understory_camera_follow::{
    CameraConstraints, CameraFollow2D, FollowConfig, OrthoCamera, Screen, smooth_damp,
};

const DT: f32 = 1.0 / 60.0;

fn level(props: u32) -> (BoundsTree, NodeId) {
    let mut tree = BoundsTree::with_seed(UnionSeed::Origin);
    let root = tree.insert(None, None);
    for p in 0..props {
        let center = Vec3::new((p % 32) as f32 * 2.0, (p / 32) as f32 * 2.0, 0.0);
        tree.insert(Some(root), Some(Aabb3::from_center_size(center, Vec3::ONE)));
    }
    (tree, root)
}

fn bench_follow(c: &mut Criterion) {
    let mut group = c.benchmark_group("understory_camera_follow");
    let screen = Screen::new(1920.0, 1080.0);

    group.bench_function("smooth_damp", |b| {
        let mut velocity = Vec3::ZERO;
        let mut at = Vec3::ZERO;
        b.iter(|| {
            let goal = black_box(Vec3::new(10.0, 5.0, 0.0));
            at = smooth_damp(at, goal, &mut velocity, 0.3, f32::INFINITY, DT);
            black_box(at)
        });
    });

    group.bench_function("update(explicit_bounds)", |b| {
        let bounds = Aabb3::from_min_max(Vec3::splat(-50.0), Vec3::splat(50.0));
        let constraints = CameraConstraints::<()>::default()
            .with_maintain_offset(true, true)
            .with_explicit_bounds(bounds);
        b.iter_batched(
            || {
                let camera = OrthoCamera::new(Vec3::new(0.0, 0.0, -10.0), 5.0);
                let config = FollowConfig::default().with_constraints(constraints.clone());
                let mut follow = CameraFollow2D::new(config);
                follow.activate(Some(&camera), Some(Vec3::ZERO));
                (follow, camera)
            },
            |(mut follow, mut camera)| {
                for i in 0..60 {
                    let target = Vec3::new(i as f32, 0.0, 0.0);
                    follow.update(Some(&mut camera), Some(target), &screen, None, DT);
                }
                black_box(camera)
            },
            BatchSize::SmallInput,
        );
    });

    for &props in &[16_u32, 256, 4_096] {
        let (tree, root) = level(props);
        group.bench_function(format!("update(bounds_tree,props={props})"), |b| {
            let constraints = CameraConstraints::default().with_bounds_source(root);
            let mut follow =
                CameraFollow2D::new(FollowConfig::default().with_constraints(constraints));
            let mut camera = OrthoCamera::new(Vec3::new(0.0, 0.0, -10.0), 5.0);
            follow.activate(Some(&camera), Some(Vec3::ZERO));
            b.iter(|| {
                follow.update(
                    Some(&mut camera),
                    Some(black_box(Vec3::new(1_000.0, 1_000.0, 0.0))),
                    &screen,
                    Some(&tree),
                    DT,
                )
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_follow);
criterion_main!(benches);
