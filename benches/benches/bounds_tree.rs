// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use glam::Vec3;
use understory_bounds::{Aabb3, BoundsProvider, BoundsTree, NodeFlags, NodeId, UnionSeed};

/// A level of `rooms` rooms, each holding `props` unit cubes on a grid.
fn build_level(rooms: u32, props: u32, seed: UnionSeed) -> (BoundsTree, NodeId) {
    let mut tree = BoundsTree::with_seed(seed);
    let root = tree.insert(None, None);
    for r in 0..rooms {
        let room = tree.insert(Some(root), None);
        for p in 0..props {
            let center = Vec3::new((r * 16 + p % 16) as f32, (p / 16) as f32, 0.0);
            tree.insert(Some(room), Some(Aabb3::from_center_size(center, Vec3::ONE)));
        }
        if r % 4 == 3 {
            tree.set_flags(room, NodeFlags::empty());
        }
    }
    (tree, root)
}

fn bench_bounds(c: &mut Criterion) {
    let mut group = c.benchmark_group("understory_bounds");

    for &(rooms, props) in &[(4_u32, 16_u32), (16, 64), (64, 256)] {
        for seed in [UnionSeed::Origin, UnionSeed::FirstChild] {
            let (tree, root) = build_level(rooms, props, seed);
            group.bench_function(
                format!("compute_bounds(rooms={rooms},props={props},seed={seed:?})"),
                |b| b.iter(|| black_box(tree.compute_bounds(black_box(&root)))),
            );
        }
    }

    let (mut tree, root) = build_level(16, 64, UnionSeed::FirstChild);
    group.bench_function("translate_then_compute(rooms=16,props=64)", |b| {
        b.iter(|| {
            tree.translate_subtree(root, Vec3::new(0.01, 0.0, 0.0));
            black_box(tree.compute_bounds(&root))
        });
    });

    group.finish();
}

criterion_group!(benches, bench_bounds);
criterion_main!(benches);
