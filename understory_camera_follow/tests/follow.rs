// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Camera follow driven by a live `BoundsTree` level.

use glam::Vec3;
use understory_bounds::{Aabb3, BoundsTree, NodeFlags, NodeId, UnionSeed};
use understory_camera_follow::{
    CameraConstraints, CameraFollow2D, FollowConfig, OrthoCamera, Screen,
};

const DT: f32 = 1.0 / 60.0;

struct Level {
    tree: BoundsTree,
    room: NodeId,
    annex: NodeId,
}

/// A 20x10 room centered on the origin and a 10x10 annex to its right, hidden at start.
fn level() -> Level {
    let mut tree = BoundsTree::with_seed(UnionSeed::FirstChild);
    let room = tree.insert(None, None);
    tree.insert(
        Some(room),
        Some(Aabb3::from_min_max(Vec3::new(-10.0, -5.0, 0.0), Vec3::new(10.0, 5.0, 1.0))),
    );
    let annex = tree.insert(
        Some(room),
        Some(Aabb3::from_min_max(Vec3::new(10.0, -5.0, 0.0), Vec3::new(20.0, 5.0, 1.0))),
    );
    tree.set_flags(annex, NodeFlags::empty());
    Level { tree, room, annex }
}

fn settle(
    follow: &mut CameraFollow2D<NodeId>,
    camera: &mut OrthoCamera,
    target: Vec3,
    level: &Level,
) {
    let screen = Screen::new(100.0, 100.0);
    for _ in 0..600 {
        follow.update(Some(&mut *camera), Some(target), &screen, Some(&level.tree), DT);
    }
}

#[test]
fn camera_stays_inside_the_visible_level() {
    let mut level = level();
    let mut camera = OrthoCamera::new(Vec3::new(0.0, 0.0, -10.0), 2.0);
    let constraints = CameraConstraints::default().with_bounds_source(level.room);
    let mut follow = CameraFollow2D::new(FollowConfig::default().with_constraints(constraints));
    assert!(follow.activate(Some(&camera), Some(Vec3::ZERO)));

    // Square screen with half-height 2: the view is 4x4.
    let player = Vec3::new(100.0, 100.0, 0.0);
    settle(&mut follow, &mut camera, player, &level);
    assert!((camera.position.x - 8.0).abs() < 1e-3);
    assert!((camera.position.y - 3.0).abs() < 1e-3);

    // Opening the annex widens the bounds on the next frame.
    level.tree.set_flags(level.annex, NodeFlags::VISIBLE);
    settle(&mut follow, &mut camera, player, &level);
    assert!((camera.position.x - 18.0).abs() < 1e-3);
    assert_eq!(camera.position.z, -10.0);
}

#[test]
fn moving_the_level_moves_the_clamp() {
    let mut level = level();
    let mut camera = OrthoCamera::new(Vec3::new(0.0, 0.0, -10.0), 2.0);
    let constraints = CameraConstraints::default()
        .with_bounds_source(level.room)
        .with_freeze(false, true);
    let mut follow = CameraFollow2D::new(FollowConfig::default().with_constraints(constraints));
    follow.activate(Some(&camera), None);

    let player = Vec3::new(-100.0, 40.0, 0.0);
    settle(&mut follow, &mut camera, player, &level);
    assert!((camera.position.x - -8.0).abs() < 1e-3);
    assert_eq!(camera.position.y, 0.0);

    level.tree.translate_subtree(level.room, Vec3::new(-30.0, 0.0, 0.0));
    settle(&mut follow, &mut camera, player, &level);
    assert!((camera.position.x - -38.0).abs() < 1e-3);
    assert_eq!(camera.position.y, 0.0);
}

#[test]
fn offset_survives_target_jumps() {
    let level = level();
    let mut camera = OrthoCamera::new(Vec3::new(1.5, -1.0, -10.0), 0.5);
    let constraints = CameraConstraints::default().with_maintain_offset(true, true);
    let mut follow = CameraFollow2D::new(FollowConfig::default().with_constraints(constraints));
    follow.activate(Some(&camera), Some(Vec3::ZERO));

    for target in [Vec3::new(3.0, 2.0, 0.0), Vec3::new(-7.0, 1.0, 0.0)] {
        settle(&mut follow, &mut camera, target, &level);
        assert!((camera.position.x - (target.x + 1.5)).abs() < 1e-3);
        assert!((camera.position.y - (target.y - 1.0)).abs() < 1e-3);
    }
}
