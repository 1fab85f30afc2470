// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The bounds provider contract and the child-union it is built on.

use crate::Aabb3;

/// Where a child union starts accumulating from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum UnionSeed {
    /// Seed the union with the degenerate box at the origin.
    ///
    /// The result always contains the world origin, even when every child
    /// lies on one side of it. This is the historical behavior, kept as the
    /// default so existing level layouts clamp the same way.
    #[default]
    Origin,
    /// Seed the union with the first child's own bounds.
    ///
    /// The result is the tight union of the children. An empty child set
    /// still yields [`Aabb3::ZERO`].
    FirstChild,
}

/// Unions `children` componentwise, starting from `seed`.
///
/// Returns [`Aabb3::ZERO`] when `children` is empty, for either seed.
///
/// ```
/// use glam::Vec3;
/// use understory_bounds::{Aabb3, UnionSeed, union_bounds};
///
/// let right = [Aabb3::from_center_size(Vec3::new(5.0, 0.0, 0.0), Vec3::ONE)];
///
/// let seeded = union_bounds(right, UnionSeed::Origin);
/// assert_eq!(seeded.min, Vec3::new(0.0, -0.5, -0.5));
///
/// let tight = union_bounds(right, UnionSeed::FirstChild);
/// assert_eq!(tight.min, Vec3::new(4.5, -0.5, -0.5));
/// ```
#[must_use]
pub fn union_bounds<I>(children: I, seed: UnionSeed) -> Aabb3
where
    I: IntoIterator<Item = Aabb3>,
{
    let mut children = children.into_iter();
    let first = match seed {
        UnionSeed::Origin => Aabb3::ZERO,
        UnionSeed::FirstChild => match children.next() {
            Some(first) => first,
            None => return Aabb3::ZERO,
        },
    };
    children.fold(first, Aabb3::union)
}

/// Computes a bounding volume enclosing the visible content under an anchor.
///
/// Implementations must be pure: no side effects, and repeated calls with no
/// scene change return identical results. An anchor without renderable
/// content yields [`Aabb3::ZERO`] rather than an error.
///
/// Closures of the shape `Fn(&A) -> Aabb3` implement this trait, which is
/// convenient for hosts that already have a bounds query on hand.
pub trait BoundsProvider<A: ?Sized> {
    /// Returns the bounds of everything visible under `anchor`.
    fn compute_bounds(&self, anchor: &A) -> Aabb3;
}

impl<A: ?Sized, F> BoundsProvider<A> for F
where
    F: Fn(&A) -> Aabb3,
{
    fn compute_bounds(&self, anchor: &A) -> Aabb3 {
        self(anchor)
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use glam::Vec3;

    use super::{BoundsProvider, UnionSeed, union_bounds};
    use crate::Aabb3;

    fn unit_cube(center: Vec3) -> Aabb3 {
        Aabb3::from_center_size(center, Vec3::ONE)
    }

    #[test]
    fn empty_union_is_degenerate_origin_for_both_seeds() {
        assert_eq!(union_bounds(Vec::new(), UnionSeed::Origin), Aabb3::ZERO);
        assert_eq!(union_bounds(Vec::new(), UnionSeed::FirstChild), Aabb3::ZERO);
    }

    #[test]
    fn three_cubes_match_reference_layout() {
        let children = [
            unit_cube(Vec3::new(0.0, 0.0, -2.0)),
            unit_cube(Vec3::new(-2.0, 0.0, 0.0)),
            unit_cube(Vec3::new(1.0, 0.0, 0.0)),
        ];
        for seed in [UnionSeed::Origin, UnionSeed::FirstChild] {
            let b = union_bounds(children, seed);
            assert_eq!(b.min, Vec3::new(-2.5, -0.5, -2.5));
            assert_eq!(b.max, Vec3::new(1.5, 0.5, 0.5));
            assert_eq!(b.center(), Vec3::new(-0.5, 0.0, -1.0));
            assert_eq!(b.size(), Vec3::new(4.0, 1.0, 3.0));
        }
    }

    #[test]
    fn origin_seed_stretches_one_sided_children_to_origin() {
        let children = [
            unit_cube(Vec3::new(10.0, 10.0, 0.0)),
            unit_cube(Vec3::new(12.0, 11.0, 0.0)),
        ];
        let seeded = union_bounds(children, UnionSeed::Origin);
        assert_eq!(seeded.min, Vec3::new(0.0, 0.0, -0.5));
        assert_eq!(seeded.max, Vec3::new(12.5, 11.5, 0.5));
        assert!(seeded.contains_point(Vec3::ZERO));

        let tight = union_bounds(children, UnionSeed::FirstChild);
        assert_eq!(tight.min, Vec3::new(9.5, 9.5, -0.5));
        assert_eq!(tight.max, Vec3::new(12.5, 11.5, 0.5));
        assert!(!tight.contains_point(Vec3::ZERO));
    }

    #[test]
    fn closures_are_providers() {
        let provider = |anchor: &u32| unit_cube(Vec3::splat(*anchor as f32));
        let b = provider.compute_bounds(&2);
        assert_eq!(b.center(), Vec3::splat(2.0));
        assert_eq!(provider.compute_bounds(&2), b);
    }
}
