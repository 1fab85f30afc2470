// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The [`Aabb3`] bounding volume.

use glam::Vec3;

/// Axis-aligned bounding box in world space, defined by its min/max corners.
///
/// No ordering is enforced between `min` and `max`. Boxes built through
/// [`Aabb3::from_center_size`] or [`Aabb3::union`] are well formed as long as
/// their inputs are; callers constructing boxes by hand are responsible for
/// keeping `min <= max` componentwise.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Aabb3 {
    /// Minimum corner.
    pub min: Vec3,
    /// Maximum corner.
    pub max: Vec3,
}

impl Aabb3 {
    /// The degenerate box at the origin (`min == max == 0`).
    ///
    /// This is what a child union produces when there is nothing to union.
    /// Consumers treat it as "no constraint".
    pub const ZERO: Self = Self {
        min: Vec3::ZERO,
        max: Vec3::ZERO,
    };

    /// Creates a box from its corners.
    #[must_use]
    pub const fn from_min_max(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// Creates a box centered on `center` with the given full `size`.
    #[must_use]
    pub fn from_center_size(center: Vec3, size: Vec3) -> Self {
        let half = size * 0.5;
        Self {
            min: center - half,
            max: center + half,
        }
    }

    /// Center point, `(min + max) / 2`.
    #[must_use]
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    /// Full size, `max - min`.
    #[must_use]
    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }

    /// Half of [`Aabb3::size`].
    #[must_use]
    pub fn extents(&self) -> Vec3 {
        self.size() * 0.5
    }

    /// Componentwise union of two boxes.
    #[must_use]
    pub fn union(self, other: Self) -> Self {
        Self {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }

    /// Grows the box to include `point`.
    #[must_use]
    pub fn including_point(self, point: Vec3) -> Self {
        Self {
            min: self.min.min(point),
            max: self.max.max(point),
        }
    }

    /// Returns `true` if `point` lies inside the box or on its boundary.
    #[must_use]
    pub fn contains_point(&self, point: Vec3) -> bool {
        point.cmpge(self.min).all() && point.cmple(self.max).all()
    }

    /// Returns the box moved by `offset`.
    #[must_use]
    pub fn translated(self, offset: Vec3) -> Self {
        Self {
            min: self.min + offset,
            max: self.max + offset,
        }
    }

    /// Returns `true` when the diagonal length is below `epsilon`.
    ///
    /// A degenerate box carries no usable extent and should be treated as
    /// "unconstrained" rather than as a point to clamp to.
    #[must_use]
    pub fn is_degenerate(&self, epsilon: f32) -> bool {
        self.size().length() < epsilon
    }
}
