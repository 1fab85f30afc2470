// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_bounds --heading-base-level=0

//! Understory Bounds: axis-aligned 3D bounds for view constraints.
//!
//! This crate provides the bounding-volume pieces that camera constraints are
//! built from:
//!
//! - [`Aabb3`]: a min/max box with center/size helpers and unions.
//! - [`BoundsProvider`]: the contract for "give me the bounds of everything
//!   visible under this anchor". Hosts with their own scene graph implement it
//!   directly; closures implement it too.
//! - [`union_bounds`] with a configurable [`UnionSeed`].
//! - [`BoundsTree`]: a small reference provider over a hierarchy of world-space
//!   boxes with visibility flags.
//!
//! ## Degenerate bounds
//!
//! A union over nothing is [`Aabb3::ZERO`], never an error. Consumers are
//! expected to treat a box whose diagonal is below a small epsilon (see
//! [`Aabb3::is_degenerate`]) as "no constraint".
//!
//! ## Union seeding
//!
//! [`UnionSeed::Origin`] starts the union from the zero box, so the result
//! always contains the world origin even when every child sits on one side of
//! it. That matches how existing levels were authored. [`UnionSeed::FirstChild`]
//! gives the tight union instead.
//!
//! ```rust
//! use glam::Vec3;
//! use understory_bounds::{Aabb3, BoundsProvider, BoundsTree, UnionSeed};
//!
//! let mut tree = BoundsTree::with_seed(UnionSeed::FirstChild);
//! let room = tree.insert(None, None);
//! tree.insert(Some(room), Some(Aabb3::from_center_size(Vec3::new(10.0, 0.0, 0.0), Vec3::ONE)));
//! tree.insert(Some(room), Some(Aabb3::from_center_size(Vec3::new(14.0, 2.0, 0.0), Vec3::ONE)));
//!
//! let bounds = tree.compute_bounds(&room);
//! assert_eq!(bounds.min, Vec3::new(9.5, -0.5, -0.5));
//! assert_eq!(bounds.max, Vec3::new(14.5, 2.5, 0.5));
//! ```
//!
//! ## Features
//!
//! - `std` (default) / `libm`: select Glam's float backend.
//! - `serde`: derive `Serialize`/`Deserialize` for [`Aabb3`] and [`UnionSeed`].
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod aabb;
mod provider;
mod tree;

pub use aabb::Aabb3;
pub use provider::{BoundsProvider, UnionSeed, union_bounds};
pub use tree::{BoundsTree, NodeFlags, NodeId};
