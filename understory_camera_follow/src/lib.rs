// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_camera_follow --heading-base-level=0

//! Understory Camera Follow: keep an orthographic camera on a moving target.
//!
//! [`CameraFollow2D`] is a per-frame solver. Each frame it:
//!
//! 1. starts from the target position,
//! 2. adds the offset captured at activation on the axes that maintain it,
//! 3. refreshes the world bounds from a [`BoundsProvider`] when a source anchor is set,
//! 4. clamps x/y so the visible rectangle stays inside those bounds,
//! 5. keeps frozen axes where the camera already is,
//! 6. keeps the camera's depth,
//! 7. smooths toward the result with [`smooth_damp`].
//!
//! Camera, screen and bounds are injected through [`OrthographicCamera`],
//! [`ScreenGeometry`] and [`BoundsProvider`]; there is no global "main camera".
//!
//! ## Offset is captured once
//!
//! [`CameraFollow2D::activate`] records `camera.xy - target.xy` the first time
//! it sees a camera. Later calls are ignored, even if the target changed.
//!
//! ## Bounds
//!
//! Bounds whose diagonal is shorter than [`BOUNDS_EPSILON`] mean "no clamp".
//! Bounds smaller than the view are not rejected; [`clamp_axis`] documents the
//! result.
//!
//! ## Example
//!
//! ```rust
//! use glam::Vec3;
//! use understory_bounds::Aabb3;
//! use understory_camera_follow::{
//!     CameraConstraints, CameraFollow2D, FollowConfig, OrthoCamera, Screen,
//! };
//!
//! let level = Aabb3::from_min_max(Vec3::new(-20.0, -5.0, 0.0), Vec3::new(20.0, 5.0, 0.0));
//! let constraints = CameraConstraints::default()
//!     .with_maintain_offset(true, false)
//!     .with_explicit_bounds(level);
//! let mut follow: CameraFollow2D =
//!     CameraFollow2D::new(FollowConfig::default().with_constraints(constraints));
//!
//! let mut camera = OrthoCamera::new(Vec3::new(2.0, 0.0, -10.0), 5.0);
//! let screen = Screen::new(1600.0, 900.0);
//! follow.activate(Some(&camera), Some(Vec3::ZERO));
//!
//! // The player runs far to the right; the camera stops at the level edge.
//! for _ in 0..600 {
//!     follow.update(Some(&mut camera), Some(Vec3::new(100.0, 0.0, 0.0)), &screen, None, 1.0 / 60.0);
//! }
//! let half_width = 5.0 * 1600.0 / 900.0;
//! assert!((camera.position.x - (20.0 - half_width)).abs() < 1e-3);
//! assert_eq!(camera.position.z, -10.0);
//! ```
//!
//! ## Features
//!
//! - `std` (default) / `libm`: select Glam's float backend.
//! - `serde`: derive `Serialize`/`Deserialize` for [`FollowConfig`],
//!   [`CameraConstraints`] and [`OrthoCamera`].
//!
//! This crate is `no_std`.

#![no_std]

mod follow;
mod smooth;

pub use follow::{
    BOUNDS_EPSILON, CameraConstraints, CameraFollow2D, CameraFollowState, FollowConfig,
    FollowPhase, OrthoCamera, OrthographicCamera, Screen, ScreenGeometry, clamp_axis,
    horizontal_half_extent,
};
pub use smooth::{MIN_SMOOTH_TIME, smooth_damp, smooth_damp_scalar};

pub use understory_bounds::{Aabb3, BoundsProvider};
