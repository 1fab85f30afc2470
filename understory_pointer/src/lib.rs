// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_pointer --heading-base-level=0

//! Understory Pointer: one pointer model over mouse and multi-touch input.
//!
//! This crate answers per-frame questions such as "did a press begin on this
//! object?", "is it still held?" and "was it released?" without callers caring
//! whether the press came from a mouse button or a finger.
//!
//! - [`Unifier`]: down/held/up/position queries over raw [`DeviceState`].
//! - [`InteractionLayer`]: hit-tested begin queries plus identifier-based
//!   held/end queries.
//! - [`PressTracker`]: remembers which pointer pressed an object and reports
//!   its lifecycle, including contacts that vanish without an up phase.
//!
//! ## Poll model
//!
//! Nothing here subscribes to events or keeps device state. Each frame the
//! host provides a [`DeviceState`] (its own adapter or a [`FrameInput`]
//! snapshot) and queries it. Every answer is re-derived from that frame's
//! state, which keeps ordering deterministic inside a single frame step.
//!
//! ## Touch takes priority
//!
//! When the platform supports touch and any touch is active, unified queries
//! read touches only. The mouse is consulted only when no touch is active.
//! The mouse always reports [`PointerId::MOUSE`].
//!
//! ## Interaction phases
//!
//! Both devices map onto [`InteractionPhase`]: a mouse press is `Began`, a
//! held button is `Moved` or `Stationary`, a release is `Ended`.
//!
//! ## No errors
//!
//! Missing pointers, vanished touches and misses are ordinary answers
//! (`false`, `None`, or [`InteractionQuery::none`]). Nothing in this crate
//! panics on absent input.
//!
//! ## Example
//!
//! ```rust
//! use glam::Vec3;
//! use kurbo::Point;
//! use understory_pointer::{
//!     FrameInput, InteractionLayer, InteractionPhase, PointerHit, Ray, ScreenRay, Touch,
//! };
//!
//! struct Camera;
//! impl ScreenRay for Camera {
//!     #[expect(clippy::cast_possible_truncation, reason = "screen coordinates fit in f32")]
//!     fn screen_point_to_ray(&self, p: Point) -> Ray {
//!         Ray::new(Vec3::new(p.x as f32, p.y as f32, -10.0), Vec3::Z)
//!     }
//! }
//! let hits = |ray: Ray, target: &u32| {
//!     Some(PointerHit { point: ray.at(10.0), normal: Vec3::NEG_Z, target: *target })
//! };
//!
//! // Frame 1: a finger lands.
//! let frame = FrameInput::new()
//!     .with_touch_support(true)
//!     .with_touch(Touch::new(11, (5.0, 5.0), InteractionPhase::Began));
//! let layer = InteractionLayer::new(&frame, &hits);
//! let begin = layer.query_interaction_begin(&1_u32, &Camera);
//! assert!(begin.occurred);
//!
//! // Frame 2: the same finger is held; no hit test needed.
//! let frame = FrameInput::new()
//!     .with_touch_support(true)
//!     .with_touch(Touch::new(11, (80.0, 5.0), InteractionPhase::Moved));
//! let layer = InteractionLayer::new(&frame, &hits);
//! assert!(layer.query_interaction_held(begin.identifier));
//! assert_eq!(layer.pointer_position(begin.identifier), Some(Point::new(80.0, 5.0)));
//! ```
//!
//! ## Features
//!
//! - `std` (default) / `libm`: select the float backend of Kurbo and Glam.
//! - `serde`: derive `Serialize`/`Deserialize` for [`PointerId`],
//!   [`InteractionPhase`], [`Touch`], [`MouseState`] and [`FrameInput`].
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod device;
mod interaction;
mod press;
mod types;
mod unifier;

pub use device::{DeviceState, FrameInput};
pub use interaction::{
    InteractionLayer, InteractionQuery, PointerHit, PointerHitProvider, Ray, ScreenRay,
};
pub use press::{PressEvent, PressTracker};
pub use types::{InteractionPhase, MouseState, PointerId, PointerSample, Touch};
pub use unifier::Unifier;
