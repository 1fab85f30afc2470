// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Press tracking: remember which pointer started an interaction and follow it across frames.
//!
//! ## Usage
//!
//! 1) Poll [`PressTracker::poll`] once per frame per interactive object.
//! 2) While idle, it runs a hit-tested begin query and, on success, remembers
//!    the pointer's identifier and reports [`PressEvent::Began`].
//! 3) While pressed, it only checks phases for that identifier and reports
//!    [`PressEvent::Held`], [`PressEvent::Ended`] or [`PressEvent::Lost`].
//!
//! [`PressEvent::Lost`] covers contacts that disappear from the active set
//! without an up phase, which the unifier itself reports as plain `false`.
//!
//! ## Minimal example
//!
//! ```
//! use glam::Vec3;
//! use kurbo::Point;
//! use understory_pointer::{
//!     FrameInput, InteractionLayer, InteractionPhase, PointerHit, PressEvent, PressTracker,
//!     Ray, ScreenRay,
//! };
//!
//! struct Camera;
//! impl ScreenRay for Camera {
//!     #[expect(clippy::cast_possible_truncation, reason = "screen coordinates fit in f32")]
//!     fn screen_point_to_ray(&self, p: Point) -> Ray {
//!         Ray::new(Vec3::new(p.x as f32, p.y as f32, -1.0), Vec3::Z)
//!     }
//! }
//! let everything = |ray: Ray, target: &u8| {
//!     Some(PointerHit { point: ray.origin, normal: Vec3::NEG_Z, target: *target })
//! };
//!
//! let mut press = PressTracker::new();
//!
//! let frame = FrameInput::new().with_mouse_phase(InteractionPhase::Began);
//! let layer = InteractionLayer::new(&frame, &everything);
//! assert!(matches!(press.poll(&layer, &1_u8, &Camera), Some(PressEvent::Began(_))));
//!
//! let frame = FrameInput::new().with_mouse_phase(InteractionPhase::Stationary);
//! let layer = InteractionLayer::new(&frame, &everything);
//! assert!(matches!(press.poll(&layer, &1_u8, &Camera), Some(PressEvent::Held(_))));
//!
//! let frame = FrameInput::new().with_mouse_phase(InteractionPhase::Ended);
//! let layer = InteractionLayer::new(&frame, &everything);
//! assert!(matches!(press.poll(&layer, &1_u8, &Camera), Some(PressEvent::Ended(_))));
//! assert!(!press.is_pressed());
//! ```

use crate::device::DeviceState;
use crate::interaction::{InteractionLayer, PointerHitProvider, ScreenRay};
use crate::types::PointerId;

/// What happened to a tracked press this frame.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PressEvent {
    /// A press began on the target with this pointer.
    Began(PointerId),
    /// The press is still held.
    Held(PointerId),
    /// The press was released or cancelled this frame.
    Ended(PointerId),
    /// The pointer vanished without being released.
    Lost(PointerId),
}

impl PressEvent {
    /// The pointer the event refers to.
    #[must_use]
    pub fn pointer(self) -> PointerId {
        match self {
            Self::Began(id) | Self::Held(id) | Self::Ended(id) | Self::Lost(id) => id,
        }
    }
}

/// Tracks at most one press on one target.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PressTracker {
    active: Option<PointerId>,
}

impl PressTracker {
    /// Creates an idle tracker.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The pointer currently pressing the target, if any.
    #[must_use]
    pub fn active(&self) -> Option<PointerId> {
        self.active
    }

    /// Returns `true` while a press is being tracked.
    #[must_use]
    pub fn is_pressed(&self) -> bool {
        self.active.is_some()
    }

    /// Forgets the tracked press without reporting anything.
    pub fn reset(&mut self) {
        self.active = None;
    }

    /// Advances the tracker for this frame.
    ///
    /// Returns `None` when idle and nothing began, otherwise the event for this frame.
    pub fn poll<D, H, T, C>(
        &mut self,
        layer: &InteractionLayer<'_, D, H>,
        target: &T,
        camera: &C,
    ) -> Option<PressEvent>
    where
        D: DeviceState + ?Sized,
        H: PointerHitProvider<T> + ?Sized,
        T: PartialEq,
        C: ScreenRay + ?Sized,
    {
        let Some(id) = self.active else {
            let begin = layer.query_interaction_begin(target, camera);
            if !begin.occurred {
                return None;
            }
            self.active = Some(begin.identifier);
            return Some(PressEvent::Began(begin.identifier));
        };

        if layer.query_interaction_end(id) {
            self.active = None;
            Some(PressEvent::Ended(id))
        } else if layer.query_interaction_held(id) {
            Some(PressEvent::Held(id))
        } else {
            tracing::debug!(id = id.0, "tracked pointer vanished without release");
            self.active = None;
            Some(PressEvent::Lost(id))
        }
    }
}
