// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Touch/mouse unifier: down/held/up/position queries over either device.
//!
//! ## Dispatch
//!
//! [`Unifier::is_touch_active`] is the only switch between the touch and
//! mouse paths. When the platform supports touch and at least one touch is
//! active, every unified query reads touches and the mouse is ignored, even if
//! its button is pressed. Otherwise every unified query reads the mouse and
//! ignores the identifier.
//!
//! ## Vanished touches
//!
//! Touch queries look the identifier up among the active touches. If it is no
//! longer there, held/up answer `false`. Callers that need to notice "the
//! contact disappeared without an up phase" can use
//! [`PressTracker`](crate::PressTracker).
//!
//! ## Minimal example
//!
//! ```
//! use understory_pointer::{FrameInput, InteractionPhase, PointerId, Touch, Unifier};
//!
//! let frame = FrameInput::new()
//!     .with_touch_support(true)
//!     .with_touch(Touch::new(3, (10.0, 20.0), InteractionPhase::Stationary))
//!     .with_mouse_phase(InteractionPhase::Began);
//!
//! let pointer = Unifier::new(&frame);
//! assert!(pointer.is_button_held(PointerId(3)));
//! // Touch is active, so the pressed mouse button is not consulted.
//! assert!(!pointer.is_button_down(PointerId::MOUSE));
//! ```

use alloc::vec;
use alloc::vec::Vec;

use kurbo::Point;

use crate::device::DeviceState;
use crate::types::{InteractionPhase, PointerId, PointerSample, Touch};

/// Device-agnostic pointer queries over a borrowed [`DeviceState`].
///
/// The unifier keeps no state of its own; every call re-derives its answer
/// from the device state it borrows.
#[derive(Debug)]
pub struct Unifier<'a, D: ?Sized> {
    device: &'a D,
}

impl<D: ?Sized> Clone for Unifier<'_, D> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<D: ?Sized> Copy for Unifier<'_, D> {}

impl<'a, D: DeviceState + ?Sized> Unifier<'a, D> {
    /// Wraps the device state for this frame.
    #[must_use]
    pub fn new(device: &'a D) -> Self {
        Self { device }
    }

    /// Returns the underlying device state.
    #[must_use]
    pub fn device(&self) -> &'a D {
        self.device
    }

    /// `true` iff touch is supported and at least one touch is active.
    #[must_use]
    pub fn is_touch_active(&self) -> bool {
        self.device.touch_supported() && !self.device.touches().is_empty()
    }

    /// Finds the first active touch with `id`, if touch is active.
    #[must_use]
    pub fn find_touch(&self, id: PointerId) -> Option<&'a Touch> {
        if !self.is_touch_active() {
            return None;
        }
        self.device.touches().iter().find(|t| t.id == id)
    }

    /// Returns the active touches in device order, or an empty slice when touch is inactive.
    #[must_use]
    pub fn active_touches(&self) -> &'a [Touch] {
        if self.is_touch_active() {
            self.device.touches()
        } else {
            &[]
        }
    }

    /// Mouse cursor position, regardless of touch state.
    #[must_use]
    pub fn mouse_position(&self) -> Point {
        self.device.mouse().position
    }

    /// Position of the touch with `id`; `None` when touch is inactive or the id is gone.
    #[must_use]
    pub fn touch_position(&self, id: PointerId) -> Option<Point> {
        self.find_touch(id).map(|t| t.position)
    }

    /// Unified position: the touch with `id` when touch is active, else the mouse.
    #[must_use]
    pub fn primary_pointer_position(&self, id: PointerId) -> Option<Point> {
        if self.is_touch_active() {
            self.touch_position(id)
        } else {
            Some(self.mouse_position())
        }
    }

    /// Mouse button went down this frame.
    #[must_use]
    pub fn mouse_button_down(&self) -> bool {
        self.device.mouse().down
    }

    /// Mouse button is pressed.
    #[must_use]
    pub fn mouse_button_held(&self) -> bool {
        self.device.mouse().held
    }

    /// Mouse button was released this frame.
    #[must_use]
    pub fn mouse_button_up(&self) -> bool {
        self.device.mouse().up
    }

    /// Tests the phase of the first touch with `id` against `phases`.
    ///
    /// Returns `false` when touch is inactive or no touch has `id`.
    #[must_use]
    pub fn test_touch_state(&self, id: PointerId, phases: &[InteractionPhase]) -> bool {
        self.find_touch(id).is_some_and(|t| phases.contains(&t.phase))
    }

    /// Touch with `id` is in [`InteractionPhase::Began`].
    #[must_use]
    pub fn touch_down(&self, id: PointerId) -> bool {
        self.test_touch_state(id, InteractionPhase::DOWN)
    }

    /// Touch with `id` is moved or stationary.
    #[must_use]
    pub fn touch_held(&self, id: PointerId) -> bool {
        self.test_touch_state(id, InteractionPhase::HELD)
    }

    /// Touch with `id` ended or was cancelled.
    #[must_use]
    pub fn touch_up(&self, id: PointerId) -> bool {
        self.test_touch_state(id, InteractionPhase::UP)
    }

    /// Unified "down this frame".
    #[must_use]
    pub fn is_button_down(&self, id: PointerId) -> bool {
        if self.is_touch_active() {
            self.touch_down(id)
        } else {
            self.mouse_button_down()
        }
    }

    /// Unified "held".
    #[must_use]
    pub fn is_button_held(&self, id: PointerId) -> bool {
        if self.is_touch_active() {
            self.touch_held(id)
        } else {
            self.mouse_button_held()
        }
    }

    /// Unified "released this frame".
    #[must_use]
    pub fn is_button_up(&self, id: PointerId) -> bool {
        if self.is_touch_active() {
            self.touch_up(id)
        } else {
            self.mouse_button_up()
        }
    }

    /// One sample per pointer on the active path.
    ///
    /// With touch active this yields every touch in device order. Otherwise it
    /// yields a single mouse sample with [`PointerId::MOUSE`].
    #[must_use]
    pub fn samples(&self) -> Vec<PointerSample> {
        if self.is_touch_active() {
            self.device
                .touches()
                .iter()
                .map(|t| PointerSample {
                    position: t.position,
                    active: !t.phase.is_up(),
                    identifier: t.id,
                    phase: Some(t.phase),
                })
                .collect()
        } else {
            let mouse = self.device.mouse();
            vec![PointerSample {
                position: mouse.position,
                active: mouse.held || mouse.down,
                identifier: PointerId::MOUSE,
                phase: mouse.phase(),
            }]
        }
    }
}
