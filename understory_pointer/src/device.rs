// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Device state polling.
//!
//! The unifier never reads ambient globals. Hosts hand it something that
//! implements [`DeviceState`] for the current frame, either their own adapter
//! over a platform input API or a [`FrameInput`] snapshot they fill in once per
//! frame.

use alloc::vec::Vec;

use kurbo::{Point, Vec2};

use crate::types::{InteractionPhase, MouseState, Touch};

/// Read-only view of raw pointer devices for the current frame.
pub trait DeviceState {
    /// Whether the platform reports touch capability at all.
    fn touch_supported(&self) -> bool;

    /// All active touches, in device-reported order.
    fn touches(&self) -> &[Touch];

    /// Primary mouse button state.
    fn mouse(&self) -> MouseState;
}

impl<D: DeviceState + ?Sized> DeviceState for &D {
    fn touch_supported(&self) -> bool {
        (**self).touch_supported()
    }

    fn touches(&self) -> &[Touch] {
        (**self).touches()
    }

    fn mouse(&self) -> MouseState {
        (**self).mouse()
    }
}

/// Owned snapshot of device state for one frame.
///
/// ```
/// use understory_pointer::{FrameInput, InteractionPhase, Touch, Unifier};
///
/// let frame = FrameInput::new()
///     .with_touch_support(true)
///     .with_touch(Touch::new(7, (120.0, 40.0), InteractionPhase::Began));
///
/// let pointer = Unifier::new(&frame);
/// assert!(pointer.is_touch_active());
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FrameInput {
    /// Whether the platform supports touch.
    pub touch_supported: bool,
    /// Active touches in device order.
    pub touches: Vec<Touch>,
    /// Mouse state.
    pub mouse: MouseState,
}

impl FrameInput {
    /// Creates an empty snapshot: no touch support, idle mouse at the origin.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets touch support.
    #[must_use]
    pub fn with_touch_support(mut self, supported: bool) -> Self {
        self.touch_supported = supported;
        self
    }

    /// Appends a touch.
    #[must_use]
    pub fn with_touch(mut self, touch: Touch) -> Self {
        self.touches.push(touch);
        self
    }

    /// Places the mouse cursor.
    #[must_use]
    pub fn with_mouse_position(mut self, position: impl Into<Point>) -> Self {
        self.mouse.position = position.into();
        self
    }

    /// Sets the mouse button state from an [`InteractionPhase`].
    ///
    /// `Began` presses the button, `Moved`/`Stationary` keep it held,
    /// `Ended`/`Canceled` release it. `Moved` also records a nonzero delta so
    /// that [`MouseState::phase`] reports it back.
    #[must_use]
    pub fn with_mouse_phase(mut self, phase: InteractionPhase) -> Self {
        let position = self.mouse.position;
        self.mouse = match phase {
            InteractionPhase::Began => MouseState {
                position,
                down: true,
                held: true,
                ..MouseState::default()
            },
            InteractionPhase::Moved => MouseState {
                position,
                delta: Vec2::new(1.0, 0.0),
                held: true,
                ..MouseState::default()
            },
            InteractionPhase::Stationary => MouseState {
                position,
                held: true,
                ..MouseState::default()
            },
            InteractionPhase::Ended | InteractionPhase::Canceled => MouseState {
                position,
                up: true,
                ..MouseState::default()
            },
        };
        self
    }

    /// Replaces the mouse state wholesale.
    #[must_use]
    pub fn with_mouse(mut self, mouse: MouseState) -> Self {
        self.mouse = mouse;
        self
    }

    /// Clears per-frame data while keeping the capability flag, ready for the next frame.
    pub fn clear(&mut self) {
        self.touches.clear();
        self.mouse = MouseState {
            position: self.mouse.position,
            held: self.mouse.held && !self.mouse.up,
            ..MouseState::default()
        };
    }
}

impl DeviceState for FrameInput {
    fn touch_supported(&self) -> bool {
        self.touch_supported
    }

    fn touches(&self) -> &[Touch] {
        &self.touches
    }

    fn mouse(&self) -> MouseState {
        self.mouse
    }
}

#[cfg(test)]
mod tests {
    use super::{DeviceState, FrameInput};
    use crate::types::{InteractionPhase, Touch};

    #[test]
    fn builder_fills_snapshot() {
        let frame = FrameInput::new()
            .with_touch_support(true)
            .with_touch(Touch::new(1, (1.0, 2.0), InteractionPhase::Began))
            .with_touch(Touch::new(2, (3.0, 4.0), InteractionPhase::Moved))
            .with_mouse_position((5.0, 6.0));

        assert!(frame.touch_supported());
        assert_eq!(frame.touches().len(), 2);
        assert_eq!(frame.touches()[1].position.x, 3.0);
        assert_eq!(frame.mouse().position.y, 6.0);
    }

    #[test]
    fn mouse_phase_roundtrips_through_state() {
        use InteractionPhase::*;
        for phase in [Began, Moved, Stationary, Ended] {
            let frame = FrameInput::new().with_mouse_phase(phase);
            assert_eq!(frame.mouse().phase(), Some(phase));
        }
        let canceled = FrameInput::new().with_mouse_phase(Canceled);
        assert_eq!(canceled.mouse().phase(), Some(Ended));
    }

    #[test]
    fn clear_keeps_held_button_and_capability() {
        let mut frame = FrameInput::new()
            .with_touch_support(true)
            .with_touch(Touch::new(1, (1.0, 2.0), InteractionPhase::Began))
            .with_mouse_position((9.0, 9.0))
            .with_mouse_phase(InteractionPhase::Began);
        frame.clear();

        assert!(frame.touch_supported);
        assert!(frame.touches.is_empty());
        assert_eq!(frame.mouse().phase(), Some(InteractionPhase::Stationary));
        assert_eq!(frame.mouse().position.x, 9.0);

        let mut released = FrameInput::new().with_mouse_phase(InteractionPhase::Ended);
        released.clear();
        assert_eq!(released.mouse().phase(), None);
    }

    #[test]
    fn references_are_device_state() {
        fn count<D: DeviceState>(d: D) -> usize {
            d.touches().len()
        }
        let frame = FrameInput::new().with_touch(Touch::new(3, (0.0, 0.0), InteractionPhase::Began));
        assert_eq!(count(&frame), 1);
    }
}
