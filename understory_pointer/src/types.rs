// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Plain input types shared by the unifier and the interaction layer.

use kurbo::{Point, Vec2};

/// Stable identity of a pointer across frames.
///
/// Touch contacts carry the identifier the device assigned to them. The mouse
/// always uses [`PointerId::MOUSE`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PointerId(pub i32);

impl PointerId {
    /// Sentinel identifier for the mouse, and the "nothing matched" value.
    pub const MOUSE: Self = Self(0);
}

/// Discretized lifecycle stage of a pointer contact.
///
/// Mouse input is mapped onto the same phases so downstream logic does not
/// need to know which device produced it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InteractionPhase {
    /// Contact started this frame.
    Began,
    /// Contact is held and moved since last frame.
    Moved,
    /// Contact is held without moving.
    Stationary,
    /// Contact was released this frame.
    Ended,
    /// The platform cancelled the contact (for example, a system gesture took over).
    Canceled,
}

impl InteractionPhase {
    /// Phases answering "down".
    pub const DOWN: &'static [Self] = &[Self::Began];
    /// Phases answering "held".
    pub const HELD: &'static [Self] = &[Self::Moved, Self::Stationary];
    /// Phases answering "up".
    pub const UP: &'static [Self] = &[Self::Ended, Self::Canceled];

    /// Returns `true` for [`InteractionPhase::Began`].
    #[must_use]
    pub fn is_down(self) -> bool {
        Self::DOWN.contains(&self)
    }

    /// Returns `true` for [`InteractionPhase::Moved`] and [`InteractionPhase::Stationary`].
    #[must_use]
    pub fn is_held(self) -> bool {
        Self::HELD.contains(&self)
    }

    /// Returns `true` for [`InteractionPhase::Ended`] and [`InteractionPhase::Canceled`].
    #[must_use]
    pub fn is_up(self) -> bool {
        Self::UP.contains(&self)
    }
}

/// One raw touch contact as reported by the device for the current frame.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Touch {
    /// Identifier, stable for the lifetime of the contact.
    pub id: PointerId,
    /// Screen-space position.
    pub position: Point,
    /// Phase for this frame.
    pub phase: InteractionPhase,
}

impl Touch {
    /// Creates a touch record.
    #[must_use]
    pub fn new(id: i32, position: impl Into<Point>, phase: InteractionPhase) -> Self {
        Self {
            id: PointerId(id),
            position: position.into(),
            phase,
        }
    }
}

/// Raw primary-button mouse state for the current frame.
///
/// `held` follows the usual platform convention of being `true` on every frame
/// the button is pressed, including the frame it went down.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MouseState {
    /// Cursor position in screen space.
    pub position: Point,
    /// Cursor movement since the previous frame.
    pub delta: Vec2,
    /// Button went down this frame.
    pub down: bool,
    /// Button is currently pressed.
    pub held: bool,
    /// Button was released this frame.
    pub up: bool,
}

impl MouseState {
    /// Maps the button state onto an [`InteractionPhase`].
    ///
    /// Down wins over held, so the press frame reports [`InteractionPhase::Began`].
    /// Returns `None` while the button is idle.
    #[must_use]
    pub fn phase(&self) -> Option<InteractionPhase> {
        if self.down {
            Some(InteractionPhase::Began)
        } else if self.up {
            Some(InteractionPhase::Ended)
        } else if self.held {
            if self.delta == Vec2::ZERO {
                Some(InteractionPhase::Stationary)
            } else {
                Some(InteractionPhase::Moved)
            }
        } else {
            None
        }
    }
}

/// A device-agnostic view of one pointer for the current frame.
///
/// Samples are recomputed from device state on every query and are not meant
/// to be stored.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PointerSample {
    /// Screen-space position.
    pub position: Point,
    /// `true` while the contact is down or held.
    pub active: bool,
    /// Stable identifier; [`PointerId::MOUSE`] for the mouse.
    pub identifier: PointerId,
    /// Mapped phase, if the pointer is doing anything this frame.
    pub phase: Option<InteractionPhase>,
}
