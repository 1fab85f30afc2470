// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The per-frame follow solver.

use glam::{Vec2, Vec3};
use understory_bounds::{Aabb3, BoundsProvider};

use crate::smooth::smooth_damp;

/// Bounds whose diagonal is shorter than this are treated as "no constraint".
///
/// This is the machine epsilon (about `1.2e-7`), not the smallest positive
/// `f32`, so bounds with a non-zero diagonal below it also leave the camera
/// unclamped.
pub const BOUNDS_EPSILON: f32 = f32::EPSILON;

/// Read-only screen dimensions, in pixels.
pub trait ScreenGeometry {
    /// Screen width.
    fn screen_width(&self) -> f32;
    /// Screen height.
    fn screen_height(&self) -> f32;
}

/// An orthographic camera transform the follower reads and writes.
pub trait OrthographicCamera {
    /// World-space camera position.
    fn position(&self) -> Vec3;
    /// Moves the camera.
    fn set_position(&mut self, position: Vec3);
    /// Half of the vertical world-space extent visible through the camera.
    fn orthographic_size(&self) -> f32;
}

/// Plain screen dimensions.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Screen {
    /// Width in pixels.
    pub width: f32,
    /// Height in pixels.
    pub height: f32,
}

impl Screen {
    /// Creates a screen of the given size.
    #[must_use]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

impl ScreenGeometry for Screen {
    fn screen_width(&self) -> f32 {
        self.width
    }

    fn screen_height(&self) -> f32 {
        self.height
    }
}

/// A minimal orthographic camera.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OrthoCamera {
    /// World-space position.
    pub position: Vec3,
    /// Half of the vertical visible extent.
    pub orthographic_size: f32,
}

impl OrthoCamera {
    /// Creates a camera at `position` showing `2 * orthographic_size` units vertically.
    #[must_use]
    pub const fn new(position: Vec3, orthographic_size: f32) -> Self {
        Self {
            position,
            orthographic_size,
        }
    }
}

impl OrthographicCamera for OrthoCamera {
    fn position(&self) -> Vec3 {
        self.position
    }

    fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    fn orthographic_size(&self) -> f32 {
        self.orthographic_size
    }
}

/// Per-axis follow constraints.
///
/// `A` is the anchor type understood by the [`BoundsProvider`] passed to
/// [`CameraFollow2D::update`]. When `bounds_source` is set and a provider is
/// given, `explicit_bounds` is overwritten with the provider's answer every
/// frame; otherwise it is used as authored.
///
/// Inverted bounds (smaller than the view) are not validated; see
/// [`clamp_axis`] for what they do.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CameraConstraints<A> {
    /// Keep the camera's x where it is.
    pub freeze_x: bool,
    /// Keep the camera's y where it is.
    pub freeze_y: bool,
    /// Add the x offset captured at activation to the target.
    pub maintain_offset_x: bool,
    /// Add the y offset captured at activation to the target.
    pub maintain_offset_y: bool,
    /// Anchor whose visible descendants define the bounds.
    pub bounds_source: Option<A>,
    /// World-space limits for the view.
    pub explicit_bounds: Aabb3,
}

impl<A> Default for CameraConstraints<A> {
    fn default() -> Self {
        Self {
            freeze_x: false,
            freeze_y: false,
            maintain_offset_x: false,
            maintain_offset_y: false,
            bounds_source: None,
            explicit_bounds: Aabb3::ZERO,
        }
    }
}

impl<A> CameraConstraints<A> {
    /// Sets both freeze flags.
    #[must_use]
    pub fn with_freeze(mut self, x: bool, y: bool) -> Self {
        self.freeze_x = x;
        self.freeze_y = y;
        self
    }

    /// Sets both offset flags.
    #[must_use]
    pub fn with_maintain_offset(mut self, x: bool, y: bool) -> Self {
        self.maintain_offset_x = x;
        self.maintain_offset_y = y;
        self
    }

    /// Uses `anchor` to recompute the bounds every frame.
    #[must_use]
    pub fn with_bounds_source(mut self, anchor: A) -> Self {
        self.bounds_source = Some(anchor);
        self
    }

    /// Sets fixed bounds.
    #[must_use]
    pub fn with_explicit_bounds(mut self, bounds: Aabb3) -> Self {
        self.explicit_bounds = bounds;
        self
    }
}

/// Follow configuration.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FollowConfig<A> {
    /// Approximate time in seconds to reach the desired position.
    pub damp_time: f32,
    /// Speed cap in world units per second.
    pub max_speed: f32,
    /// When `false`, [`CameraFollow2D::update`] leaves the camera alone.
    pub tracking: bool,
    /// Axis constraints and bounds.
    pub constraints: CameraConstraints<A>,
}

impl<A> Default for FollowConfig<A> {
    fn default() -> Self {
        Self {
            damp_time: 0.3,
            max_speed: f32::INFINITY,
            tracking: true,
            constraints: CameraConstraints::default(),
        }
    }
}

impl<A> FollowConfig<A> {
    /// Sets the damping time.
    #[must_use]
    pub fn with_damp_time(mut self, damp_time: f32) -> Self {
        self.damp_time = damp_time;
        self
    }

    /// Sets the speed cap.
    #[must_use]
    pub fn with_max_speed(mut self, max_speed: f32) -> Self {
        self.max_speed = max_speed;
        self
    }

    /// Replaces the constraints.
    #[must_use]
    pub fn with_constraints(mut self, constraints: CameraConstraints<A>) -> Self {
        self.constraints = constraints;
        self
    }
}

/// State captured at activation and carried between frames.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CameraFollowState {
    /// `camera.xy - target.xy` at activation. Never recomputed.
    pub camera_position_offset: Vec2,
    /// Smoothing velocity.
    pub current_velocity: Vec3,
    /// Camera orthographic size at activation.
    pub orthographic_half_height: f32,
}

/// Where a follower is in its one-way lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FollowPhase {
    /// No camera has been seen yet.
    Uninitialized,
    /// Offset captured; updates move the camera.
    Tracking,
}

/// Clamps `value` into `[min, max]` without requiring `min <= max`.
///
/// A value below `min` yields `min`; otherwise a value above `max` yields
/// `max`. With an inverted range that means values below `min` stick to
/// `min` and everything else lands on `max`.
///
/// ```
/// use understory_camera_follow::clamp_axis;
///
/// assert_eq!(clamp_axis(5.0, 0.0, 10.0), 5.0);
/// assert_eq!(clamp_axis(2.0, 3.0, 1.0), 3.0);
/// assert_eq!(clamp_axis(2.5, 2.0, 1.0), 1.0);
/// ```
#[must_use]
pub fn clamp_axis(value: f32, min: f32, max: f32) -> f32 {
    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}

/// Horizontal half-extent of the view for the given vertical half-extent.
///
/// Returns `0.0` for a screen with no height.
#[must_use]
pub fn horizontal_half_extent<S: ScreenGeometry + ?Sized>(half_height: f32, screen: &S) -> f32 {
    let height = screen.screen_height();
    if height > 0.0 {
        half_height * screen.screen_width() / height
    } else {
        0.0
    }
}

/// Orthographic camera follower with freeze, offset and bounds constraints.
///
/// Call [`activate`](Self::activate) once when the camera and target are
/// known, then [`update`](Self::update) every frame after game logic moved the
/// target.
#[derive(Clone, Debug)]
pub struct CameraFollow2D<A = ()> {
    config: FollowConfig<A>,
    state: Option<CameraFollowState>,
}

impl<A> Default for CameraFollow2D<A> {
    fn default() -> Self {
        Self::new(FollowConfig::default())
    }
}

impl<A> CameraFollow2D<A> {
    /// Creates an uninitialized follower.
    #[must_use]
    pub fn new(config: FollowConfig<A>) -> Self {
        Self {
            config,
            state: None,
        }
    }

    /// The configuration.
    #[must_use]
    pub fn config(&self) -> &FollowConfig<A> {
        &self.config
    }

    /// Mutable configuration.
    pub fn config_mut(&mut self) -> &mut FollowConfig<A> {
        &mut self.config
    }

    /// Mutable constraints.
    pub fn constraints_mut(&mut self) -> &mut CameraConstraints<A> {
        &mut self.config.constraints
    }

    /// Sets the damping time.
    pub fn set_damp_time(&mut self, damp_time: f32) {
        self.config.damp_time = damp_time;
    }

    /// Whether updates move the camera.
    #[must_use]
    pub fn is_tracking(&self) -> bool {
        self.config.tracking
    }

    /// Pauses or resumes following. The smoothing velocity is kept.
    pub fn set_tracking(&mut self, tracking: bool) {
        self.config.tracking = tracking;
    }

    /// Captured state, once activated.
    #[must_use]
    pub fn state(&self) -> Option<&CameraFollowState> {
        self.state.as_ref()
    }

    /// Lifecycle phase.
    #[must_use]
    pub fn phase(&self) -> FollowPhase {
        if self.state.is_some() {
            FollowPhase::Tracking
        } else {
            FollowPhase::Uninitialized
        }
    }

    /// Captures the offset and half-height.
    ///
    /// With no target, the camera's own position is used (zero offset).
    /// Without a camera nothing happens and the follower stays uninitialized.
    /// Once activated, further calls return `false` and change nothing.
    pub fn activate<C>(&mut self, camera: Option<&C>, target: Option<Vec3>) -> bool
    where
        C: OrthographicCamera + ?Sized,
    {
        if self.state.is_some() {
            return false;
        }
        let Some(camera) = camera else {
            tracing::debug!("camera follow not activated: no camera");
            return false;
        };
        let position = camera.position();
        let target = target.unwrap_or(position);
        let offset = position.truncate() - target.truncate();
        let half_height = camera.orthographic_size();
        tracing::debug!(
            offset_x = offset.x,
            offset_y = offset.y,
            half_height,
            "camera follow activated"
        );
        self.state = Some(CameraFollowState {
            camera_position_offset: offset,
            current_velocity: Vec3::ZERO,
            orthographic_half_height: half_height,
        });
        true
    }

    /// Computes where the camera should head this frame, before smoothing.
    ///
    /// Applies the offset, refreshes the bounds from the provider, clamps to
    /// the bounds, applies the freezes and keeps the camera's depth. Returns
    /// `None` before activation. `explicit_bounds` keeps the refreshed value.
    pub fn desired_position<C, S>(
        &mut self,
        camera: &C,
        target: Vec3,
        screen: &S,
        bounds: Option<&dyn BoundsProvider<A>>,
    ) -> Option<Vec3>
    where
        C: OrthographicCamera + ?Sized,
        S: ScreenGeometry + ?Sized,
    {
        let state = self.state.as_ref()?;
        let constraints = &mut self.config.constraints;
        let current = camera.position();

        let mut desired = target;
        if constraints.maintain_offset_x {
            desired.x += state.camera_position_offset.x;
        }
        if constraints.maintain_offset_y {
            desired.y += state.camera_position_offset.y;
        }

        if let (Some(anchor), Some(provider)) = (constraints.bounds_source.as_ref(), bounds) {
            constraints.explicit_bounds = provider.compute_bounds(anchor);
        }

        let half_height = state.orthographic_half_height;
        let half_width = horizontal_half_extent(half_height, screen);
        let b = constraints.explicit_bounds;
        if !b.is_degenerate(BOUNDS_EPSILON) {
            desired.x = clamp_axis(desired.x, b.min.x + half_width, b.max.x - half_width);
            desired.y = clamp_axis(desired.y, b.min.y + half_height, b.max.y - half_height);
        }

        if constraints.freeze_x {
            desired.x = current.x;
        }
        if constraints.freeze_y {
            desired.y = current.y;
        }
        desired.z = current.z;
        Some(desired)
    }

    /// Runs one frame: solves the desired position and smooths the camera toward it.
    ///
    /// Does nothing and returns `None` when not tracking, not activated, or
    /// when the camera or target is missing. Otherwise writes the new camera
    /// position and returns it.
    pub fn update<C, S>(
        &mut self,
        camera: Option<&mut C>,
        target: Option<Vec3>,
        screen: &S,
        bounds: Option<&dyn BoundsProvider<A>>,
        dt: f32,
    ) -> Option<Vec3>
    where
        C: OrthographicCamera + ?Sized,
        S: ScreenGeometry + ?Sized,
    {
        if !self.config.tracking {
            return None;
        }
        let camera = camera?;
        let target = target?;
        let desired = self.desired_position(&*camera, target, screen, bounds)?;

        let (damp_time, max_speed) = (self.config.damp_time, self.config.max_speed);
        let (freeze_x, freeze_y) = (
            self.config.constraints.freeze_x,
            self.config.constraints.freeze_y,
        );
        let state = self.state.as_mut()?;
        // Frozen axes carry no momentum, even if the freeze was switched on mid-flight.
        if freeze_x {
            state.current_velocity.x = 0.0;
        }
        if freeze_y {
            state.current_velocity.y = 0.0;
        }
        let current = camera.position();
        let mut next = smooth_damp(
            current,
            desired,
            &mut state.current_velocity,
            damp_time,
            max_speed,
            dt,
        );
        if freeze_x {
            next.x = current.x;
        }
        if freeze_y {
            next.y = current.y;
        }
        camera.set_position(next);
        Some(next)
    }
}
