// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Input unification layer: "did an interaction begin, continue or end on this object?"
//!
//! ## Hit testing happens once
//!
//! [`InteractionLayer::query_interaction_begin`] is the only query that casts
//! rays. Once an interaction has begun on an object, held and end queries are
//! plain phase checks on the recorded [`PointerId`]: an interaction that began
//! on an object stays "on" it wherever the pointer wanders, like press-and-hold
//! on a button. Do not re-validate containment on held/up.
//!
//! ## Hit providers
//!
//! The layer does not know about colliders. A [`ScreenRay`] turns a screen
//! position into a world ray (usually the active camera), and a
//! [`PointerHitProvider`] casts it into the host's physics or picking system.
//! A begin is accepted only when the reported hit target equals the queried
//! target, so an occluding object in front of it blocks the interaction.
//! 3D and 2D casts share the same [`PointerHit`] contract.

use glam::Vec3;
use kurbo::Point;

use crate::device::DeviceState;
use crate::types::{InteractionPhase, PointerId};
use crate::unifier::Unifier;

/// A world-space ray.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Ray {
    /// Ray origin.
    pub origin: Vec3,
    /// Ray direction. Not required to be normalized.
    pub direction: Vec3,
}

impl Ray {
    /// Creates a ray.
    #[must_use]
    pub const fn new(origin: Vec3, direction: Vec3) -> Self {
        Self { origin, direction }
    }

    /// Point at parameter `t` along the ray.
    #[must_use]
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }
}

/// Converts screen positions into world rays; usually implemented by a camera.
pub trait ScreenRay {
    /// Returns the ray through `position` (screen space).
    fn screen_point_to_ray(&self, position: Point) -> Ray;
}

/// Result of a successful ray cast.
#[derive(Clone, Debug, PartialEq)]
pub struct PointerHit<T> {
    /// World-space hit point.
    pub point: Vec3,
    /// Surface normal at the hit point. 2D casts report a normal in the XY plane.
    pub normal: Vec3,
    /// The object that was hit.
    pub target: T,
}

/// Casts rays into the host's collision world.
///
/// `target` is a filtering hint (for example, the target's collision layer);
/// implementations may still report whatever is hit first along the ray. The
/// interaction layer checks the returned target itself.
pub trait PointerHitProvider<T> {
    /// Casts `ray` and returns the nearest hit, if any.
    fn cast(&self, ray: Ray, target: &T) -> Option<PointerHit<T>>;
}

impl<T, F> PointerHitProvider<T> for F
where
    F: Fn(Ray, &T) -> Option<PointerHit<T>>,
{
    fn cast(&self, ray: Ray, target: &T) -> Option<PointerHit<T>> {
        self(ray, target)
    }
}

/// Outcome of an interaction query.
#[derive(Clone, Debug, PartialEq)]
pub struct InteractionQuery<T> {
    /// Whether an interaction began on the queried target this frame.
    pub occurred: bool,
    /// Identifier of the accepted pointer; [`PointerId::MOUSE`] when nothing matched.
    pub identifier: PointerId,
    /// The accepted hit.
    pub hit: Option<PointerHit<T>>,
}

impl<T> InteractionQuery<T> {
    /// The "nothing happened" result.
    #[must_use]
    pub fn none() -> Self {
        Self {
            occurred: false,
            identifier: PointerId::MOUSE,
            hit: None,
        }
    }

    fn accepted(identifier: PointerId, hit: PointerHit<T>) -> Self {
        Self {
            occurred: true,
            identifier,
            hit: Some(hit),
        }
    }
}

impl<T> Default for InteractionQuery<T> {
    fn default() -> Self {
        Self::none()
    }
}

/// Hit-tested interaction queries over a [`Unifier`] and a [`PointerHitProvider`].
///
/// ## Minimal example
///
/// ```
/// use glam::Vec3;
/// use kurbo::Point;
/// use understory_pointer::{
///     FrameInput, InteractionLayer, InteractionPhase, PointerHit, Ray, ScreenRay, Touch,
/// };
///
/// // Orthographic camera looking down +Z, one world unit per pixel.
/// struct Camera;
/// impl ScreenRay for Camera {
///     #[expect(clippy::cast_possible_truncation, reason = "screen coordinates fit in f32")]
///     fn screen_point_to_ray(&self, p: Point) -> Ray {
///         Ray::new(Vec3::new(p.x as f32, p.y as f32, -10.0), Vec3::Z)
///     }
/// }
///
/// // Button `1` occupies x in 0..100.
/// let hits = |ray: Ray, _: &u32| {
///     (ray.origin.x >= 0.0 && ray.origin.x < 100.0).then(|| PointerHit {
///         point: Vec3::new(ray.origin.x, ray.origin.y, 0.0),
///         normal: Vec3::NEG_Z,
///         target: 1_u32,
///     })
/// };
///
/// let frame = FrameInput::new()
///     .with_touch_support(true)
///     .with_touch(Touch::new(4, (50.0, 5.0), InteractionPhase::Began));
///
/// let layer = InteractionLayer::new(&frame, &hits);
/// let begin = layer.query_interaction_begin(&1_u32, &Camera);
/// assert!(begin.occurred);
/// assert!(!layer.query_interaction_held(begin.identifier));
/// ```
#[derive(Debug)]
pub struct InteractionLayer<'a, D: ?Sized, H: ?Sized> {
    pointer: Unifier<'a, D>,
    hits: &'a H,
}

impl<'a, D, H> InteractionLayer<'a, D, H>
where
    D: DeviceState + ?Sized,
    H: ?Sized,
{
    /// Composes device state for this frame with a hit provider.
    #[must_use]
    pub fn new(device: &'a D, hits: &'a H) -> Self {
        Self {
            pointer: Unifier::new(device),
            hits,
        }
    }

    /// The underlying unifier.
    #[must_use]
    pub fn unifier(&self) -> Unifier<'a, D> {
        self.pointer
    }

    /// Did an interaction begin on `target` this frame?
    ///
    /// With touch active, touches are scanned in device order and the first
    /// `Began` touch whose ray hits `target` is accepted; its identifier is
    /// returned. Otherwise the mouse press is tested the same way with
    /// identifier [`PointerId::MOUSE`]. At most one pointer is accepted per call.
    pub fn query_interaction_begin<T, C>(&self, target: &T, camera: &C) -> InteractionQuery<T>
    where
        T: PartialEq,
        C: ScreenRay + ?Sized,
        H: PointerHitProvider<T>,
    {
        if self.pointer.is_touch_active() {
            self.query_touch_begin(target, camera)
        } else {
            self.query_mouse_begin(target, camera)
        }
    }

    /// Touch-only begin query. Returns [`InteractionQuery::none`] when touch is inactive.
    pub fn query_touch_begin<T, C>(&self, target: &T, camera: &C) -> InteractionQuery<T>
    where
        T: PartialEq,
        C: ScreenRay + ?Sized,
        H: PointerHitProvider<T>,
    {
        for touch in self.pointer.active_touches() {
            if touch.phase != InteractionPhase::Began {
                continue;
            }
            if let Some(hit) = self.hit_target(touch.position, target, camera) {
                tracing::trace!(id = touch.id.0, "touch interaction began on target");
                return InteractionQuery::accepted(touch.id, hit);
            }
        }
        InteractionQuery::none()
    }

    /// Mouse-only begin query; reads the mouse even while touch is active.
    pub fn query_mouse_begin<T, C>(&self, target: &T, camera: &C) -> InteractionQuery<T>
    where
        T: PartialEq,
        C: ScreenRay + ?Sized,
        H: PointerHitProvider<T>,
    {
        if !self.pointer.mouse_button_down() {
            return InteractionQuery::none();
        }
        match self.hit_target(self.pointer.mouse_position(), target, camera) {
            Some(hit) => {
                tracing::trace!("mouse interaction began on target");
                InteractionQuery::accepted(PointerId::MOUSE, hit)
            }
            None => InteractionQuery::none(),
        }
    }

    /// Is the interaction with `id` still held? No hit testing.
    #[must_use]
    pub fn query_interaction_held(&self, id: PointerId) -> bool {
        self.pointer.is_button_held(id)
    }

    /// Did the interaction with `id` end this frame? No hit testing.
    #[must_use]
    pub fn query_interaction_end(&self, id: PointerId) -> bool {
        self.pointer.is_button_up(id)
    }

    /// Screen position of the pointer with `id` (the mouse ignores `id`).
    #[must_use]
    pub fn pointer_position(&self, id: PointerId) -> Option<Point> {
        self.pointer.primary_pointer_position(id)
    }

    fn hit_target<T, C>(&self, position: Point, target: &T, camera: &C) -> Option<PointerHit<T>>
    where
        T: PartialEq,
        C: ScreenRay + ?Sized,
        H: PointerHitProvider<T>,
    {
        let ray = camera.screen_point_to_ray(position);
        self.hits.cast(ray, target).filter(|hit| hit.target == *target)
    }
}
