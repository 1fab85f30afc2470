// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Critically damped smoothing toward a moving goal.
//!
//! The spring is the closed-form critically damped oscillator from *Game
//! Programming Gems 4* (ch. 1.10), with the exponential replaced by its cubic
//! Taylor approximation. It never overshoots the goal: if a step would carry
//! the value past the goal, it lands exactly on it and the velocity is zeroed.
//!
//! `smooth_time` is roughly the time it takes to reach the goal. The caller
//! owns the velocity and passes it back in every frame; two followers must not
//! share one velocity.

use glam::Vec3;

/// Lower bound applied to `smooth_time` to keep the spring finite.
pub const MIN_SMOOTH_TIME: f32 = 1e-4;

/// Smooths a scalar toward `target`.
///
/// `max_speed` caps the speed in units per second (`f32::INFINITY` for no cap).
/// With `dt <= 0` nothing moves and `velocity` is left untouched.
///
/// ```
/// use understory_camera_follow::smooth_damp_scalar;
///
/// let mut velocity = 0.0;
/// let next = smooth_damp_scalar(0.0, 10.0, &mut velocity, 0.3, f32::INFINITY, 1.0 / 60.0);
/// assert!(next > 0.0 && next < 10.0);
/// assert!(velocity > 0.0);
/// ```
#[must_use]
pub fn smooth_damp_scalar(
    current: f32,
    target: f32,
    velocity: &mut f32,
    smooth_time: f32,
    max_speed: f32,
    dt: f32,
) -> f32 {
    if dt.is_nan() || dt <= 0.0 {
        return current;
    }
    let (omega, decay) = spring(smooth_time, dt);
    let max_change = max_speed.max(0.0) * smooth_time.max(MIN_SMOOTH_TIME);
    let change = (current - target).clamp(-max_change, max_change);
    let goal = current - change;

    let temp = (*velocity + omega * change) * dt;
    *velocity = (*velocity - omega * temp) * decay;
    let output = goal + (change + temp) * decay;

    if (target - current) * (output - target) > 0.0 {
        *velocity = 0.0;
        return target;
    }
    output
}

/// Smooths a point toward `target`; the vector form of [`smooth_damp_scalar`].
///
/// The speed cap applies to the length of the change, and the overshoot check
/// is done on the whole vector, so all axes settle together.
#[must_use]
pub fn smooth_damp(
    current: Vec3,
    target: Vec3,
    velocity: &mut Vec3,
    smooth_time: f32,
    max_speed: f32,
    dt: f32,
) -> Vec3 {
    if dt.is_nan() || dt <= 0.0 {
        return current;
    }
    let (omega, decay) = spring(smooth_time, dt);
    let max_change = max_speed.max(0.0) * smooth_time.max(MIN_SMOOTH_TIME);
    let change = (current - target).clamp_length_max(max_change);
    let goal = current - change;

    let temp = (*velocity + omega * change) * dt;
    *velocity = (*velocity - omega * temp) * decay;
    let output = goal + (change + temp) * decay;

    if (target - current).dot(output - target) > 0.0 {
        *velocity = Vec3::ZERO;
        return target;
    }
    output
}

/// Returns the spring frequency and the per-step decay factor.
fn spring(smooth_time: f32, dt: f32) -> (f32, f32) {
    let omega = 2.0 / smooth_time.max(MIN_SMOOTH_TIME);
    let x = omega * dt;
    let decay = 1.0 / (1.0 + x + 0.48 * x * x + 0.235 * x * x * x);
    (omega, decay)
}
