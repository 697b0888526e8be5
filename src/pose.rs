//! The shared camera pose mutated by exactly one component per frame.

use glam::Vec3;

/// Linear interpolation between two Vec3 positions.
#[inline]
#[must_use]
pub fn lerp_vec3(t: f32, start: Vec3, end: Vec3) -> Vec3 {
    start + (end - start) * t
}

/// The live camera state: eye position plus orbit/look-at target.
///
/// Created once per session and owned by the
/// [`Director`](crate::director::Director). Components receive it as
/// `&mut CameraPose` only inside the per-frame tick, which is what makes
/// the one-writer-per-frame rule hold without any locking.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraPose {
    /// Camera eye position in world space.
    pub position: Vec3,
    /// Look-at / orbit target point in world space.
    pub target: Vec3,
}

impl CameraPose {
    /// Pose from explicit position and target.
    #[must_use]
    pub fn new(position: Vec3, target: Vec3) -> Self {
        Self { position, target }
    }

    /// Interpolate both position and target between two poses.
    #[must_use]
    pub fn lerp_between(from: &Self, to: &Self, t: f32) -> Self {
        Self {
            position: lerp_vec3(t, from.position, to.position),
            target: lerp_vec3(t, from.target, to.target),
        }
    }
}
