//! Bounds guardian: keeps the camera inside a safe axis-aligned volume.
//!
//! Checked once per tick while no transition is in flight. An escape is
//! never hard-clamped; the guardian remembers the last in-bounds pose and
//! asks for a smooth corrective transition back to the default viewpoint,
//! so recovery looks like any other camera move.

use glam::Vec3;
use web_time::Duration;

use crate::capability::DeviceCapabilities;
use crate::options::BoundsOptions;
use crate::pose::CameraPose;

/// Axis-aligned safe volume for camera position and look-at target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundsVolume {
    /// Minimum allowed camera position.
    pub position_min: Vec3,
    /// Maximum allowed camera position.
    pub position_max: Vec3,
    /// Minimum allowed target.
    pub target_min: Vec3,
    /// Maximum allowed target.
    pub target_max: Vec3,
}

impl BoundsVolume {
    /// Build the volume from configuration.
    #[must_use]
    pub fn from_options(opts: &BoundsOptions) -> Self {
        Self {
            position_min: Vec3::from_array(opts.position_min),
            position_max: Vec3::from_array(opts.position_max),
            target_min: Vec3::from_array(opts.target_min),
            target_max: Vec3::from_array(opts.target_max),
        }
    }

    /// Whether both the position and the target sit inside the volume.
    /// Boundary values count as inside.
    #[must_use]
    pub fn contains(&self, pose: &CameraPose) -> bool {
        Self::within(pose.position, self.position_min, self.position_max)
            && Self::within(pose.target, self.target_min, self.target_max)
    }

    fn within(v: Vec3, min: Vec3, max: Vec3) -> bool {
        v.cmpge(min).all() && v.cmple(max).all()
    }
}

impl Default for BoundsVolume {
    fn default() -> Self {
        Self::from_options(&BoundsOptions::default())
    }
}

/// Watches the camera pose and requests recovery when it escapes.
#[derive(Debug)]
pub struct BoundsGuardian {
    volume: BoundsVolume,
    last_valid_pose: Option<CameraPose>,
    correction_duration: Duration,
}

impl BoundsGuardian {
    /// Build the guardian, resolving the constrained-device correction
    /// duration once.
    #[must_use]
    pub fn new(opts: &BoundsOptions, caps: &DeviceCapabilities) -> Self {
        let ms = if caps.is_constrained() {
            opts.constrained_correction_duration_ms
        } else {
            opts.correction_duration_ms
        };
        Self {
            volume: BoundsVolume::from_options(opts),
            last_valid_pose: None,
            correction_duration: Duration::from_millis(ms),
        }
    }

    /// Check the pose for this tick.
    ///
    /// Skipped while a transition is in flight, since the choreographer
    /// only interpolates between vetted viewpoints. Returns `true` when
    /// the pose has escaped and a corrective transition should be
    /// requested.
    pub fn inspect(&mut self, pose: &CameraPose, transitioning: bool) -> bool {
        if transitioning {
            return false;
        }
        if self.volume.contains(pose) {
            self.last_valid_pose = Some(*pose);
            false
        } else {
            log::warn!(
                "camera escaped bounds at position {:?}, target {:?}",
                pose.position,
                pose.target
            );
            true
        }
    }

    /// The most recent pose observed inside the volume, if any.
    #[must_use]
    pub fn last_valid_pose(&self) -> Option<&CameraPose> {
        self.last_valid_pose.as_ref()
    }

    /// Duration to use for the corrective transition.
    #[must_use]
    pub fn correction_duration(&self) -> Duration {
        self.correction_duration
    }

    /// The safe volume being enforced.
    #[must_use]
    pub fn volume(&self) -> &BoundsVolume {
        &self.volume
    }
}
