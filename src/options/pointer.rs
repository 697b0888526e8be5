use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Pointer Reactivity", inline)]
#[serde(default)]
/// Pointer-reactive offset parameters.
pub struct PointerOptions {
    /// How strongly normalized pointer position pulls the subject.
    #[schemars(title = "Reaction Intensity", range(min = 0.0, max = 1.0), extend("step" = 0.01))]
    pub intensity: f32,
    /// Intensity on constrained devices.
    #[schemars(skip)]
    pub constrained_intensity: f32,
    /// Exponential damping factor per update (higher = smoother).
    #[schemars(title = "Dampening", range(min = 0.5, max = 0.99), extend("step" = 0.01))]
    pub damping: f32,
    /// Damping on constrained devices.
    #[schemars(skip)]
    pub constrained_damping: f32,
    /// Maximum horizontal offset from the rest pose.
    #[schemars(skip)]
    pub max_movement: f32,
    /// Horizontal clamp on constrained devices.
    #[schemars(skip)]
    pub constrained_max_movement: f32,
    /// Maximum vertical float from the rest pose.
    #[schemars(skip)]
    pub max_float: f32,
    /// Vertical clamp on constrained devices.
    #[schemars(skip)]
    pub constrained_max_float: f32,
    /// Minimum interval between pointer samples, in milliseconds.
    #[schemars(skip)]
    pub update_interval_ms: u64,
    /// Sample interval on constrained devices.
    #[schemars(skip)]
    pub constrained_update_interval_ms: u64,
    /// Gain applied to the raw inter-sample delta to estimate velocity.
    #[schemars(skip)]
    pub velocity_gain: f32,
    /// How much estimated velocity contributes to the offset.
    #[schemars(skip)]
    pub velocity_influence: f32,
    /// Per-axis clamp on the velocity contribution.
    #[schemars(skip)]
    pub velocity_clamp: f32,
    /// Delay before the first rest-pose readiness check, in milliseconds.
    #[schemars(skip)]
    pub readiness_first_check_ms: u64,
    /// Interval between subsequent readiness checks, in milliseconds.
    #[schemars(skip)]
    pub readiness_retry_ms: u64,
}

impl Default for PointerOptions {
    fn default() -> Self {
        Self {
            intensity: 0.25,
            constrained_intensity: 0.15,
            damping: 0.92,
            constrained_damping: 0.88,
            max_movement: 0.15,
            constrained_max_movement: 0.1,
            max_float: 0.08,
            constrained_max_float: 0.05,
            update_interval_ms: 16,
            constrained_update_interval_ms: 50,
            velocity_gain: 5.0,
            velocity_influence: 0.2,
            velocity_clamp: 0.05,
            readiness_first_check_ms: 100,
            readiness_retry_ms: 500,
        }
    }
}
