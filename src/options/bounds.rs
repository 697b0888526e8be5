use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Camera Bounds", inline)]
#[serde(default)]
/// Safe axis-aligned volume for camera position and target.
pub struct BoundsOptions {
    /// Minimum allowed camera position, `[x, y, z]`.
    pub position_min: [f32; 3],
    /// Maximum allowed camera position, `[x, y, z]`.
    pub position_max: [f32; 3],
    /// Minimum allowed target, `[x, y, z]`.
    pub target_min: [f32; 3],
    /// Maximum allowed target, `[x, y, z]`.
    pub target_max: [f32; 3],
    /// Duration of the corrective transition, in milliseconds.
    #[schemars(skip)]
    pub correction_duration_ms: u64,
    /// Correction duration on constrained devices.
    #[schemars(skip)]
    pub constrained_correction_duration_ms: u64,
}

impl Default for BoundsOptions {
    fn default() -> Self {
        Self {
            position_min: [-15.0, 2.0, 3.0],
            position_max: [15.0, 12.0, 20.0],
            target_min: [-5.0, 0.0, -3.0],
            target_max: [5.0, 5.0, 3.0],
            correction_duration_ms: 1000,
            constrained_correction_duration_ms: 800,
        }
    }
}
