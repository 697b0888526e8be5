use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Choreography", inline)]
#[serde(default)]
/// Camera transition timing parameters.
pub struct ChoreographyOptions {
    /// Default transition duration in milliseconds when the caller does
    /// not supply one.
    #[schemars(title = "Transition Duration", range(min = 100.0, max = 10000.0))]
    pub default_duration_ms: u64,
    /// Duration multiplier applied on constrained devices.
    #[schemars(skip)]
    pub constrained_duration_scale: f32,
    /// Floor for scaled-down durations in milliseconds.
    #[schemars(skip)]
    pub constrained_min_duration_ms: u64,
    /// On constrained devices, interpolation work runs on every Nth
    /// frame only (progress is still wall-clock).
    #[schemars(skip)]
    pub constrained_frame_skip: u32,
    /// Delay before the startup sequence begins, in milliseconds.
    #[schemars(skip)]
    pub startup_delay_ms: u64,
    /// Startup delay on constrained devices.
    #[schemars(skip)]
    pub constrained_startup_delay_ms: u64,
    /// Duration of the startup focus transition, in milliseconds.
    #[schemars(skip)]
    pub startup_duration_ms: u64,
    /// Startup focus duration on constrained devices.
    #[schemars(skip)]
    pub constrained_startup_duration_ms: u64,
}

impl Default for ChoreographyOptions {
    fn default() -> Self {
        Self {
            default_duration_ms: 1500,
            constrained_duration_scale: 0.7,
            constrained_min_duration_ms: 800,
            constrained_frame_skip: 2,
            startup_delay_ms: 1000,
            constrained_startup_delay_ms: 500,
            startup_duration_ms: 2000,
            constrained_startup_duration_ms: 1500,
        }
    }
}
