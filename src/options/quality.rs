use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Adaptive Quality", inline)]
#[serde(default)]
/// Adaptive quality controller parameters.
pub struct QualityOptions {
    /// Target frame rate the controller defends.
    #[schemars(title = "Target FPS", range(min = 15.0, max = 120.0), extend("step" = 1.0))]
    pub target_fps: f32,
    /// Ordered quality levels, best first. Stepping moves one index per
    /// evaluation tick.
    #[schemars(skip)]
    pub levels: Vec<f32>,
    /// Fixed capacity of the frame-rate sample ring buffer.
    #[schemars(skip)]
    pub history_capacity: usize,
    /// Minimum samples before any evaluation happens.
    #[schemars(skip)]
    pub min_samples: usize,
    /// How many trailing samples feed the minimum classifier.
    #[schemars(skip)]
    pub min_window: usize,
    /// Interval between evaluation ticks, in milliseconds.
    #[schemars(skip)]
    pub check_interval_ms: u64,
    /// Step down when mean FPS falls below `target * degrade_mean_factor`.
    #[schemars(skip)]
    pub degrade_mean_factor: f32,
    /// ...and the trailing minimum falls below `target * degrade_min_factor`.
    #[schemars(skip)]
    pub degrade_min_factor: f32,
    /// Step up when mean FPS exceeds `target * improve_mean_factor`.
    #[schemars(skip)]
    pub improve_mean_factor: f32,
    /// ...and the trailing minimum exceeds `target * improve_min_factor`.
    #[schemars(skip)]
    pub improve_min_factor: f32,
    /// Full-quality shader effect element count (scaled by level).
    #[schemars(skip)]
    pub base_effect_density: u32,
    /// Full-quality shader effect intensity (scaled by level).
    #[schemars(skip)]
    pub base_effect_intensity: f32,
    /// Full-quality glow intensity (scaled by level).
    #[schemars(skip)]
    pub base_glow_intensity: f32,
}

impl Default for QualityOptions {
    fn default() -> Self {
        Self {
            target_fps: 30.0,
            levels: vec![1.0, 0.8, 0.6, 0.4],
            history_capacity: 60,
            min_samples: 10,
            min_window: 10,
            check_interval_ms: 2000,
            degrade_mean_factor: 0.8,
            degrade_min_factor: 0.6,
            improve_mean_factor: 1.1,
            improve_min_factor: 0.9,
            base_effect_density: 800,
            base_effect_intensity: 0.1,
            base_glow_intensity: 0.02,
        }
    }
}
