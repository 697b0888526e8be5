use std::f32::consts::PI;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Idle Orbit", inline)]
#[serde(default)]
/// Autonomous idle-orbit parameters.
pub struct IdleOptions {
    /// Inactivity delay before orbiting begins, in milliseconds.
    #[schemars(title = "Inactivity Delay", range(min = 1000.0, max = 600000.0))]
    pub inactivity_delay_ms: u64,
    /// Much longer delay used while the subject itself is focused.
    #[schemars(title = "Focused Inactivity Delay")]
    pub focused_inactivity_delay_ms: u64,
    /// Delay multiplier on constrained devices.
    #[schemars(skip)]
    pub constrained_delay_scale: f32,
    /// Focused-delay multiplier on constrained devices.
    #[schemars(skip)]
    pub constrained_focused_delay_scale: f32,
    /// Orbit angular speed in radians per frame.
    #[schemars(title = "Rotation Speed", range(min = 0.00001, max = 0.01))]
    pub rotation_speed: f32,
    /// Speed multiplier on constrained devices.
    #[schemars(skip)]
    pub constrained_speed_scale: f32,
    /// Orbit circle radius.
    pub radius: f32,
    /// Camera height while orbiting.
    pub height: f32,
    /// Fixed look-at target while orbiting, `[x, y, z]`.
    #[schemars(skip)]
    pub orbit_target: [f32; 3],
    /// Total rotation before the orbit exits, in radians.
    ///
    /// A tuned constant from the original choreography: deliberately an
    /// incomplete lap (1.2π) so the exit never lands on the entry seam.
    #[schemars(skip)]
    pub max_rotation: f32,
    /// Duration of the eased entry onto the orbit circle, in milliseconds.
    #[schemars(skip)]
    pub entry_duration_ms: u64,
    /// Entry duration on constrained devices.
    #[schemars(skip)]
    pub constrained_entry_duration_ms: u64,
    /// Duration of the return-to-default transition, in milliseconds.
    #[schemars(skip)]
    pub return_duration_ms: u64,
    /// Return duration on constrained devices.
    #[schemars(skip)]
    pub constrained_return_duration_ms: u64,
    /// Breathing pause between orbit episodes, in milliseconds.
    #[schemars(skip)]
    pub reentry_pause_ms: u64,
    /// Re-entry pause on constrained devices.
    #[schemars(skip)]
    pub constrained_reentry_pause_ms: u64,
}

impl Default for IdleOptions {
    fn default() -> Self {
        Self {
            inactivity_delay_ms: 10000,
            focused_inactivity_delay_ms: 180000,
            constrained_delay_scale: 1.5,
            constrained_focused_delay_scale: 1.2,
            rotation_speed: 0.0002,
            constrained_speed_scale: 0.7,
            radius: 7.0,
            height: 4.2,
            orbit_target: [0.0, 1.5, 0.0],
            max_rotation: PI * 1.2,
            entry_duration_ms: 1500,
            constrained_entry_duration_ms: 1200,
            return_duration_ms: 1000,
            constrained_return_duration_ms: 800,
            reentry_pause_ms: 2000,
            constrained_reentry_pause_ms: 1500,
        }
    }
}
