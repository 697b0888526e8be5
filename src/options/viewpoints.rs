use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A named camera pose in configuration form.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[serde(default)]
pub struct ViewpointEntry {
    /// Camera eye position, `[x, y, z]`.
    pub position: [f32; 3],
    /// Look-at target, `[x, y, z]`.
    pub target: [f32; 3],
}

impl Default for ViewpointEntry {
    fn default() -> Self {
        Self {
            position: [4.0, 5.0, 10.0],
            target: [0.0, 1.5, 0.0],
        }
    }
}

/// The standard named viewpoints. Immutable once the director is built.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[serde(default)]
pub struct ViewpointOptions {
    /// Resting view of the whole scene.
    pub default: ViewpointEntry,
    /// Close-up on the focal subject.
    pub focused: ViewpointEntry,
    /// Pulled-back establishing view.
    pub overview: ViewpointEntry,
    /// Anchor pose for the idle orbit.
    pub idle: ViewpointEntry,
}

impl Default for ViewpointOptions {
    fn default() -> Self {
        Self {
            default: ViewpointEntry {
                position: [4.0, 5.0, 10.0],
                target: [0.0, 1.5, 0.0],
            },
            focused: ViewpointEntry {
                position: [0.0, 3.0, 5.5],
                target: [0.0, 2.3, 0.0],
            },
            overview: ViewpointEntry {
                position: [6.0, 6.0, 12.0],
                target: [0.0, 1.5, 0.0],
            },
            idle: ViewpointEntry {
                position: [3.0, 4.5, 9.0],
                target: [0.0, 1.5, 0.0],
            },
        }
    }
}
