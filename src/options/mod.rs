//! Centralized configuration with TOML preset support.
//!
//! All tweakable settings (viewpoints, transition timing, idle orbit,
//! pointer reactivity, quality control, bounds) are consolidated here.
//! Options serialize to/from TOML for embedder presets. Constrained-device
//! variants live next to their base values and are resolved once at
//! director construction.

mod bounds;
mod choreography;
mod idle;
mod pointer;
mod quality;
mod viewpoints;

use std::path::Path;

pub use bounds::BoundsOptions;
pub use choreography::ChoreographyOptions;
pub use idle::IdleOptions;
pub use pointer::PointerOptions;
pub use quality::QualityOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
pub use viewpoints::{ViewpointEntry, ViewpointOptions};

use crate::error::VantageError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[idle]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Named camera viewpoints.
    pub viewpoints: ViewpointOptions,
    /// Camera transition timing.
    pub choreography: ChoreographyOptions,
    /// Idle orbit behavior.
    pub idle: IdleOptions,
    /// Pointer-reactive offset behavior.
    pub pointer: PointerOptions,
    /// Adaptive quality control.
    pub quality: QualityOptions,
    /// Safe camera volume.
    pub bounds: BoundsOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, VantageError> {
        let content = std::fs::read_to_string(path).map_err(VantageError::Io)?;
        toml::from_str(&content)
            .map_err(|e| VantageError::OptionsParse(e.to_string()))
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), VantageError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| VantageError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(VantageError::Io)?;
        }
        std::fs::write(path, content).map_err(VantageError::Io)
    }
}
