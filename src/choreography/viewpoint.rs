//! Named camera viewpoints.

use std::collections::HashMap;

use glam::Vec3;

use crate::options::{ViewpointEntry, ViewpointOptions};
use crate::pose::CameraPose;

/// Name of the resting viewpoint.
pub const DEFAULT: &str = "default";
/// Name of the close-up viewpoint on the focal subject.
pub const FOCUSED: &str = "focused";
/// Name of the pulled-back establishing viewpoint.
pub const OVERVIEW: &str = "overview";
/// Name of the idle-orbit anchor viewpoint.
pub const IDLE: &str = "idle";

/// A named target camera position + look-at point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewpoint {
    /// Camera eye position.
    pub position: Vec3,
    /// Look-at target.
    pub target: Vec3,
}

impl Viewpoint {
    /// The viewpoint as a camera pose.
    #[must_use]
    pub fn pose(&self) -> CameraPose {
        CameraPose::new(self.position, self.target)
    }
}

impl From<&ViewpointEntry> for Viewpoint {
    fn from(entry: &ViewpointEntry) -> Self {
        Self {
            position: Vec3::from_array(entry.position),
            target: Vec3::from_array(entry.target),
        }
    }
}

/// Immutable set of named viewpoints, fixed at construction.
#[derive(Debug, Clone)]
pub struct ViewpointSet {
    entries: HashMap<String, Viewpoint>,
}

impl ViewpointSet {
    /// Build the standard set (`default`, `focused`, `overview`, `idle`)
    /// from configuration.
    #[must_use]
    pub fn from_options(opts: &ViewpointOptions) -> Self {
        let mut entries = HashMap::new();
        let _ = entries.insert(DEFAULT.to_owned(), Viewpoint::from(&opts.default));
        let _ = entries.insert(FOCUSED.to_owned(), Viewpoint::from(&opts.focused));
        let _ = entries.insert(OVERVIEW.to_owned(), Viewpoint::from(&opts.overview));
        let _ = entries.insert(IDLE.to_owned(), Viewpoint::from(&opts.idle));
        Self { entries }
    }

    /// Add or replace a named viewpoint. Intended for embedder setup
    /// before the director is built; viewpoints never change at runtime.
    pub fn insert(&mut self, name: impl Into<String>, viewpoint: Viewpoint) {
        let _ = self.entries.insert(name.into(), viewpoint);
    }

    /// Look up a viewpoint by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Viewpoint> {
        self.entries.get(name)
    }

    /// Whether a viewpoint with this name exists.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Iterate over viewpoint names (unordered).
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

impl Default for ViewpointSet {
    fn default() -> Self {
        Self::from_options(&ViewpointOptions::default())
    }
}
