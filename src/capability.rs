//! Injected device-capability descriptor.
//!
//! The core never inspects the platform; the embedding application fills
//! this struct in (from its own GPU/UA/heuristics layer) and the crate
//! only consumes the derived constrained-mode boolean at construction
//! time.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Device capability descriptor supplied by the embedder.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[serde(default)]
pub struct DeviceCapabilities {
    /// Whether the user agent reports a mobile device.
    pub mobile: bool,
    /// Whether the GPU renderer string matched a known low-end pattern.
    pub low_end_gpu: bool,
    /// Reported device memory in gigabytes.
    pub device_memory_gb: f32,
    /// Logical CPU core count.
    pub logical_cores: u32,
    /// Screen width in physical pixels.
    pub screen_width: u32,
    /// Screen height in physical pixels.
    pub screen_height: u32,
}

impl DeviceCapabilities {
    /// A desktop-class device: nothing triggers constrained mode.
    #[must_use]
    pub fn unconstrained() -> Self {
        Self {
            mobile: false,
            low_end_gpu: false,
            device_memory_gb: 8.0,
            logical_cores: 8,
            screen_width: 1920,
            screen_height: 1080,
        }
    }

    /// Whether the device should run in reduced-performance mode.
    ///
    /// Any single weak signal is enough: mobile UA, low-end GPU, less
    /// than 4 GB memory, fewer than 4 cores, or a sub-1080p screen.
    #[must_use]
    pub fn is_constrained(&self) -> bool {
        self.mobile
            || self.low_end_gpu
            || self.device_memory_gb < 4.0
            || self.logical_cores < 4
            || self.screen_width < 1920
            || self.screen_height < 1080
    }
}

impl Default for DeviceCapabilities {
    fn default() -> Self {
        Self::unconstrained()
    }
}
