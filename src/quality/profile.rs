//! Render parameters derived from a scalar quality level.

use web_time::Duration;

use crate::options::QualityOptions;

/// Concrete render parameters for one quality level, handed to the
/// embedder whenever the controller steps.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QualityProfile {
    /// Scalar quality level in (0, 1].
    pub level: f32,
    /// Upper bound on the device pixel ratio the renderer should honor.
    pub max_pixel_ratio: f32,
    /// Shader effect element count.
    pub effect_density: u32,
    /// Shader effect intensity.
    pub effect_intensity: f32,
    /// Glow pass intensity.
    pub glow_intensity: f32,
    /// Desired interval between rendered frames.
    pub target_frame_interval: Duration,
}

impl QualityProfile {
    /// Derive the profile for a quality level.
    ///
    /// Pixel ratio degrades in bands rather than linearly: full quality
    /// allows 2x, mid levels 1.5x, low levels 1x. Below 0.6 the frame
    /// pacing target also halves to 30 Hz.
    #[must_use]
    pub fn for_level(level: f32, opts: &QualityOptions) -> Self {
        let max_pixel_ratio = if level >= 1.0 {
            2.0
        } else if level > 0.6 {
            1.5
        } else {
            1.0
        };
        let target_frame_interval = if level > 0.6 {
            Duration::from_secs_f64(1.0 / 60.0)
        } else {
            Duration::from_secs_f64(1.0 / 30.0)
        };
        #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let effect_density = (opts.base_effect_density as f32 * level).floor() as u32;

        Self {
            level,
            max_pixel_ratio,
            effect_density,
            effect_intensity: opts.base_effect_intensity * level,
            glow_intensity: opts.base_glow_intensity * level,
            target_frame_interval,
        }
    }
}
