//! Easing functions for camera interpolation.
//!
//! Pure numeric curves mapping normalized progress to eased progress.
//! Every transition in the crate goes through one of these.

/// Easing function variants for transition curves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EasingFunction {
    /// Linear interpolation (no easing).
    Linear,
    /// Quadratic ease-out (fast start, slow end).
    QuadraticOut,
    /// Cubic ease-in-out: slow start, fast middle, slow end.
    /// Formula: `t < 0.5: 4t³; else: 1 - ((-2t + 2)³) / 2`.
    CubicInOut,
}

impl EasingFunction {
    /// Default easing for camera choreography: cubic ease-in-out.
    pub const DEFAULT: EasingFunction = EasingFunction::CubicInOut;

    /// Evaluate the easing function at time t.
    ///
    /// Input t is clamped to [0.0, 1.0]. Returns the eased value,
    /// also in [0.0, 1.0].
    #[inline]
    #[must_use]
    pub fn evaluate(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);

        match self {
            EasingFunction::Linear => t,
            EasingFunction::QuadraticOut => {
                let omt = 1.0 - t;
                1.0 - omt * omt
            }
            EasingFunction::CubicInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    let a = -2.0 * t + 2.0;
                    1.0 - a * a * a / 2.0
                }
            }
        }
    }
}

impl Default for EasingFunction {
    #[inline]
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_endpoints() {
        let linear = EasingFunction::Linear;
        assert_eq!(linear.evaluate(0.0), 0.0);
        assert_eq!(linear.evaluate(0.5), 0.5);
        assert_eq!(linear.evaluate(1.0), 1.0);
    }

    #[test]
    fn test_cubic_in_out_endpoints() {
        let ease = EasingFunction::CubicInOut;
        assert_eq!(ease.evaluate(0.0), 0.0);
        assert!((ease.evaluate(1.0) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_cubic_in_out_midpoint() {
        // 4 * 0.5³ = 0.5, so the two halves meet exactly at the midpoint
        let ease = EasingFunction::CubicInOut;
        assert!((ease.evaluate(0.5) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_cubic_in_out_shape() {
        // Ease-in-out: slower than linear early, faster than linear late
        let ease = EasingFunction::CubicInOut;
        assert!(ease.evaluate(0.25) < 0.25);
        assert!(ease.evaluate(0.75) > 0.75);
    }

    #[test]
    fn test_cubic_in_out_monotonic() {
        let ease = EasingFunction::CubicInOut;
        let mut prev = 0.0;
        for i in 1..=100 {
            let v = ease.evaluate(i as f32 / 100.0);
            assert!(v >= prev, "not monotonic at step {i}: {v} < {prev}");
            prev = v;
        }
    }

    #[test]
    fn test_input_clamping() {
        let ease = EasingFunction::CubicInOut;
        assert_eq!(ease.evaluate(-0.5), 0.0);
        assert!((ease.evaluate(1.5) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_quadratic_out() {
        let quad_out = EasingFunction::QuadraticOut;
        assert_eq!(quad_out.evaluate(0.0), 0.0);
        assert_eq!(quad_out.evaluate(0.5), 0.75); // 1 - (1-0.5)² = 0.75
        assert_eq!(quad_out.evaluate(1.0), 1.0);
    }

    #[test]
    fn test_default_is_cubic_in_out() {
        assert_eq!(EasingFunction::default(), EasingFunction::CubicInOut);
    }
}
