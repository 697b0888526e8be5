//! Small shared utilities.

pub mod easing;

pub use easing::EasingFunction;
