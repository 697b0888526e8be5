//! Adaptive quality controller.
//!
//! Watches aggregated frame-rate samples and walks a fixed ladder of
//! quality levels one step per evaluation tick. Both stepping rules are
//! conjunctive: the mean and the trailing minimum must agree before the
//! level moves, so a single stutter or a single good second never flips
//! the level back and forth.

mod monitor;
mod profile;

pub use monitor::FrameRateMonitor;
pub use profile::QualityProfile;
use web_time::{Duration, Instant};

use crate::options::QualityOptions;

/// Callback invoked when the quality level steps.
pub type QualityObserver = Box<dyn FnMut(&QualityChange)>;

/// Emitted when the controller steps to a new level.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QualityChange {
    /// The new scalar quality level.
    pub level: f32,
    /// Render parameters derived from the new level.
    pub profile: QualityProfile,
}

/// Steps render quality up and down to defend a target frame rate.
pub struct QualityController {
    opts: QualityOptions,
    monitor: FrameRateMonitor,
    level_index: usize,
    last_check: Instant,
    check_interval: Duration,
    observer: Option<QualityObserver>,
}

impl QualityController {
    /// Build the controller starting at the best level.
    #[must_use]
    pub fn new(opts: &QualityOptions, now: Instant) -> Self {
        Self {
            monitor: FrameRateMonitor::new(opts.history_capacity),
            level_index: 0,
            last_check: now,
            check_interval: Duration::from_millis(opts.check_interval_ms),
            observer: None,
            opts: opts.clone(),
        }
    }

    /// Count one rendered frame toward the FPS history.
    pub fn record_frame(&mut self, now: Instant) {
        self.monitor.record_frame(now);
    }

    /// Run the periodic evaluation if it is due.
    ///
    /// Moves at most one ladder step per tick. Quiet until enough samples
    /// have accumulated, and holds at the floor and the ceiling.
    pub fn evaluate(&mut self, now: Instant) -> Option<QualityChange> {
        if now.saturating_duration_since(self.last_check) < self.check_interval {
            return None;
        }
        self.last_check = now;

        if self.monitor.len() < self.opts.min_samples {
            return None;
        }

        let target = self.opts.target_fps;
        let mean = self.monitor.mean();
        let min = self.monitor.min_of_last(self.opts.min_window);

        let degrade = mean < target * self.opts.degrade_mean_factor
            && min < target * self.opts.degrade_min_factor;
        let improve = mean > target * self.opts.improve_mean_factor
            && min > target * self.opts.improve_min_factor;

        let next = if degrade && self.level_index + 1 < self.opts.levels.len() {
            self.level_index + 1
        } else if improve && self.level_index > 0 {
            self.level_index - 1
        } else {
            return None;
        };

        self.level_index = next;
        let level = self.opts.levels[next];
        log::info!(
            "quality level stepped to {level} (mean {mean:.1} fps, trailing min {min:.1} fps)"
        );

        let change = QualityChange {
            level,
            profile: QualityProfile::for_level(level, &self.opts),
        };
        if let Some(observer) = self.observer.as_mut() {
            observer(&change);
        }
        Some(change)
    }

    /// Register a callback fired on every level change.
    pub fn set_observer(&mut self, observer: QualityObserver) {
        self.observer = Some(observer);
    }

    /// The current scalar quality level.
    #[must_use]
    pub fn current_level(&self) -> f32 {
        self.opts.levels[self.level_index]
    }

    /// Render parameters for the current level.
    #[must_use]
    pub fn current_profile(&self) -> QualityProfile {
        QualityProfile::for_level(self.current_level(), &self.opts)
    }

    /// The most recent aggregated FPS sample.
    #[must_use]
    pub fn current_fps(&self) -> f32 {
        self.monitor.current_fps()
    }

    /// Feed a pre-aggregated FPS sample directly.
    pub fn record_sample(&mut self, fps: f32) {
        self.monitor.record_sample(fps);
    }
}

impl std::fmt::Debug for QualityController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QualityController")
            .field("level", &self.current_level())
            .field("samples", &self.monitor.len())
            .finish_non_exhaustive()
    }
}
