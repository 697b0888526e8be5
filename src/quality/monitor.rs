//! Frame-rate sampling over a fixed-capacity history.

use std::collections::VecDeque;

use web_time::{Duration, Instant};

const AGGREGATION_WINDOW: Duration = Duration::from_secs(1);

/// Aggregates per-frame timestamps into once-per-second FPS samples.
#[derive(Debug)]
pub struct FrameRateMonitor {
    capacity: usize,
    samples: VecDeque<f32>,
    frames_in_window: u32,
    window_start: Option<Instant>,
}

impl FrameRateMonitor {
    /// Create a monitor keeping at most `capacity` one-second samples.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            samples: VecDeque::with_capacity(capacity),
            frames_in_window: 0,
            window_start: None,
        }
    }

    /// Count one rendered frame. Roughly once per second the window
    /// collapses into a single FPS sample.
    pub fn record_frame(&mut self, now: Instant) {
        let start = match self.window_start {
            Some(start) => start,
            None => {
                self.window_start = Some(now);
                self.frames_in_window = 1;
                return;
            }
        };

        self.frames_in_window += 1;
        let elapsed = now.saturating_duration_since(start);
        if elapsed >= AGGREGATION_WINDOW {
            #[allow(clippy::cast_precision_loss)]
            let fps = self.frames_in_window as f32 / elapsed.as_secs_f32();
            self.record_sample(fps);
            self.window_start = Some(now);
            self.frames_in_window = 0;
        }
    }

    /// Push a pre-aggregated FPS sample, evicting the oldest at capacity.
    pub fn record_sample(&mut self, fps: f32) {
        if self.samples.len() == self.capacity {
            let _ = self.samples.pop_front();
        }
        self.samples.push_back(fps);
    }

    /// Number of samples held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Whether no samples have been aggregated yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Mean FPS over the whole history. Zero when empty.
    #[must_use]
    pub fn mean(&self) -> f32 {
        if self.samples.is_empty() {
            return 0.0;
        }
        #[allow(clippy::cast_precision_loss)]
        let n = self.samples.len() as f32;
        self.samples.iter().sum::<f32>() / n
    }

    /// Minimum FPS over the trailing `n` samples. Zero when empty.
    #[must_use]
    pub fn min_of_last(&self, n: usize) -> f32 {
        let skip = self.samples.len().saturating_sub(n);
        let min = self
            .samples
            .iter()
            .skip(skip)
            .copied()
            .fold(f32::INFINITY, f32::min);
        if min.is_finite() { min } else { 0.0 }
    }

    /// The most recent sample. Zero when empty.
    #[must_use]
    pub fn current_fps(&self) -> f32 {
        self.samples.back().copied().unwrap_or(0.0)
    }
}
