//! A single in-flight camera transition episode.

use web_time::{Duration, Instant};

use crate::pose::CameraPose;

/// One-shot hook invoked when a transition completes.
pub type CompletionHook = Box<dyn FnOnce()>;

/// State of one time-bounded interpolation toward a named viewpoint.
///
/// Created by [`Choreographer::request_transition`]
/// (crate::choreography::Choreographer::request_transition) and destroyed
/// on completion. Progress is always derived from elapsed wall-clock time,
/// never from frame counts, so dropped frames cannot stretch the episode.
pub struct ActiveTransition {
    from: CameraPose,
    to: CameraPose,
    to_name: String,
    started: Instant,
    duration: Duration,
    on_complete: Option<CompletionHook>,
}

impl ActiveTransition {
    pub(crate) fn new(
        from: CameraPose,
        to: CameraPose,
        to_name: String,
        started: Instant,
        duration: Duration,
        on_complete: Option<CompletionHook>,
    ) -> Self {
        Self {
            from,
            to,
            to_name,
            started,
            duration,
            on_complete,
        }
    }

    /// Normalized progress in [0, 1] at the given time.
    ///
    /// Zero-duration transitions report 1.0 immediately.
    #[must_use]
    pub fn progress(&self, now: Instant) -> f32 {
        let elapsed = now.saturating_duration_since(self.started);

        if self.duration.is_zero() {
            1.0
        } else {
            (elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
        }
    }

    /// Write the interpolated pose for an eased progress value.
    pub(crate) fn apply(&self, eased: f32, pose: &mut CameraPose) {
        *pose = CameraPose::lerp_between(&self.from, &self.to, eased);
    }

    /// The exact destination pose, for completion snapping.
    pub(crate) fn end_pose(&self) -> CameraPose {
        self.to
    }

    /// Name of the destination viewpoint.
    #[must_use]
    pub fn destination(&self) -> &str {
        &self.to_name
    }

    /// When the episode started.
    #[must_use]
    pub fn started(&self) -> Instant {
        self.started
    }

    /// Wall-clock duration of the episode.
    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    pub(crate) fn take_hook(&mut self) -> Option<CompletionHook> {
        self.on_complete.take()
    }
}

impl std::fmt::Debug for ActiveTransition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ActiveTransition")
            .field("to_name", &self.to_name)
            .field("duration", &self.duration)
            .field("has_hook", &self.on_complete.is_some())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::*;

    fn make(started: Instant, millis: u64) -> ActiveTransition {
        ActiveTransition::new(
            CameraPose::new(Vec3::ZERO, Vec3::ZERO),
            CameraPose::new(Vec3::new(4.0, 5.0, 10.0), Vec3::new(0.0, 1.5, 0.0)),
            "default".to_owned(),
            started,
            Duration::from_millis(millis),
            None,
        )
    }

    #[test]
    fn test_progress_over_time() {
        let start = Instant::now();
        let t = make(start, 1000);

        assert!((t.progress(start) - 0.0).abs() < 1e-6);
        let mid = start + Duration::from_millis(500);
        assert!((t.progress(mid) - 0.5).abs() < 0.01);
        let end = start + Duration::from_millis(1000);
        assert!((t.progress(end) - 1.0).abs() < 1e-6);
        let past = start + Duration::from_millis(2000);
        assert_eq!(t.progress(past), 1.0);
    }

    #[test]
    fn test_progress_monotonic() {
        let start = Instant::now();
        let t = make(start, 700);
        let mut prev = 0.0;
        for ms in (0..=900).step_by(30) {
            let p = t.progress(start + Duration::from_millis(ms));
            assert!(p >= prev);
            prev = p;
        }
    }

    #[test]
    fn test_zero_duration_is_instantly_complete() {
        let start = Instant::now();
        let t = make(start, 0);
        assert_eq!(t.progress(start), 1.0);
    }

    #[test]
    fn test_time_before_start_clamps_to_zero() {
        let start = Instant::now() + Duration::from_millis(100);
        let t = make(start, 1000);
        // Instant math saturates, so a now before started reads as 0
        assert_eq!(t.progress(Instant::now()), 0.0);
    }

    #[test]
    fn test_apply_writes_interpolated_pose() {
        let start = Instant::now();
        let t = make(start, 1000);
        let mut pose = CameraPose::new(Vec3::ZERO, Vec3::ZERO);

        t.apply(0.5, &mut pose);
        assert!((pose.position - Vec3::new(2.0, 2.5, 5.0)).length() < 1e-5);
        assert!((pose.target - Vec3::new(0.0, 0.75, 0.0)).length() < 1e-5);
    }
}
