//! Camera choreographer: a finite-state machine over named viewpoints.
//!
//! At most one transition is in flight at a time; the `Option` holding it
//! is the mutual-exclusion primitive. Requests made while one is active
//! are refused (silent no-op); callers observe completion through the
//! state observer or [`Choreographer::current_viewpoint`].

pub mod transition;
pub mod viewpoint;

pub use transition::{ActiveTransition, CompletionHook};
pub use viewpoint::{Viewpoint, ViewpointSet};
use web_time::{Duration, Instant};

use crate::capability::DeviceCapabilities;
use crate::options::ChoreographyOptions;
use crate::pose::CameraPose;
use crate::util::EasingFunction;

/// Event emitted when a transition reaches its destination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionCompleted {
    /// Name of the viewpoint that was reached.
    pub viewpoint: String,
}

/// Observer invoked with the new viewpoint name on every completion.
pub type StateObserver = Box<dyn FnMut(&str)>;

/// Drives time-bounded eased interpolation of the shared camera pose
/// between named viewpoints.
pub struct Choreographer {
    viewpoints: ViewpointSet,
    current: String,
    transition: Option<ActiveTransition>,
    easing: EasingFunction,

    constrained: bool,
    duration_scale: f32,
    min_duration: Duration,
    default_duration: Duration,
    /// Interpolation work runs every Nth frame on constrained devices.
    /// Progress stays wall-clock, so skipping never stretches an episode.
    frame_skip: u32,
    frame_counter: u32,

    on_state_change: Option<StateObserver>,
}

impl Choreographer {
    /// Build a choreographer over the given viewpoint set.
    #[must_use]
    pub fn new(
        viewpoints: ViewpointSet,
        opts: &ChoreographyOptions,
        caps: &DeviceCapabilities,
    ) -> Self {
        let constrained = caps.is_constrained();
        Self {
            viewpoints,
            current: viewpoint::DEFAULT.to_owned(),
            transition: None,
            easing: EasingFunction::DEFAULT,
            constrained,
            duration_scale: opts.constrained_duration_scale,
            min_duration: Duration::from_millis(opts.constrained_min_duration_ms),
            default_duration: Duration::from_millis(opts.default_duration_ms),
            frame_skip: if constrained { opts.constrained_frame_skip.max(1) } else { 1 },
            frame_counter: 0,
            on_state_change: None,
        }
    }

    /// Start interpolating the camera from `from` to the named viewpoint.
    ///
    /// Returns whether the request was accepted. Refused (and logged at
    /// debug) when the name is unknown or a transition is already active;
    /// a refused request drops its completion hook uninvoked. `duration`
    /// of `None` uses the configured default. On constrained devices the
    /// duration is scaled down and floored.
    pub fn request_transition(
        &mut self,
        name: &str,
        duration: Option<Duration>,
        now: Instant,
        from: &CameraPose,
        on_complete: Option<CompletionHook>,
    ) -> bool {
        if self.transition.is_some() {
            log::debug!("transition to {name} refused: one already active");
            return false;
        }
        let Some(target) = self.viewpoints.get(name) else {
            log::debug!("transition refused: unknown viewpoint {name}");
            return false;
        };

        let duration = self.scale_duration(duration.unwrap_or(self.default_duration));
        self.transition = Some(ActiveTransition::new(
            *from,
            target.pose(),
            name.to_owned(),
            now,
            duration,
            on_complete,
        ));
        // The current name tracks the destination from acceptance on;
        // observers are only notified at completion.
        self.current = name.to_owned();
        log::debug!("camera transition to {name} over {duration:?}");
        true
    }

    /// Advance the active transition, if any, writing the interpolated
    /// pose. Returns a completion event when the destination is reached.
    pub fn advance(
        &mut self,
        now: Instant,
        pose: &mut CameraPose,
    ) -> Option<TransitionCompleted> {
        let progress = self.transition.as_ref().map(|t| t.progress(now))?;
        self.frame_counter = self.frame_counter.wrapping_add(1);

        if progress < 1.0 {
            if self.constrained
                && self.frame_skip > 1
                && self.frame_counter % self.frame_skip != 0
            {
                // Skipped frame. The next worked frame recomputes from
                // elapsed time, so wall-clock duration is unaffected.
                return None;
            }
            let eased = self.easing.evaluate(progress);
            if let Some(t) = self.transition.as_ref() {
                t.apply(eased, pose);
            }
            return None;
        }

        let mut done = self.transition.take()?;
        *pose = done.end_pose();
        if let Some(hook) = done.take_hook() {
            hook();
        }
        let viewpoint = done.destination().to_owned();
        if let Some(observer) = self.on_state_change.as_mut() {
            observer(&viewpoint);
        }
        log::debug!("camera transition complete: {viewpoint}");
        Some(TransitionCompleted { viewpoint })
    }

    /// Whether a transition is in flight.
    #[must_use]
    pub fn is_transitioning(&self) -> bool {
        self.transition.is_some()
    }

    /// Name of the current viewpoint. While a transition is in flight
    /// this names the destination.
    #[must_use]
    pub fn current_viewpoint(&self) -> &str {
        &self.current
    }

    /// The in-flight transition, if any (diagnostics).
    #[must_use]
    pub fn active_transition(&self) -> Option<&ActiveTransition> {
        self.transition.as_ref()
    }

    /// The viewpoint set this choreographer interpolates between.
    #[must_use]
    pub fn viewpoints(&self) -> &ViewpointSet {
        &self.viewpoints
    }

    /// Default duration for requests that do not supply one.
    #[must_use]
    pub fn default_duration(&self) -> Duration {
        self.default_duration
    }

    /// Register the observer notified with each completed viewpoint name.
    pub fn set_state_observer(&mut self, observer: StateObserver) {
        self.on_state_change = Some(observer);
    }

    /// Overwrite the current viewpoint name without a transition.
    ///
    /// Used by the idle generator when its own entry interpolation lands
    /// on the orbit circle.
    pub(crate) fn set_current_viewpoint(&mut self, name: &str) {
        self.current = name.to_owned();
    }

    fn scale_duration(&self, duration: Duration) -> Duration {
        if !self.constrained {
            return duration;
        }
        let scaled = duration.mul_f32(self.duration_scale);
        scaled.max(self.min_duration)
    }
}

impl std::fmt::Debug for Choreographer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Choreographer")
            .field("current", &self.current)
            .field("transitioning", &self.is_transitioning())
            .field("constrained", &self.constrained)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use glam::Vec3;

    use super::*;
    use crate::options::ViewpointOptions;

    fn make() -> (Choreographer, CameraPose) {
        let set = ViewpointSet::from_options(&ViewpointOptions::default());
        let choreographer = Choreographer::new(
            set,
            &ChoreographyOptions::default(),
            &DeviceCapabilities::unconstrained(),
        );
        let pose = CameraPose::new(Vec3::new(4.0, 5.0, 10.0), Vec3::new(0.0, 1.5, 0.0));
        (choreographer, pose)
    }

    fn make_constrained() -> (Choreographer, CameraPose) {
        let set = ViewpointSet::from_options(&ViewpointOptions::default());
        let caps = DeviceCapabilities {
            mobile: true,
            ..DeviceCapabilities::unconstrained()
        };
        let choreographer =
            Choreographer::new(set, &ChoreographyOptions::default(), &caps);
        let pose = CameraPose::new(Vec3::new(4.0, 5.0, 10.0), Vec3::new(0.0, 1.5, 0.0));
        (choreographer, pose)
    }

    #[test]
    fn transition_reaches_destination_exactly() {
        let (mut c, mut pose) = make();
        let start = Instant::now();

        assert!(c.request_transition(
            viewpoint::FOCUSED,
            Some(Duration::from_millis(1000)),
            start,
            &pose,
            None,
        ));

        // Partway: between endpoints, moving toward the target
        let _ = c.advance(start + Duration::from_millis(500), &mut pose);
        assert!(c.is_transitioning());

        let done = c.advance(start + Duration::from_millis(1000), &mut pose);
        assert_eq!(
            done,
            Some(TransitionCompleted { viewpoint: "focused".to_owned() })
        );
        assert_eq!(pose.position, Vec3::new(0.0, 3.0, 5.5));
        assert_eq!(pose.target, Vec3::new(0.0, 2.3, 0.0));
        assert_eq!(c.current_viewpoint(), "focused");
        assert!(!c.is_transitioning());
    }

    #[test]
    fn pose_never_overshoots() {
        let (mut c, mut pose) = make();
        let start = Instant::now();
        let _ = c.request_transition(
            viewpoint::FOCUSED,
            Some(Duration::from_millis(1000)),
            start,
            &pose,
            None,
        );
        // Well past the duration
        let _ = c.advance(start + Duration::from_millis(5000), &mut pose);
        assert_eq!(pose.position, Vec3::new(0.0, 3.0, 5.5));
        assert_eq!(pose.target, Vec3::new(0.0, 2.3, 0.0));
    }

    #[test]
    fn second_request_while_active_is_refused() {
        let (mut c, pose) = make();
        let start = Instant::now();
        assert!(c.request_transition(
            viewpoint::FOCUSED,
            Some(Duration::from_millis(1000)),
            start,
            &pose,
            None,
        ));

        let accepted = c.request_transition(
            viewpoint::OVERVIEW,
            Some(Duration::from_millis(200)),
            start + Duration::from_millis(100),
            &pose,
            None,
        );
        assert!(!accepted);

        // In-flight episode is untouched
        let active = c.active_transition().unwrap();
        assert_eq!(active.destination(), "focused");
        assert_eq!(active.duration(), Duration::from_millis(1000));
        assert_eq!(active.started(), start);
        assert_eq!(c.current_viewpoint(), "focused");
    }

    #[test]
    fn refused_request_drops_hook_uninvoked() {
        let (mut c, pose) = make();
        let start = Instant::now();
        let _ = c.request_transition(
            viewpoint::FOCUSED,
            None,
            start,
            &pose,
            None,
        );

        let fired = Rc::new(Cell::new(false));
        let fired2 = Rc::clone(&fired);
        let _ = c.request_transition(
            viewpoint::OVERVIEW,
            None,
            start,
            &pose,
            Some(Box::new(move || fired2.set(true))),
        );
        assert!(!fired.get());
    }

    #[test]
    fn unknown_viewpoint_is_silent_noop() {
        let (mut c, mut pose) = make();
        let start = Instant::now();
        let before = pose;
        assert!(!c.request_transition("cinematic", None, start, &pose, None));
        assert!(c.advance(start + Duration::from_millis(16), &mut pose).is_none());
        assert_eq!(pose, before);
        assert_eq!(c.current_viewpoint(), "default");
    }

    #[test]
    fn completion_hook_fires_exactly_once() {
        let (mut c, mut pose) = make();
        let start = Instant::now();
        let count = Rc::new(Cell::new(0u32));
        let count2 = Rc::clone(&count);

        let _ = c.request_transition(
            viewpoint::FOCUSED,
            Some(Duration::from_millis(100)),
            start,
            &pose,
            Some(Box::new(move || count2.set(count2.get() + 1))),
        );

        let _ = c.advance(start + Duration::from_millis(200), &mut pose);
        let _ = c.advance(start + Duration::from_millis(300), &mut pose);
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn observer_notified_on_completion_only() {
        let (mut c, mut pose) = make();
        let start = Instant::now();
        let seen: Rc<Cell<u32>> = Rc::new(Cell::new(0));
        let seen2 = Rc::clone(&seen);
        c.set_state_observer(Box::new(move |_| seen2.set(seen2.get() + 1)));

        let _ = c.request_transition(
            viewpoint::OVERVIEW,
            Some(Duration::from_millis(100)),
            start,
            &pose,
            None,
        );
        assert_eq!(seen.get(), 0);
        let _ = c.advance(start + Duration::from_millis(50), &mut pose);
        assert_eq!(seen.get(), 0);
        let _ = c.advance(start + Duration::from_millis(100), &mut pose);
        assert_eq!(seen.get(), 1);
    }

    #[test]
    fn constrained_duration_is_scaled_and_floored() {
        let (mut c, pose) = make_constrained();
        let start = Instant::now();

        // 2000 * 0.7 = 1400ms
        let _ = c.request_transition(
            viewpoint::FOCUSED,
            Some(Duration::from_millis(2000)),
            start,
            &pose,
            None,
        );
        assert_eq!(
            c.active_transition().unwrap().duration(),
            Duration::from_millis(1400)
        );
    }

    #[test]
    fn constrained_duration_floor() {
        let (mut c, pose) = make_constrained();
        let start = Instant::now();

        // 500 * 0.7 = 350ms, floored to 800ms
        let _ = c.request_transition(
            viewpoint::FOCUSED,
            Some(Duration::from_millis(500)),
            start,
            &pose,
            None,
        );
        assert_eq!(
            c.active_transition().unwrap().duration(),
            Duration::from_millis(800)
        );
    }

    #[test]
    fn frame_skip_does_not_delay_completion() {
        let (mut c, mut pose) = make_constrained();
        let start = Instant::now();
        let _ = c.request_transition(
            viewpoint::FOCUSED,
            Some(Duration::from_millis(1000)),
            start,
            &pose,
            None,
        );
        // Odd number of pre-completion frames so the completion frame
        // lands on a would-be skipped counter value.
        let _ = c.advance(start + Duration::from_millis(300), &mut pose);
        let done = c.advance(start + Duration::from_millis(1600), &mut pose);
        assert!(done.is_some());
        assert_eq!(pose.position, Vec3::new(0.0, 3.0, 5.5));
    }

    #[test]
    fn zero_duration_completes_on_next_advance() {
        let (mut c, mut pose) = make();
        let start = Instant::now();
        let _ = c.request_transition(
            viewpoint::OVERVIEW,
            Some(Duration::ZERO),
            start,
            &pose,
            None,
        );
        let done = c.advance(start, &mut pose);
        assert!(done.is_some());
        assert_eq!(pose.position, Vec3::new(6.0, 6.0, 12.0));
    }
}
