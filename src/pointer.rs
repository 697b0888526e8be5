//! Pointer reactivity: subtle damped subject motion following the pointer.
//!
//! The controller never moves the camera. It nudges the focal subject
//! around a captured rest position, with throttled input sampling, a
//! velocity component derived from inter-sample deltas, per-axis clamps
//! and exponential damping. Activation waits for the subject to exist
//! (polled with backoff) and for the scripted introduction to finish.

use glam::Vec3;
use web_time::{Duration, Instant};

use crate::capability::DeviceCapabilities;
use crate::options::PointerOptions;
use crate::subject::ControlledObject;

#[derive(Debug, Clone, Copy)]
struct PointerSample {
    x: f32,
    y: f32,
    at: Instant,
}

/// Drives damped pointer-following motion of the focal subject.
pub struct PointerReactivity {
    intensity: f32,
    damping: f32,
    max_movement: f32,
    max_float: f32,
    update_interval: Duration,
    velocity_gain: f32,
    velocity_influence: f32,
    velocity_clamp: f32,
    readiness_retry: Duration,

    enabled: bool,
    ready: bool,
    intro_complete: bool,
    unfocused_once: bool,
    rest_position: Vec3,
    target_offset: Vec3,
    current_offset: Vec3,
    last_sample: Option<PointerSample>,
    next_readiness_check: Instant,
}

impl PointerReactivity {
    /// Build the controller, resolving constrained-device variants once.
    #[must_use]
    pub fn new(opts: &PointerOptions, caps: &DeviceCapabilities, now: Instant) -> Self {
        let constrained = caps.is_constrained();
        Self {
            intensity: if constrained { opts.constrained_intensity } else { opts.intensity },
            damping: if constrained { opts.constrained_damping } else { opts.damping },
            max_movement: if constrained {
                opts.constrained_max_movement
            } else {
                opts.max_movement
            },
            max_float: if constrained { opts.constrained_max_float } else { opts.max_float },
            update_interval: Duration::from_millis(if constrained {
                opts.constrained_update_interval_ms
            } else {
                opts.update_interval_ms
            }),
            velocity_gain: opts.velocity_gain,
            velocity_influence: opts.velocity_influence,
            velocity_clamp: opts.velocity_clamp,
            readiness_retry: Duration::from_millis(opts.readiness_retry_ms),
            enabled: true,
            ready: false,
            intro_complete: false,
            unfocused_once: false,
            rest_position: Vec3::ZERO,
            target_offset: Vec3::ZERO,
            current_offset: Vec3::ZERO,
            last_sample: None,
            next_readiness_check: now + Duration::from_millis(opts.readiness_first_check_ms),
        }
    }

    /// Check whether the subject exists and capture its rest position.
    ///
    /// Polled each tick; the check only runs when due (first after a short
    /// delay, then at a slower retry interval) so an embedder that never
    /// attaches a subject costs nothing. Returns readiness.
    pub fn poll_readiness(
        &mut self,
        now: Instant,
        subject: Option<&dyn ControlledObject>,
    ) -> bool {
        if self.ready {
            return true;
        }
        if now < self.next_readiness_check {
            return false;
        }
        match subject {
            Some(s) => {
                self.rest_position = s.position();
                self.ready = true;
                log::debug!("pointer reactivity ready, rest position {:?}", self.rest_position);
                true
            }
            None => {
                self.next_readiness_check = now + self.readiness_retry;
                false
            }
        }
    }

    /// Feed one normalized pointer sample, both axes in [-1, 1].
    ///
    /// `suppressed` marks samples taken while some other system owns the
    /// subject. Samples arriving faster than the update interval are
    /// dropped. Returns whether the sample changed the offset target.
    pub fn update_position(&mut self, x: f32, y: f32, suppressed: bool, now: Instant) -> bool {
        if let Some(last) = self.last_sample {
            if now.saturating_duration_since(last.at) < self.update_interval {
                return false;
            }
        }
        if !self.enabled || !self.ready || !self.intro_complete || !self.unfocused_once {
            return false;
        }
        if suppressed {
            // A scripted or focused state owns the subject: retarget to
            // zero at once so damping carries it back to rest.
            self.target_offset = Vec3::ZERO;
            self.last_sample = None;
            return false;
        }

        let (vx, vy) = match self.last_sample {
            Some(last) => (
                (x - last.x) * self.velocity_gain,
                (y - last.y) * self.velocity_gain,
            ),
            None => (0.0, 0.0),
        };
        self.last_sample = Some(PointerSample { x, y, at: now });

        let clamp = self.velocity_clamp;
        let vx_term = (vx * self.velocity_influence).clamp(-clamp, clamp);
        let vy_term = (vy * self.velocity_influence).clamp(-clamp, clamp);

        let tx = (x * self.intensity + vx_term).clamp(-self.max_movement, self.max_movement);
        let ty = (y * self.intensity + vy_term).clamp(-self.max_float, self.max_float);
        // Depth couples to both axes so diagonal pointer travel reads as a
        // slight lean toward or away from the viewer
        let tz = (tx * ty * 0.1).clamp(-self.max_float / 2.0, self.max_float / 2.0);

        self.target_offset = Vec3::new(tx, ty, tz);
        true
    }

    /// Advance the damped offset one frame and write the subject position.
    pub fn update(&mut self, subject: &mut dyn ControlledObject) {
        if !self.ready {
            return;
        }
        self.current_offset += (self.target_offset - self.current_offset) * (1.0 - self.damping);
        subject.set_position(self.rest_position + self.current_offset);
    }

    /// The scripted introduction finished; pointer input may now act.
    pub fn on_intro_complete(&mut self) {
        self.intro_complete = true;
    }

    /// The subject acquired focus: zero the target so it recentres under
    /// damping while the close-up viewpoint holds.
    pub fn on_focus_gained(&mut self) {
        self.target_offset = Vec3::ZERO;
        self.last_sample = None;
    }

    /// The subject lost focus. The first unfocus opens the reactivity
    /// gate: until then the subject holds perfectly still no matter how
    /// much pointer traffic arrives.
    pub fn on_focus_lost(&mut self) {
        self.unfocused_once = true;
    }

    /// Adjust reaction intensity at runtime.
    pub fn set_intensity(&mut self, intensity: f32) {
        self.intensity = intensity;
    }

    /// Enable or disable pointer reaction. Disabling zeroes the target so
    /// the subject settles back to rest.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
        if !enabled {
            self.target_offset = Vec3::ZERO;
        }
    }

    /// Whether the rest position has been captured.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.ready
    }

    /// Current offset target.
    #[must_use]
    pub fn target_offset(&self) -> Vec3 {
        self.target_offset
    }

    /// Current damped offset.
    #[must_use]
    pub fn current_offset(&self) -> Vec3 {
        self.current_offset
    }

    /// Captured rest position of the subject.
    #[must_use]
    pub fn rest_position(&self) -> Vec3 {
        self.rest_position
    }
}

impl std::fmt::Debug for PointerReactivity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PointerReactivity")
            .field("ready", &self.ready)
            .field("intro_complete", &self.intro_complete)
            .field("target_offset", &self.target_offset)
            .field("current_offset", &self.current_offset)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct TestSubject {
        position: Vec3,
    }

    impl ControlledObject for TestSubject {
        fn position(&self) -> Vec3 {
            self.position
        }

        fn set_position(&mut self, position: Vec3) {
            self.position = position;
        }
    }

    fn ready_controller(now: Instant, subject: &TestSubject) -> PointerReactivity {
        let mut pr = PointerReactivity::new(
            &PointerOptions::default(),
            &DeviceCapabilities::unconstrained(),
            now,
        );
        let t = now + Duration::from_millis(100);
        assert!(pr.poll_readiness(t, Some(subject)));
        pr.on_intro_complete();
        pr.on_focus_lost();
        pr
    }

    #[test]
    fn readiness_polls_with_backoff() {
        let start = Instant::now();
        let mut pr = PointerReactivity::new(
            &PointerOptions::default(),
            &DeviceCapabilities::unconstrained(),
            start,
        );
        let subject = TestSubject { position: Vec3::new(0.0, 2.0, 0.0) };

        // Not due yet, even with a subject attached
        assert!(!pr.poll_readiness(start + Duration::from_millis(50), Some(&subject)));

        // Due, but no subject: reschedule 500ms out
        assert!(!pr.poll_readiness(start + Duration::from_millis(100), None));
        assert!(!pr.poll_readiness(start + Duration::from_millis(300), Some(&subject)));

        // Retry lands and the subject exists: rest pose captured
        assert!(pr.poll_readiness(start + Duration::from_millis(600), Some(&subject)));
        assert_eq!(pr.rest_position(), Vec3::new(0.0, 2.0, 0.0));
    }

    #[test]
    fn inert_until_every_gate_opens() {
        let start = Instant::now();
        let mut pr = PointerReactivity::new(
            &PointerOptions::default(),
            &DeviceCapabilities::unconstrained(),
            start,
        );

        assert!(!pr.update_position(1.0, 1.0, false, start + Duration::from_secs(1)));

        let subject = TestSubject { position: Vec3::ZERO };
        let _ = pr.poll_readiness(start + Duration::from_millis(100), Some(&subject));
        // Ready but intro still running
        assert!(!pr.update_position(1.0, 1.0, false, start + Duration::from_secs(1)));

        pr.on_intro_complete();
        // Still gated: the subject has never been unfocused
        assert!(!pr.update_position(1.0, 1.0, false, start + Duration::from_secs(1)));

        pr.on_focus_lost();
        assert!(pr.update_position(1.0, 1.0, false, start + Duration::from_secs(1)));
    }

    #[test]
    fn samples_are_throttled() {
        let start = Instant::now();
        let subject = TestSubject { position: Vec3::ZERO };
        let mut pr = ready_controller(start, &subject);

        assert!(pr.update_position(0.5, 0.0, false, start + Duration::from_millis(200)));
        // 10ms later, inside the 16ms window: dropped
        assert!(!pr.update_position(1.0, 0.0, false, start + Duration::from_millis(210)));
        // Past the window: accepted
        assert!(pr.update_position(1.0, 0.0, false, start + Duration::from_millis(220)));
    }

    #[test]
    fn offsets_clamp_per_axis() {
        let start = Instant::now();
        let subject = TestSubject { position: Vec3::ZERO };
        let mut pr = ready_controller(start, &subject);

        let _ = pr.update_position(1.0, 1.0, false, start + Duration::from_millis(200));
        let t = pr.target_offset();
        // 1.0 * 0.25 clamps to 0.15 horizontally and 0.08 vertically
        assert!((t.x - 0.15).abs() < 1e-6);
        assert!((t.y - 0.08).abs() < 1e-6);
        assert!(t.z.abs() <= 0.04 + 1e-6);
    }

    #[test]
    fn velocity_contribution_is_clamped() {
        let start = Instant::now();
        let subject = TestSubject { position: Vec3::ZERO };
        let mut pr = ready_controller(start, &subject);

        // Two samples swinging across the whole range: raw velocity term
        // would be (2 * 5) * 0.2 = 2.0, clamped to 0.05
        let _ = pr.update_position(-1.0, 0.0, false, start + Duration::from_millis(200));
        let _ = pr.update_position(1.0, 0.0, false, start + Duration::from_millis(300));
        let t = pr.target_offset();
        // 1.0 * 0.25 + 0.05 = 0.3, clamped to max_movement 0.15
        assert!((t.x - 0.15).abs() < 1e-6);
    }

    #[test]
    fn damping_converges_on_target() {
        let start = Instant::now();
        let mut subject = TestSubject { position: Vec3::ZERO };
        let mut pr = ready_controller(start, &subject);

        let _ = pr.update_position(0.4, 0.0, false, start + Duration::from_millis(200));
        let target = pr.target_offset();

        // One step moves (1 - damping) of the remaining distance
        pr.update(&mut subject);
        assert!((pr.current_offset().x - target.x * (1.0 - 0.92)).abs() < 1e-5);

        for _ in 0..400 {
            pr.update(&mut subject);
        }
        assert!((pr.current_offset() - target).length() < 1e-3);
        assert!((subject.position - target).length() < 1e-3);
    }

    #[test]
    fn update_offsets_from_rest_position() {
        let start = Instant::now();
        let mut subject = TestSubject { position: Vec3::new(0.0, 2.0, 0.0) };
        let mut pr = ready_controller(start, &subject);

        let _ = pr.update_position(1.0, 0.0, false, start + Duration::from_millis(200));
        for _ in 0..400 {
            pr.update(&mut subject);
        }
        assert!((subject.position.y - 2.0).abs() < 1e-3);
        assert!(subject.position.x > 0.2);
    }

    #[test]
    fn suppressed_samples_retarget_to_zero() {
        let start = Instant::now();
        let subject = TestSubject { position: Vec3::ZERO };
        let mut pr = ready_controller(start, &subject);

        let _ = pr.update_position(1.0, 0.0, false, start + Duration::from_millis(200));
        assert!(pr.target_offset().x > 0.0);

        // Suppression drops the target immediately, no averaging
        assert!(!pr.update_position(1.0, 1.0, true, start + Duration::from_millis(300)));
        assert_eq!(pr.target_offset(), Vec3::ZERO);
    }

    #[test]
    fn focus_acquisition_recentres_the_subject() {
        let start = Instant::now();
        let subject = TestSubject { position: Vec3::ZERO };
        let mut pr = ready_controller(start, &subject);

        let _ = pr.update_position(1.0, 0.0, false, start + Duration::from_millis(200));
        assert!(pr.target_offset().x > 0.0);

        // Subject acquires focus: target drops so damping carries it home
        pr.on_focus_gained();
        assert_eq!(pr.target_offset(), Vec3::ZERO);

        // Focused samples arrive suppressed and change nothing
        assert!(!pr.update_position(1.0, 0.0, true, start + Duration::from_millis(300)));
        assert_eq!(pr.target_offset(), Vec3::ZERO);
    }

    #[test]
    fn disabling_settles_back_to_rest() {
        let start = Instant::now();
        let subject = TestSubject { position: Vec3::ZERO };
        let mut pr = ready_controller(start, &subject);

        let _ = pr.update_position(1.0, 0.0, false, start + Duration::from_millis(200));
        pr.set_enabled(false);
        assert_eq!(pr.target_offset(), Vec3::ZERO);
        assert!(!pr.update_position(1.0, 0.0, false, start + Duration::from_millis(300)));
    }

    #[test]
    fn constrained_devices_use_gentler_parameters() {
        let start = Instant::now();
        let caps = DeviceCapabilities { mobile: true, ..DeviceCapabilities::unconstrained() };
        let mut pr = PointerReactivity::new(&PointerOptions::default(), &caps, start);
        let subject = TestSubject { position: Vec3::ZERO };
        let _ = pr.poll_readiness(start + Duration::from_millis(100), Some(&subject));
        pr.on_intro_complete();
        pr.on_focus_lost();

        let _ = pr.update_position(1.0, 0.0, false, start + Duration::from_millis(200));
        // Constrained intensity 0.15 clamps to the tighter 0.1 horizontal limit
        assert!((pr.target_offset().x - 0.1).abs() < 1e-6);
    }
}
