//! Director: owns the camera pose and coordinates every component.
//!
//! The host drives one `advance(now)` per rendered frame. Inside the tick
//! the components run in a fixed order (pointer, idle, transition,
//! bounds, quality) and at most one of them writes the pose: the idle
//! generator only moves the camera while no transition is in flight, the
//! bounds guardian never writes directly, and pointer reactivity moves
//! the attached subject rather than the camera.

pub mod startup;

use glam::Vec3;
use startup::{StartupPhase, StartupSequence};
use web_time::{Duration, Instant};

use crate::bounds::BoundsGuardian;
use crate::capability::DeviceCapabilities;
use crate::choreography::viewpoint::{self, Viewpoint};
use crate::choreography::{
    Choreographer, CompletionHook, StateObserver, TransitionCompleted, ViewpointSet,
};
use crate::idle::{IdleCommand, IdleContext, IdleOrbit, IdlePhase};
use crate::options::Options;
use crate::pointer::PointerReactivity;
use crate::pose::CameraPose;
use crate::quality::{QualityChange, QualityController, QualityObserver, QualityProfile};
use crate::subject::ControlledObject;

/// Everything observable that happened during one tick.
#[derive(Debug, Default)]
pub struct TickEvents {
    /// The scripted introduction finished this tick.
    pub startup_completed: bool,
    /// A camera transition reached its destination this tick.
    pub transition_completed: Option<TransitionCompleted>,
    /// The idle orbit entry landed on the orbit circle this tick.
    pub entered_idle_orbit: bool,
    /// The camera escaped its bounds and a corrective transition began.
    pub bounds_correction_started: bool,
    /// The quality level stepped this tick.
    pub quality_changed: Option<QualityChange>,
}

/// Central coordinator owning the camera pose and all behavior components.
pub struct Director {
    pose: CameraPose,
    choreographer: Choreographer,
    startup: StartupSequence,
    idle: IdleOrbit,
    bounds: BoundsGuardian,
    pointer: PointerReactivity,
    quality: QualityController,
    subject: Option<Box<dyn ControlledObject>>,

    subject_focused: bool,
    subject_hovered: bool,
    has_ever_been_unfocused: bool,
}

impl Director {
    /// Build the director. The pose starts at the `default` viewpoint and
    /// the scripted introduction is armed from `now`.
    #[must_use]
    pub fn new(options: &Options, caps: &DeviceCapabilities, now: Instant) -> Self {
        let viewpoints = ViewpointSet::from_options(&options.viewpoints);
        let pose = viewpoints
            .get(viewpoint::DEFAULT)
            .map_or_else(|| CameraPose::new(Vec3::ZERO, Vec3::ZERO), Viewpoint::pose);

        Self {
            pose,
            choreographer: Choreographer::new(viewpoints, &options.choreography, caps),
            startup: StartupSequence::new(&options.choreography, caps, now),
            idle: IdleOrbit::new(&options.idle, caps, now),
            bounds: BoundsGuardian::new(&options.bounds, caps),
            pointer: PointerReactivity::new(&options.pointer, caps, now),
            quality: QualityController::new(&options.quality, now),
            subject: None,
            subject_focused: false,
            subject_hovered: false,
            has_ever_been_unfocused: false,
        }
    }

    /// Run one frame of the choreography pipeline.
    pub fn advance(&mut self, now: Instant) -> TickEvents {
        let mut events = TickEvents::default();

        if let Some(duration) = self.startup.poll(now) {
            let _ = self.choreographer.request_transition(
                viewpoint::FOCUSED,
                Some(duration),
                now,
                &self.pose,
                None,
            );
        }

        let _ = self.pointer.poll_readiness(now, self.subject.as_deref());
        if let Some(subject) = self.subject.as_deref_mut() {
            self.pointer.update(subject);
        }

        let ctx = IdleContext {
            startup_complete: self.startup.is_complete(),
            transitioning: self.choreographer.is_transitioning(),
            current_is_focused: self.choreographer.current_viewpoint() == viewpoint::FOCUSED,
            current_is_default: self.choreographer.current_viewpoint() == viewpoint::DEFAULT,
            subject_focused: self.subject_focused,
        };
        match self.idle.advance(now, &mut self.pose, ctx) {
            Some(IdleCommand::EnteredOrbit) => {
                self.choreographer.set_current_viewpoint(viewpoint::IDLE);
                events.entered_idle_orbit = true;
            }
            Some(IdleCommand::ReturnToDefault { duration }) => {
                let _ = self.choreographer.request_transition(
                    viewpoint::DEFAULT,
                    Some(duration),
                    now,
                    &self.pose,
                    None,
                );
            }
            None => {}
        }

        if let Some(done) = self.choreographer.advance(now, &mut self.pose) {
            self.route_completion(&done, now, &mut events);
            events.transition_completed = Some(done);
        }

        if self.bounds.inspect(&self.pose, self.choreographer.is_transitioning()) {
            self.idle.interrupt();
            events.bounds_correction_started = self.choreographer.request_transition(
                viewpoint::DEFAULT,
                Some(self.bounds.correction_duration()),
                now,
                &self.pose,
                None,
            );
        }

        self.quality.record_frame(now);
        events.quality_changed = self.quality.evaluate(now);

        events
    }

    /// Attach the externally-owned reactive subject.
    pub fn attach_subject(&mut self, subject: Box<dyn ControlledObject>) {
        self.subject = Some(subject);
    }

    /// Request a transition to a named viewpoint.
    ///
    /// Counts as an interaction: the idle orbit is cancelled and its
    /// timers reset. Returns whether the choreographer accepted.
    pub fn request_transition(
        &mut self,
        name: &str,
        duration: Option<Duration>,
        now: Instant,
        on_complete: Option<CompletionHook>,
    ) -> bool {
        self.idle.interrupt();
        self.idle.notify_interaction(now);
        self.choreographer
            .request_transition(name, duration, now, &self.pose, on_complete)
    }

    /// Record a user interaction: resets inactivity timers and, if the
    /// camera was orbiting, brings it back to the default viewpoint.
    pub fn notify_interaction(&mut self, now: Instant) {
        if let Some(IdleCommand::ReturnToDefault { duration }) = self.idle.stop(now) {
            let _ = self.choreographer.request_transition(
                viewpoint::DEFAULT,
                Some(duration),
                now,
                &self.pose,
                None,
            );
        }
    }

    /// Feed one normalized pointer sample. Pointer motion counts as an
    /// interaction. Returns whether the sample changed the offset target.
    pub fn update_pointer(&mut self, x: f32, y: f32, now: Instant) -> bool {
        self.notify_interaction(now);
        let suppressed = self.subject_focused || self.choreographer.is_transitioning();
        self.pointer.update_position(x, y, suppressed, now)
    }

    /// The subject acquired focus: move to the close-up viewpoint and
    /// suppress pointer reactivity while it holds.
    pub fn focus_gained(&mut self, now: Instant) -> bool {
        self.subject_focused = true;
        self.idle.interrupt();
        self.idle.notify_interaction(now);
        self.pointer.on_focus_gained();
        self.choreographer
            .request_transition(viewpoint::FOCUSED, None, now, &self.pose, None)
    }

    /// The subject lost focus: back to the default viewpoint. The first
    /// unfocus after the introduction unlocks pointer reactivity.
    pub fn focus_lost(&mut self, now: Instant) -> bool {
        if self.subject_focused && self.startup.is_complete() {
            self.has_ever_been_unfocused = true;
            self.pointer.on_focus_lost();
        }
        self.subject_focused = false;
        self.idle.interrupt();
        self.idle.notify_interaction(now);
        self.choreographer
            .request_transition(viewpoint::DEFAULT, None, now, &self.pose, None)
    }

    /// Record pointer hover over the subject area. Hovering counts as an
    /// interaction.
    pub fn set_subject_hover(&mut self, hovered: bool, now: Instant) {
        self.subject_hovered = hovered;
        if hovered {
            self.notify_interaction(now);
        }
    }

    /// Abandon the remaining scripted introduction.
    pub fn skip_intro(&mut self, now: Instant) {
        if !self.startup.is_complete() {
            self.startup.skip();
            self.idle.notify_interaction(now);
            self.pointer.on_intro_complete();
        }
    }

    /// The current camera pose.
    #[must_use]
    pub fn pose(&self) -> &CameraPose {
        &self.pose
    }

    /// Mutable access to the pose, for embedders that apply their own
    /// per-frame effects on top of the choreography.
    pub fn pose_mut(&mut self) -> &mut CameraPose {
        &mut self.pose
    }

    /// Name of the current viewpoint (the destination while in flight).
    #[must_use]
    pub fn current_viewpoint(&self) -> &str {
        self.choreographer.current_viewpoint()
    }

    /// Whether a camera transition is in flight.
    #[must_use]
    pub fn is_transitioning(&self) -> bool {
        self.choreographer.is_transitioning()
    }

    /// Phase of the idle orbit state machine.
    #[must_use]
    pub fn idle_phase(&self) -> IdlePhase {
        self.idle.phase()
    }

    /// Phase of the scripted introduction.
    #[must_use]
    pub fn startup_phase(&self) -> StartupPhase {
        self.startup.phase()
    }

    /// Whether the subject currently holds focus.
    #[must_use]
    pub fn subject_focused(&self) -> bool {
        self.subject_focused
    }

    /// Whether the pointer currently hovers the subject area.
    #[must_use]
    pub fn subject_hovered(&self) -> bool {
        self.subject_hovered
    }

    /// Whether the subject has ever lost focus since the introduction.
    #[must_use]
    pub fn has_ever_been_unfocused(&self) -> bool {
        self.has_ever_been_unfocused
    }

    /// Render parameters for the current quality level.
    #[must_use]
    pub fn quality_profile(&self) -> QualityProfile {
        self.quality.current_profile()
    }

    /// The adaptive quality controller.
    #[must_use]
    pub fn quality(&self) -> &QualityController {
        &self.quality
    }

    /// Mutable access to the quality controller, e.g. to feed
    /// pre-aggregated FPS samples.
    pub fn quality_mut(&mut self) -> &mut QualityController {
        &mut self.quality
    }

    /// Register the observer notified with each completed viewpoint name.
    pub fn set_state_observer(&mut self, observer: StateObserver) {
        self.choreographer.set_state_observer(observer);
    }

    /// Register the observer fired on every quality level change.
    pub fn set_quality_observer(&mut self, observer: QualityObserver) {
        self.quality.set_observer(observer);
    }

    /// Adjust pointer reaction intensity at runtime.
    pub fn set_pointer_intensity(&mut self, intensity: f32) {
        self.pointer.set_intensity(intensity);
    }

    /// Enable or disable pointer reactivity.
    pub fn set_pointer_enabled(&mut self, enabled: bool) {
        self.pointer.set_enabled(enabled);
    }

    /// Current damped pointer offset applied to the subject.
    #[must_use]
    pub fn pointer_offset(&self) -> Vec3 {
        self.pointer.current_offset()
    }

    fn route_completion(
        &mut self,
        done: &TransitionCompleted,
        now: Instant,
        events: &mut TickEvents,
    ) {
        if done.viewpoint == viewpoint::FOCUSED
            && self.startup.phase() == StartupPhase::Focusing
        {
            self.startup.on_focus_complete();
            self.idle.notify_interaction(now);
            self.pointer.on_intro_complete();
            events.startup_completed = true;
        }
        if done.viewpoint == viewpoint::DEFAULT && self.idle.phase() == IdlePhase::Returning {
            self.idle.on_return_complete(now);
        }
    }
}

impl std::fmt::Debug for Director {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Director")
            .field("pose", &self.pose)
            .field("current", &self.choreographer.current_viewpoint())
            .field("startup", &self.startup.phase())
            .field("idle", &self.idle.phase())
            .field("subject_attached", &self.subject.is_some())
            .finish_non_exhaustive()
    }
}
