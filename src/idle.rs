//! Idle orbit generator: bounded autonomous circular motion after
//! inactivity.
//!
//! The orbit is a perpetual cycle with breathing pauses, not one
//! continuous spin: enter (eased, from the camera's current azimuth so
//! there is no visible jump), orbit for a fixed fraction of a lap, return
//! to the default viewpoint, pause, repeat. Any interaction cancels the
//! cycle and resets both inactivity timers.

use glam::Vec3;
use web_time::{Duration, Instant};

use crate::capability::DeviceCapabilities;
use crate::options::IdleOptions;
use crate::pose::CameraPose;
use crate::util::EasingFunction;

/// Observable phase of the idle orbit state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdlePhase {
    /// No autonomous motion; inactivity timers are counting.
    Inactive,
    /// Easing from the interrupted pose onto the orbit circle.
    Entering,
    /// Advancing around the orbit circle.
    Orbiting,
    /// Waiting for the return-to-default transition to complete.
    Returning,
    /// Breathing pause before the next orbit episode.
    Paused,
}

/// Request emitted by the generator for the coordinator to execute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdleCommand {
    /// Entry interpolation landed on the orbit circle; the current
    /// viewpoint name should read `idle` from now on.
    EnteredOrbit,
    /// The generator wants a transition back to the default viewpoint.
    ReturnToDefault {
        /// Duration for the return transition.
        duration: Duration,
    },
}

/// Per-tick facts the generator needs from the coordinator.
#[derive(Debug, Clone, Copy)]
pub struct IdleContext {
    /// The scripted introduction has finished.
    pub startup_complete: bool,
    /// The choreographer has a transition in flight.
    pub transitioning: bool,
    /// The current viewpoint is `focused`.
    pub current_is_focused: bool,
    /// The current viewpoint is `default`.
    pub current_is_default: bool,
    /// The subject area itself is focused.
    pub subject_focused: bool,
}

#[derive(Clone, Copy)]
enum Phase {
    Inactive,
    Entering {
        from: CameraPose,
        started: Instant,
        duration: Duration,
    },
    Orbiting,
    Returning,
    Paused {
        resume_at: Instant,
    },
}

/// Produces bounded autonomous orbit motion after inactivity.
pub struct IdleOrbit {
    phase: Phase,
    angle: f32,
    accumulated: f32,
    last_interaction: Instant,
    last_focused_interaction: Instant,

    inactivity_delay: Duration,
    focused_inactivity_delay: Duration,
    rotation_speed: f32,
    radius: f32,
    height: f32,
    orbit_target: Vec3,
    max_rotation: f32,
    entry_duration: Duration,
    return_duration: Duration,
    reentry_pause: Duration,
    easing: EasingFunction,
}

impl IdleOrbit {
    /// Build the generator, resolving constrained-device variants once.
    #[must_use]
    pub fn new(opts: &IdleOptions, caps: &DeviceCapabilities, now: Instant) -> Self {
        let constrained = caps.is_constrained();
        let pick = |base: u64, reduced: u64| {
            Duration::from_millis(if constrained { reduced } else { base })
        };
        let inactivity_delay = {
            let base = Duration::from_millis(opts.inactivity_delay_ms);
            if constrained { base.mul_f32(opts.constrained_delay_scale) } else { base }
        };
        let focused_inactivity_delay = {
            let base = Duration::from_millis(opts.focused_inactivity_delay_ms);
            if constrained {
                base.mul_f32(opts.constrained_focused_delay_scale)
            } else {
                base
            }
        };

        Self {
            phase: Phase::Inactive,
            angle: 0.0,
            accumulated: 0.0,
            last_interaction: now,
            last_focused_interaction: now,
            inactivity_delay,
            focused_inactivity_delay,
            rotation_speed: if constrained {
                opts.rotation_speed * opts.constrained_speed_scale
            } else {
                opts.rotation_speed
            },
            radius: opts.radius,
            height: opts.height,
            orbit_target: Vec3::from_array(opts.orbit_target),
            max_rotation: opts.max_rotation,
            entry_duration: pick(opts.entry_duration_ms, opts.constrained_entry_duration_ms),
            return_duration: pick(opts.return_duration_ms, opts.constrained_return_duration_ms),
            reentry_pause: pick(opts.reentry_pause_ms, opts.constrained_reentry_pause_ms),
            easing: EasingFunction::DEFAULT,
        }
    }

    /// Advance the generator one frame.
    ///
    /// Writes the pose only while entering or orbiting. May emit a
    /// command for the coordinator to execute.
    pub fn advance(
        &mut self,
        now: Instant,
        pose: &mut CameraPose,
        ctx: IdleContext,
    ) -> Option<IdleCommand> {
        if !ctx.startup_complete {
            return None;
        }

        match self.phase {
            Phase::Entering { from, started, duration } => {
                let t = Self::entry_progress(now, started, duration);
                let end = CameraPose::new(self.orbit_position(), self.orbit_target);
                *pose = CameraPose::lerp_between(&from, &end, self.easing.evaluate(t));
                if t >= 1.0 {
                    self.phase = Phase::Orbiting;
                    log::debug!("idle orbit entered at angle {:.3}", self.angle);
                    return Some(IdleCommand::EnteredOrbit);
                }
                None
            }
            Phase::Orbiting => {
                self.angle += self.rotation_speed;
                self.accumulated += self.rotation_speed;

                if self.accumulated >= self.max_rotation {
                    self.phase = Phase::Returning;
                    log::debug!(
                        "idle orbit rotation budget reached ({:.3} rad), returning",
                        self.accumulated
                    );
                    return Some(IdleCommand::ReturnToDefault {
                        duration: self.return_duration,
                    });
                }

                pose.position = self.orbit_position();
                pose.target = self.orbit_target;
                None
            }
            Phase::Returning => None,
            Phase::Paused { resume_at } => {
                if now >= resume_at && !ctx.transitioning && ctx.current_is_default {
                    self.begin_entry(now, pose);
                }
                None
            }
            Phase::Inactive => {
                if ctx.transitioning {
                    return None;
                }
                // The long delay protects an actively focused subject;
                // every other situation uses the general delay.
                let (since, delay) = if ctx.current_is_focused && ctx.subject_focused {
                    (
                        now.saturating_duration_since(self.last_focused_interaction),
                        self.focused_inactivity_delay,
                    )
                } else {
                    (
                        now.saturating_duration_since(self.last_interaction),
                        self.inactivity_delay,
                    )
                };
                if since > delay {
                    self.begin_entry(now, pose);
                }
                None
            }
        }
    }

    /// Record an interaction: resets both inactivity timers.
    pub fn notify_interaction(&mut self, now: Instant) {
        self.last_interaction = now;
        self.last_focused_interaction = now;
    }

    /// Cancel orbiting immediately. Idempotent.
    ///
    /// Resets both inactivity timers. If the camera was mid-orbit (or on
    /// its way onto the circle) the returned command asks for a
    /// transition back to `default`.
    pub fn stop(&mut self, now: Instant) -> Option<IdleCommand> {
        self.notify_interaction(now);
        match self.phase {
            Phase::Entering { .. } | Phase::Orbiting => {
                self.phase = Phase::Inactive;
                log::debug!("idle orbit stopped by interaction");
                Some(IdleCommand::ReturnToDefault {
                    duration: self.return_duration,
                })
            }
            Phase::Returning | Phase::Paused { .. } => {
                self.phase = Phase::Inactive;
                None
            }
            Phase::Inactive => None,
        }
    }

    /// Deactivate without touching the inactivity timers.
    ///
    /// Called when some other component (startup, focus change, bounds
    /// correction) takes over the camera; with stale timers the orbit
    /// re-arms as soon as it gets the camera back.
    pub fn interrupt(&mut self) {
        self.phase = Phase::Inactive;
    }

    /// The coordinator reports that the requested return-to-default
    /// transition finished; start the breathing pause.
    pub fn on_return_complete(&mut self, now: Instant) {
        if matches!(self.phase, Phase::Returning) {
            self.phase = Phase::Paused {
                resume_at: now + self.reentry_pause,
            };
        }
    }

    /// Observable phase.
    #[must_use]
    pub fn phase(&self) -> IdlePhase {
        match self.phase {
            Phase::Inactive => IdlePhase::Inactive,
            Phase::Entering { .. } => IdlePhase::Entering,
            Phase::Orbiting => IdlePhase::Orbiting,
            Phase::Returning => IdlePhase::Returning,
            Phase::Paused { .. } => IdlePhase::Paused,
        }
    }

    /// Whether the generator currently owns the camera.
    #[must_use]
    pub fn is_active(&self) -> bool {
        matches!(self.phase, Phase::Entering { .. } | Phase::Orbiting)
    }

    /// Rotation accumulated in the current orbit episode, in radians.
    #[must_use]
    pub fn accumulated_rotation(&self) -> f32 {
        self.accumulated
    }

    /// Rotation budget per orbit episode, in radians.
    #[must_use]
    pub fn max_rotation(&self) -> f32 {
        self.max_rotation
    }

    /// Per-frame angular step, in radians.
    #[must_use]
    pub fn rotation_speed(&self) -> f32 {
        self.rotation_speed
    }

    fn begin_entry(&mut self, now: Instant, pose: &CameraPose) {
        // Pick up the orbit at the camera's current azimuth so entry is
        // a short eased glide, not a jump across the scene.
        self.angle = pose.position.z.atan2(pose.position.x);
        self.accumulated = 0.0;
        self.phase = Phase::Entering {
            from: *pose,
            started: now,
            duration: self.entry_duration,
        };
        log::debug!("idle orbit entry from azimuth {:.3}", self.angle);
    }

    fn orbit_position(&self) -> Vec3 {
        Vec3::new(
            self.angle.cos() * self.radius,
            self.height,
            self.angle.sin() * self.radius,
        )
    }

    fn entry_progress(now: Instant, started: Instant, duration: Duration) -> f32 {
        let elapsed = now.saturating_duration_since(started);
        if duration.is_zero() {
            1.0
        } else {
            (elapsed.as_secs_f32() / duration.as_secs_f32()).min(1.0)
        }
    }
}

impl std::fmt::Debug for IdleOrbit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IdleOrbit")
            .field("phase", &self.phase())
            .field("angle", &self.angle)
            .field("accumulated", &self.accumulated)
            .finish_non_exhaustive()
    }
}
