//! Scripted introduction: a short hold on the wide default view, then a
//! slow move into the focused viewpoint.

use web_time::{Duration, Instant};

use crate::capability::DeviceCapabilities;
use crate::options::ChoreographyOptions;

/// Phase of the scripted introduction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartupPhase {
    /// Holding on the default viewpoint.
    Waiting,
    /// The focus transition has been requested and is in flight.
    Focusing,
    /// The introduction is over; normal control applies.
    Complete,
}

/// Timer-driven introduction sequence.
#[derive(Debug)]
pub struct StartupSequence {
    phase: StartupPhase,
    begin_at: Instant,
    focus_duration: Duration,
}

impl StartupSequence {
    /// Build the sequence, resolving constrained-device timing once.
    #[must_use]
    pub fn new(opts: &ChoreographyOptions, caps: &DeviceCapabilities, now: Instant) -> Self {
        let constrained = caps.is_constrained();
        let delay = Duration::from_millis(if constrained {
            opts.constrained_startup_delay_ms
        } else {
            opts.startup_delay_ms
        });
        let focus_duration = Duration::from_millis(if constrained {
            opts.constrained_startup_duration_ms
        } else {
            opts.startup_duration_ms
        });
        Self {
            phase: StartupPhase::Waiting,
            begin_at: now + delay,
            focus_duration,
        }
    }

    /// Check the timer. Returns the focus transition duration exactly
    /// once, when the hold elapses.
    pub fn poll(&mut self, now: Instant) -> Option<Duration> {
        if self.phase == StartupPhase::Waiting && now >= self.begin_at {
            self.phase = StartupPhase::Focusing;
            log::debug!("startup hold elapsed, moving to the focused viewpoint");
            return Some(self.focus_duration);
        }
        None
    }

    /// The focus transition reached its destination.
    pub fn on_focus_complete(&mut self) {
        if self.phase == StartupPhase::Focusing {
            self.phase = StartupPhase::Complete;
            log::debug!("startup sequence complete");
        }
    }

    /// Abandon the remaining introduction immediately.
    pub fn skip(&mut self) {
        self.phase = StartupPhase::Complete;
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> StartupPhase {
        self.phase
    }

    /// Whether the introduction is over.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.phase == StartupPhase::Complete
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_once_after_the_hold() {
        let start = Instant::now();
        let mut seq = StartupSequence::new(
            &ChoreographyOptions::default(),
            &DeviceCapabilities::unconstrained(),
            start,
        );

        assert!(seq.poll(start + Duration::from_millis(999)).is_none());
        let fired = seq.poll(start + Duration::from_millis(1000));
        assert_eq!(fired, Some(Duration::from_millis(2000)));
        assert_eq!(seq.phase(), StartupPhase::Focusing);

        // Never fires twice
        assert!(seq.poll(start + Duration::from_millis(2000)).is_none());
    }

    #[test]
    fn completes_after_focus_lands() {
        let start = Instant::now();
        let mut seq = StartupSequence::new(
            &ChoreographyOptions::default(),
            &DeviceCapabilities::unconstrained(),
            start,
        );
        let _ = seq.poll(start + Duration::from_millis(1000));
        assert!(!seq.is_complete());
        seq.on_focus_complete();
        assert!(seq.is_complete());
    }

    #[test]
    fn constrained_timing_is_shorter() {
        let start = Instant::now();
        let caps = DeviceCapabilities { mobile: true, ..DeviceCapabilities::unconstrained() };
        let mut seq = StartupSequence::new(&ChoreographyOptions::default(), &caps, start);

        assert!(seq.poll(start + Duration::from_millis(499)).is_none());
        assert_eq!(
            seq.poll(start + Duration::from_millis(500)),
            Some(Duration::from_millis(1500))
        );
    }

    #[test]
    fn skip_jumps_to_complete() {
        let start = Instant::now();
        let mut seq = StartupSequence::new(
            &ChoreographyOptions::default(),
            &DeviceCapabilities::unconstrained(),
            start,
        );
        seq.skip();
        assert!(seq.is_complete());
        assert!(seq.poll(start + Duration::from_secs(10)).is_none());
    }
}
