//! Transition timing: how a keyframe track is laid out in time.

use serde::{Deserialize, Serialize};

use crate::easing::Easing;
use crate::error::{MotionError, check_time};
use crate::spring::Spring;

/// How many times an iteration plays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Repeat {
    /// Play once.
    #[default]
    Never,
    /// Play once, then `n` more times.
    Times(u32),
    /// Loop until cancelled.
    Infinite,
}

/// Shape of one iteration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum Timing {
    /// Fixed-length eased interpolation.
    Tween { duration: f64, ease: Easing },
    /// Physical spring; length is its settle time.
    Spring(Spring),
}

/// Where a transition is at some elapsed time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Phase {
    /// Still inside the initial delay.
    Waiting,
    /// Running. `progress` is linear for tweens and spring position for
    /// springs, so it may exceed 1 while a spring overshoots.
    Running { progress: f64 },
    /// Finished; the last keyframe is final.
    Done,
}

/// Full timing description of a motion.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transition {
    pub timing: Timing,
    pub delay: f64,
    pub repeat: Repeat,
}

impl Transition {
    /// Tween with the default ease-in-out curve.
    #[must_use]
    pub const fn tween(duration: f64) -> Self {
        Self {
            timing: Timing::Tween {
                duration,
                ease: Easing::EaseInOut,
            },
            delay: 0.0,
            repeat: Repeat::Never,
        }
    }

    /// Spring with unit mass.
    #[must_use]
    pub const fn spring(stiffness: f64, damping: f64) -> Self {
        Self {
            timing: Timing::Spring(Spring::preset(stiffness, damping)),
            delay: 0.0,
            repeat: Repeat::Never,
        }
    }

    /// Jump straight to the final frame.
    #[must_use]
    pub const fn instant() -> Self {
        Self::tween(0.0)
    }

    #[must_use]
    pub const fn with_delay(mut self, delay: f64) -> Self {
        self.delay = delay;
        self
    }

    /// Replace the ease of a tween. Springs ignore it.
    #[must_use]
    pub const fn with_ease(mut self, ease: Easing) -> Self {
        if let Timing::Tween { duration, .. } = self.timing {
            self.timing = Timing::Tween { duration, ease };
        }
        self
    }

    #[must_use]
    pub const fn repeat(mut self, repeat: Repeat) -> Self {
        self.repeat = repeat;
        self
    }

    #[must_use]
    pub const fn forever(self) -> Self {
        self.repeat(Repeat::Infinite)
    }

    /// Check every number in the description.
    pub fn validate(&self) -> Result<(), MotionError> {
        check_time("delay", self.delay)?;
        match self.timing {
            Timing::Tween { duration, .. } => {
                check_time("duration", duration)?;
            }
            Timing::Spring(spring) => spring.validate()?,
        }
        Ok(())
    }

    /// Length of one iteration in seconds.
    #[must_use]
    pub fn period(&self) -> f64 {
        match self.timing {
            Timing::Tween { duration, .. } => duration,
            Timing::Spring(spring) => spring.settle_time(),
        }
    }

    /// Ease to use between keyframes. Springs shape progress themselves.
    #[must_use]
    pub fn ease(&self) -> Easing {
        match self.timing {
            Timing::Tween { ease, .. } => ease,
            Timing::Spring(_) => Easing::Linear,
        }
    }

    /// Total length including delay; `None` when it loops forever.
    #[must_use]
    pub fn total(&self) -> Option<f64> {
        match self.repeat {
            Repeat::Never => Some(self.delay + self.period()),
            Repeat::Times(n) => Some(self.delay + self.period() * (n as f64 + 1.0)),
            Repeat::Infinite => None,
        }
    }

    /// Phase at `elapsed` seconds since the motion started.
    #[must_use]
    pub fn phase(&self, elapsed: f64) -> Phase {
        let t = elapsed - self.delay;
        if t < 0.0 {
            return Phase::Waiting;
        }

        let period = self.period();
        if period <= 0.0 {
            return Phase::Done;
        }

        let iteration = (t / period).floor();
        let finished = match self.repeat {
            Repeat::Never => iteration >= 1.0,
            Repeat::Times(n) => iteration >= n as f64 + 1.0,
            Repeat::Infinite => false,
        };
        if finished {
            return Phase::Done;
        }

        let local = t - iteration * period;
        let progress = match self.timing {
            Timing::Tween { .. } => local / period,
            Timing::Spring(spring) => spring.position(local),
        };
        Phase::Running { progress }
    }
}

impl Default for Transition {
    fn default() -> Self {
        Self::tween(0.3)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn waits_through_delay() {
        let t = Transition::tween(1.0).with_delay(0.5);
        assert_eq!(t.phase(0.0), Phase::Waiting);
        assert_eq!(t.phase(0.49), Phase::Waiting);
        assert_eq!(t.phase(0.5), Phase::Running { progress: 0.0 });
        assert_eq!(t.phase(1.0), Phase::Running { progress: 0.5 });
        assert_eq!(t.phase(1.5), Phase::Done);
    }

    #[test]
    fn infinite_loops_wrap_progress() {
        let t = Transition::tween(4.0).forever();
        assert_eq!(t.total(), None);
        assert_eq!(t.phase(1.0), Phase::Running { progress: 0.25 });
        assert_eq!(t.phase(401.0), Phase::Running { progress: 0.25 });
    }

    #[test]
    fn counted_repeats_stop() {
        let t = Transition::tween(1.0).repeat(Repeat::Times(2));
        assert_eq!(t.total(), Some(3.0));
        assert!(matches!(t.phase(2.5), Phase::Running { .. }));
        assert_eq!(t.phase(3.0), Phase::Done);
    }

    #[test]
    fn instant_is_done_immediately() {
        assert_eq!(Transition::instant().phase(0.0), Phase::Done);
    }

    #[test]
    fn spring_runs_for_its_settle_time() {
        let t = Transition::spring(120.0, 15.0);
        let settle = Spring::preset(120.0, 15.0).settle_time();
        assert_eq!(t.period(), settle);
        assert!(matches!(t.phase(settle * 0.5), Phase::Running { .. }));
        assert_eq!(t.phase(settle + 0.01), Phase::Done);
        assert_eq!(t.ease(), Easing::Linear);
    }

    #[test]
    fn with_ease_only_touches_tweens() {
        let tween = Transition::tween(1.0).with_ease(Easing::Linear);
        assert_eq!(tween.ease(), Easing::Linear);
        let spring = Transition::spring(100.0, 10.0).with_ease(Easing::EaseIn);
        assert_eq!(spring, Transition::spring(100.0, 10.0));
    }

    #[test]
    fn validate_rejects_bad_numbers() {
        assert!(Transition::tween(0.8).with_delay(0.2).validate().is_ok());
        assert!(Transition::tween(-1.0).validate().is_err());
        assert!(Transition::tween(1.0).with_delay(f64::NAN).validate().is_err());
        assert!(Transition::spring(0.0, 10.0).validate().is_err());
    }
}
