//! A keyframe track bound to a transition.

use crate::error::MotionError;
use crate::keyframes::{Keyframes, Lerp};
use crate::transition::{Phase, Transition};

/// Declarative animation: what values to pass through and when.
#[derive(Debug, Clone, PartialEq)]
pub struct Motion<T> {
    pub keyframes: Keyframes<T>,
    pub transition: Transition,
}

/// One sampled frame.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame<T> {
    pub value: T,
    /// True once the motion will not produce a different value again.
    pub done: bool,
}

impl<T: Lerp> Motion<T> {
    pub fn new(keyframes: Keyframes<T>, transition: Transition) -> Self {
        Self {
            keyframes,
            transition,
        }
    }

    /// Animate from `initial` to `target`.
    pub fn to(initial: T, target: T, transition: Transition) -> Self {
        Self::new(Keyframes::between(initial, target), transition)
    }

    /// Checked constructor for runtime-provided values.
    pub fn try_new(frames: Vec<T>, transition: Transition) -> Result<Self, MotionError> {
        transition.validate()?;
        Ok(Self::new(Keyframes::new(frames)?, transition))
    }

    /// Same motion, started later.
    #[must_use]
    pub fn delayed(mut self, delay: f64) -> Self {
        self.transition.delay = delay;
        self
    }

    /// Value shown before the motion starts.
    pub fn initial(&self) -> &T {
        self.keyframes.first()
    }

    /// Value the motion settles on. Looping motions never settle, but this is
    /// still the value of their last keyframe.
    pub fn target(&self) -> &T {
        self.keyframes.last()
    }

    /// Sample at `elapsed` seconds since the motion was started.
    pub fn sample(&self, elapsed: f64) -> Frame<T> {
        match self.transition.phase(elapsed) {
            Phase::Waiting => Frame {
                value: self.initial().clone(),
                done: false,
            },
            Phase::Running { progress } => Frame {
                value: self.keyframes.sample(progress, self.transition.ease()),
                done: false,
            },
            Phase::Done => Frame {
                value: self.target().clone(),
                done: true,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::easing::Easing;
    use crate::pose::Pose;

    #[test]
    fn holds_initial_during_delay_then_lands_on_target() {
        let hidden = Pose::IDENTITY.with_opacity(0.0).with_scale(0.3);
        let motion = Motion::to(hidden, Pose::IDENTITY, Transition::tween(1.0)).delayed(0.3);

        let waiting = motion.sample(0.1);
        assert_eq!(waiting.value, hidden);
        assert!(!waiting.done);

        let mid = motion.sample(0.8);
        assert!(mid.value.opacity > 0.0 && mid.value.opacity < 1.0);

        let end = motion.sample(5.0);
        assert_eq!(end.value, Pose::IDENTITY);
        assert!(end.done);
    }

    #[test]
    fn looping_motion_never_finishes() {
        let motion = Motion::new(
            Keyframes::pulse(-10.0, 10.0),
            Transition::tween(4.0).forever(),
        );
        assert!(!motion.sample(1_000.0).done);
        assert_eq!(motion.sample(2.0).value, 10.0);
    }

    #[test]
    fn try_new_validates_both_halves() {
        assert_eq!(
            Motion::<f64>::try_new(vec![], Transition::tween(1.0)),
            Err(MotionError::EmptyKeyframes)
        );
        assert!(Motion::try_new(vec![0.0, 1.0], Transition::tween(-2.0)).is_err());
        let ok = Motion::try_new(
            vec![0.0, 1.0],
            Transition::tween(1.0).with_ease(Easing::Linear),
        )
        .unwrap();
        assert_eq!(ok.sample(0.5).value, 0.5);
    }
}
