//! Keyframe tracks and the interpolation trait behind them.

use crate::easing::Easing;
use crate::error::MotionError;

/// Linear interpolation between two values of the same type.
///
/// `t` is usually in `[0, 1]` but springs overshoot, so implementations must
/// extrapolate sensibly for values outside that range.
pub trait Lerp: Clone {
    /// Value at fraction `t` of the way from `self` to `to`.
    fn lerp(&self, to: &Self, t: f64) -> Self;
}

impl Lerp for f64 {
    fn lerp(&self, to: &Self, t: f64) -> Self {
        self + (to - self) * t
    }
}

impl<A: Lerp, B: Lerp> Lerp for (A, B) {
    fn lerp(&self, to: &Self, t: f64) -> Self {
        (self.0.lerp(&to.0, t), self.1.lerp(&to.1, t))
    }
}

/// An ordered, non-empty list of values spread evenly over one iteration.
#[derive(Debug, Clone, PartialEq)]
pub struct Keyframes<T> {
    frames: Vec<T>,
}

impl<T: Lerp> Keyframes<T> {
    /// Build a track from runtime values.
    pub fn new(frames: Vec<T>) -> Result<Self, MotionError> {
        if frames.is_empty() {
            return Err(MotionError::EmptyKeyframes);
        }
        Ok(Self { frames })
    }

    /// Track from a fixed list of literals. An empty array fails to compile.
    pub fn sequence<const N: usize>(frames: [T; N]) -> Self {
        const { assert!(N > 0, "a keyframe track needs at least one frame") };
        Self {
            frames: frames.into(),
        }
    }

    /// Two-frame track from `from` to `to`.
    pub fn between(from: T, to: T) -> Self {
        Self {
            frames: vec![from, to],
        }
    }

    /// Three-frame `a → b → a` loop, the shape of every ambient pulse.
    pub fn pulse(rest: T, peak: T) -> Self {
        Self {
            frames: vec![rest.clone(), peak, rest],
        }
    }

    /// Single-frame track that holds a value.
    pub fn hold(value: T) -> Self {
        Self {
            frames: vec![value],
        }
    }

    pub fn frames(&self) -> &[T] {
        &self.frames
    }

    pub fn first(&self) -> &T {
        &self.frames[0]
    }

    pub fn last(&self) -> &T {
        &self.frames[self.frames.len() - 1]
    }

    /// Sample at linear `progress` through the track, easing each segment.
    ///
    /// Progress past either end extrapolates along the outer segment without
    /// easing, which is how spring overshoot reaches the values.
    pub fn sample(&self, progress: f64, ease: Easing) -> T {
        let segments = self.frames.len() - 1;
        if segments == 0 {
            return self.frames[0].clone();
        }
        if progress <= 0.0 {
            return self.frames[0].lerp(&self.frames[1], progress * segments as f64);
        }
        if progress >= 1.0 {
            let from = &self.frames[segments - 1];
            let to = &self.frames[segments];
            return from.lerp(to, 1.0 + (progress - 1.0) * segments as f64);
        }

        let scaled = progress * segments as f64;
        let index = (scaled.floor() as usize).min(segments - 1);
        let local = scaled - index as f64;
        self.frames[index].lerp(&self.frames[index + 1], ease.apply(local))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_track_is_rejected() {
        assert_eq!(
            Keyframes::<f64>::new(vec![]),
            Err(MotionError::EmptyKeyframes)
        );
    }

    #[test]
    fn single_frame_holds() {
        let track = Keyframes::hold(4.0);
        assert_eq!(track.sample(0.0, Easing::Linear), 4.0);
        assert_eq!(track.sample(0.7, Easing::EaseInOut), 4.0);
    }

    #[test]
    fn pulse_hits_every_frame() {
        let track = Keyframes::pulse(-10.0, 10.0);
        assert_eq!(track.sample(0.0, Easing::EaseInOut), -10.0);
        assert_eq!(track.sample(0.5, Easing::EaseInOut), 10.0);
        assert_eq!(track.sample(1.0, Easing::EaseInOut), -10.0);
    }

    #[test]
    fn easing_is_applied_per_segment() {
        let track = Keyframes::new(vec![0.0, 100.0, 200.0]).unwrap();
        // A quarter in is halfway through the first segment.
        let eased = track.sample(0.25, Easing::EaseIn);
        assert!(eased < 50.0);
        assert_eq!(track.sample(0.25, Easing::Linear), 50.0);
        assert_eq!(track.sample(0.75, Easing::Linear), 150.0);
    }

    #[test]
    fn overshoot_extrapolates_last_segment() {
        let track = Keyframes::between(0.0, 10.0);
        assert!((track.sample(1.2, Easing::Linear) - 12.0).abs() < 1e-9);
        assert!((track.sample(-0.1, Easing::Linear) + 1.0).abs() < 1e-9);
    }

    #[test]
    fn sequence_keeps_literal_order() {
        let track = Keyframes::sequence([0.0, -10.0, 10.0, -5.0, 5.0, 0.0]);
        assert_eq!(track.frames().len(), 6);
        assert_eq!(track.sample(0.2, Easing::Linear), -10.0);
        assert_eq!(*track.last(), 0.0);
    }

    #[test]
    fn tuples_interpolate_componentwise() {
        let track = Keyframes::between((0.0, 100.0), (10.0, 0.0));
        assert_eq!(track.sample(0.5, Easing::Linear), (5.0, 50.0));
    }
}
