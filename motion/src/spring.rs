//! Damped harmonic spring, solved in closed form.
//!
//! A spring always runs from 0 to 1 starting at rest; the keyframe track maps
//! that normalized position onto real values, so overshoot past 1 shows up as
//! overshoot past the target pose.

use serde::{Deserialize, Serialize};

use crate::error::MotionError;

/// Positions closer than this to the target count as settled.
const REST_DELTA: f64 = 0.001;

/// Upper bound on how long any spring is allowed to run.
pub const MAX_SETTLE_SECS: f64 = 10.0;

/// Spring constants.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Spring {
    pub stiffness: f64,
    pub damping: f64,
    pub mass: f64,
}

impl Spring {
    /// Build a spring from literal constants. Mass is 1.
    #[must_use]
    pub const fn preset(stiffness: f64, damping: f64) -> Self {
        Self {
            stiffness,
            damping,
            mass: 1.0,
        }
    }

    /// Build a spring from runtime values.
    pub fn new(stiffness: f64, damping: f64, mass: f64) -> Result<Self, MotionError> {
        let spring = Self {
            stiffness,
            damping,
            mass,
        };
        spring.validate()?;
        Ok(spring)
    }

    /// Check that every constant is finite and positive.
    pub fn validate(&self) -> Result<(), MotionError> {
        for (field, value) in [
            ("stiffness", self.stiffness),
            ("damping", self.damping),
            ("mass", self.mass),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(MotionError::InvalidSpring { field, value });
            }
        }
        Ok(())
    }

    fn natural_frequency(&self) -> f64 {
        (self.stiffness / self.mass).sqrt()
    }

    fn damping_ratio(&self) -> f64 {
        self.damping / (2.0 * (self.stiffness * self.mass).sqrt())
    }

    /// Normalized position at `t` seconds after release.
    #[must_use]
    pub fn position(&self, t: f64) -> f64 {
        if t <= 0.0 {
            return 0.0;
        }
        let w0 = self.natural_frequency();
        let zeta = self.damping_ratio();

        if zeta < 1.0 {
            let wd = w0 * (1.0 - zeta * zeta).sqrt();
            let envelope = (-zeta * w0 * t).exp();
            1.0 - envelope * ((wd * t).cos() + (zeta * w0 / wd) * (wd * t).sin())
        } else if (zeta - 1.0).abs() < f64::EPSILON {
            1.0 - (-w0 * t).exp() * (1.0 + w0 * t)
        } else {
            let root = (zeta * zeta - 1.0).sqrt();
            let r1 = -w0 * (zeta - root);
            let r2 = -w0 * (zeta + root);
            1.0 - (r2 * (r1 * t).exp() - r1 * (r2 * t).exp()) / (r2 - r1)
        }
    }

    /// Time after which the spring stays within rest distance of the target.
    ///
    /// Estimated from the decay envelope rather than the exact last crossing.
    /// Capped at [`MAX_SETTLE_SECS`].
    #[must_use]
    pub fn settle_time(&self) -> f64 {
        let w0 = self.natural_frequency();
        let zeta = self.damping_ratio();
        let decay = if zeta < 1.0 {
            zeta * w0
        } else {
            // The slower of the two real roots dominates.
            w0 * (zeta - (zeta * zeta - 1.0).max(0.0).sqrt())
        };
        if decay <= 0.0 {
            return MAX_SETTLE_SECS;
        }
        let slack = if zeta < 1.0 {
            (1.0 / (1.0 - zeta * zeta)).sqrt()
        } else {
            2.0
        };
        ((slack / REST_DELTA).ln() / decay).min(MAX_SETTLE_SECS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_rest_and_reaches_target() {
        let spring = Spring::preset(120.0, 15.0);
        assert_eq!(spring.position(0.0), 0.0);
        let settle = spring.settle_time();
        assert!((spring.position(settle) - 1.0).abs() < 0.01);
        assert!((spring.position(MAX_SETTLE_SECS) - 1.0).abs() < 1e-3);
    }

    #[test]
    fn underdamped_spring_overshoots() {
        // stiffness 300, damping 10 -> zeta ~0.29
        let spring = Spring::preset(300.0, 10.0);
        let peak = (1..200)
            .map(|i| spring.position(i as f64 * 0.005))
            .fold(0.0_f64, f64::max);
        assert!(peak > 1.0, "peak {peak}");
    }

    #[test]
    fn overdamped_spring_never_overshoots() {
        let spring = Spring::preset(100.0, 40.0);
        for i in 0..400 {
            let p = spring.position(i as f64 * 0.01);
            assert!(p <= 1.0 + 1e-9, "{p} at step {i}");
        }
    }

    #[test]
    fn critically_damped_is_continuous_with_neighbours() {
        // zeta == 1 exactly for k=100, c=20, m=1
        let critical = Spring::preset(100.0, 20.0);
        let near = Spring::preset(100.0, 20.0001);
        let t = 0.2;
        assert!((critical.position(t) - near.position(t)).abs() < 1e-3);
    }

    #[test]
    fn settle_time_is_bounded() {
        assert!(Spring::preset(120.0, 15.0).settle_time() < MAX_SETTLE_SECS);
        assert_eq!(
            Spring::preset(0.0001, 0.0001).settle_time(),
            MAX_SETTLE_SECS
        );
    }

    #[test]
    fn rejects_non_positive_constants() {
        assert!(Spring::new(120.0, 15.0, 1.0).is_ok());
        assert_eq!(
            Spring::new(0.0, 15.0, 1.0),
            Err(MotionError::InvalidSpring {
                field: "stiffness",
                value: 0.0
            })
        );
        assert!(Spring::new(120.0, -1.0, 1.0).is_err());
        assert!(Spring::new(120.0, 15.0, f64::NAN).is_err());
    }
}
