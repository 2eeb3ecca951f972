//! Error type for motion parameters and configuration.

use thiserror::Error;

/// Everything that can be wrong with a motion description or its config.
///
/// Presets built from literals never produce these; they only surface when
/// values arrive from configuration or other runtime input.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum MotionError {
    /// A keyframe track needs at least one frame to sample.
    #[error("keyframe track is empty")]
    EmptyKeyframes,

    /// Durations and delays must be finite and non-negative.
    #[error("{field} must be a finite, non-negative number of seconds (got {value})")]
    InvalidTime {
        /// Which timing field was rejected.
        field: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// Spring constants must be finite and strictly positive.
    #[error("spring {field} must be finite and > 0 (got {value})")]
    InvalidSpring {
        /// Which constant was rejected.
        field: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// Visibility thresholds are fractions of the element's box.
    #[error("visibility threshold must lie in [0, 1] (got {0})")]
    InvalidThreshold(f64),

    /// Particle fields are bounded so a bad config cannot flood the DOM.
    #[error("particle count must be in 1..={max} (got {count})")]
    InvalidParticleCount {
        /// Requested count.
        count: usize,
        /// Upper bound accepted.
        max: usize,
    },

    /// Configuration text did not parse.
    #[error("invalid motion config: {0}")]
    Config(String),
}

impl From<toml::de::Error> for MotionError {
    fn from(e: toml::de::Error) -> Self {
        MotionError::Config(e.to_string())
    }
}

/// Reject negative, NaN and infinite times.
pub(crate) fn check_time(field: &'static str, value: f64) -> Result<f64, MotionError> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(MotionError::InvalidTime { field, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_time_accepts_zero_and_positive() {
        assert_eq!(check_time("delay", 0.0), Ok(0.0));
        assert_eq!(check_time("duration", 0.8), Ok(0.8));
    }

    #[test]
    fn check_time_rejects_negative_and_nan() {
        assert!(matches!(
            check_time("delay", -0.1),
            Err(MotionError::InvalidTime { field: "delay", .. })
        ));
        assert!(check_time("duration", f64::NAN).is_err());
        assert!(check_time("duration", f64::INFINITY).is_err());
    }

    #[test]
    fn messages_name_the_field() {
        let err = MotionError::InvalidSpring {
            field: "stiffness",
            value: 0.0,
        };
        assert!(err.to_string().contains("stiffness"));
    }
}
