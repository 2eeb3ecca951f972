//! Trigger-once visibility latch.
//!
//! The host feeds intersection ratios (the visible fraction of the element's
//! box) from whatever observation primitive it has; the latch decides when
//! the section counts as "in view".

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::MotionError;

/// Observer configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ObserverOptions {
    /// Fraction of the element that must be visible, in `[0, 1]`.
    pub threshold: f64,
    /// Latch at the first entry and ignore everything after.
    pub trigger_once: bool,
}

impl ObserverOptions {
    pub const SECTION: ObserverOptions = ObserverOptions {
        threshold: 0.3,
        trigger_once: true,
    };

    pub fn validate(&self) -> Result<(), MotionError> {
        if (0.0..=1.0).contains(&self.threshold) {
            Ok(())
        } else {
            Err(MotionError::InvalidThreshold(self.threshold))
        }
    }
}

impl Default for ObserverOptions {
    fn default() -> Self {
        Self::SECTION
    }
}

/// Per-element visibility state.
#[derive(Debug, Clone, PartialEq)]
pub struct VisibilityLatch {
    options: ObserverOptions,
    in_view: bool,
    frozen: bool,
}

impl VisibilityLatch {
    pub fn new(options: ObserverOptions) -> Result<Self, MotionError> {
        options.validate()?;
        Ok(Self {
            options,
            in_view: false,
            frozen: false,
        })
    }

    /// A latch that reports "in view" from the start and never changes.
    /// Used when motion is reduced and content must simply be shown.
    pub fn already_visible(options: ObserverOptions) -> Self {
        Self {
            options,
            in_view: true,
            frozen: true,
        }
    }

    pub fn in_view(&self) -> bool {
        self.in_view
    }

    /// True once the latch will ignore further observations; the host may
    /// stop observing.
    pub fn is_frozen(&self) -> bool {
        self.frozen
    }

    pub fn options(&self) -> ObserverOptions {
        self.options
    }

    /// Feed one observation. Returns the new flag value when it changed.
    ///
    /// A ratio of zero never counts as visible, even with a zero threshold:
    /// the element has to actually overlap the viewport.
    pub fn observe(&mut self, ratio: f64) -> Option<bool> {
        if self.frozen {
            return None;
        }
        let visible = ratio > 0.0 && ratio >= self.options.threshold;
        if visible == self.in_view {
            return None;
        }
        self.in_view = visible;
        if visible && self.options.trigger_once {
            self.frozen = true;
        }
        debug!(
            ratio,
            in_view = visible,
            frozen = self.frozen,
            "visibility changed"
        );
        Some(visible)
    }
}
