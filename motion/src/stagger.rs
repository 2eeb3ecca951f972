//! Staggered onset for the children of a container.

use serde::{Deserialize, Serialize};

use crate::error::{MotionError, check_time};

/// Child `i` starts `delay_children + i * stagger_children` seconds after
/// the container's reveal.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Stagger {
    pub delay_children: f64,
    pub stagger_children: f64,
}

impl Stagger {
    pub const fn new(delay_children: f64, stagger_children: f64) -> Self {
        Self {
            delay_children,
            stagger_children,
        }
    }

    pub fn validate(&self) -> Result<(), MotionError> {
        check_time("delay_children", self.delay_children)?;
        check_time("stagger_children", self.stagger_children)?;
        Ok(())
    }

    /// Onset delay of child `index`.
    #[must_use]
    pub fn delay_for(&self, index: usize) -> f64 {
        self.delay_children + self.stagger_children * index as f64
    }
}

impl Default for Stagger {
    fn default() -> Self {
        Self::new(0.3, 0.15)
    }
}
