//! HSLA colors that can be animated.

use serde::{Deserialize, Serialize};

use crate::keyframes::Lerp;

/// Hue in degrees, saturation and lightness in percent, alpha in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hsla {
    pub h: f64,
    pub s: f64,
    pub l: f64,
    pub a: f64,
}

impl Hsla {
    pub const fn new(h: f64, s: f64, l: f64, a: f64) -> Self {
        Self { h, s, l, a }
    }

    /// Same color at a different alpha.
    #[must_use]
    pub const fn alpha(self, a: f64) -> Self {
        Self { a, ..self }
    }

    /// CSS `hsla()` value.
    #[must_use]
    pub fn css(&self) -> String {
        format!(
            "hsla({:.1}, {:.1}%, {:.1}%, {:.3})",
            self.h.rem_euclid(360.0),
            self.s,
            self.l,
            self.a.clamp(0.0, 1.0)
        )
    }
}

impl Lerp for Hsla {
    /// Hue travels the short way round the wheel.
    fn lerp(&self, to: &Self, t: f64) -> Self {
        let mut delta = (to.h - self.h).rem_euclid(360.0);
        if delta > 180.0 {
            delta -= 360.0;
        }
        Hsla {
            h: self.h + delta * t,
            s: self.s.lerp(&to.s, t),
            l: self.l.lerp(&to.l, t),
            a: self.a.lerp(&to.a, t),
        }
    }
}
