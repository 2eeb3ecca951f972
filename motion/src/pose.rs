//! Visual pose of an element: translation, rotation, scale and opacity.

use serde::{Deserialize, Serialize};

use crate::keyframes::Lerp;

/// Transform and opacity state of one animated element.
///
/// Translations are pixels, rotations degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Pose {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub scale: f64,
    pub rotate: f64,
    pub rotate_x: f64,
    pub rotate_y: f64,
    pub opacity: f64,
}

impl Pose {
    /// Rest pose: no offset, full size, fully opaque.
    pub const IDENTITY: Pose = Pose {
        x: 0.0,
        y: 0.0,
        z: 0.0,
        scale: 1.0,
        rotate: 0.0,
        rotate_x: 0.0,
        rotate_y: 0.0,
        opacity: 1.0,
    };

    pub const fn with_x(mut self, x: f64) -> Self {
        self.x = x;
        self
    }

    pub const fn with_y(mut self, y: f64) -> Self {
        self.y = y;
        self
    }

    pub const fn with_z(mut self, z: f64) -> Self {
        self.z = z;
        self
    }

    pub const fn with_scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    pub const fn with_rotate(mut self, degrees: f64) -> Self {
        self.rotate = degrees;
        self
    }

    pub const fn with_rotate_x(mut self, degrees: f64) -> Self {
        self.rotate_x = degrees;
        self
    }

    pub const fn with_rotate_y(mut self, degrees: f64) -> Self {
        self.rotate_y = degrees;
        self
    }

    pub const fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity;
        self
    }

    /// Stack `other` on top of this pose.
    ///
    /// Offsets and rotations add, scale and opacity multiply. Layers such as
    /// entrance, ambient float and hover each animate their own pose and are
    /// composed at render time.
    #[must_use]
    pub fn compose(&self, other: &Pose) -> Pose {
        Pose {
            x: self.x + other.x,
            y: self.y + other.y,
            z: self.z + other.z,
            scale: self.scale * other.scale,
            rotate: self.rotate + other.rotate,
            rotate_x: self.rotate_x + other.rotate_x,
            rotate_y: self.rotate_y + other.rotate_y,
            opacity: self.opacity * other.opacity,
        }
    }

    /// CSS `transform` value.
    #[must_use]
    pub fn transform(&self) -> String {
        format!(
            "translate3d({:.2}px, {:.2}px, {:.2}px) scale({:.3}) rotate({:.2}deg) rotateX({:.2}deg) rotateY({:.2}deg)",
            self.x, self.y, self.z, self.scale, self.rotate, self.rotate_x, self.rotate_y
        )
    }

    /// Inline style declarations for this pose.
    ///
    /// Opacity is clamped since spring overshoot can push it outside `[0, 1]`.
    #[must_use]
    pub fn to_style(&self) -> String {
        format!(
            "transform: {}; opacity: {:.3};",
            self.transform(),
            self.opacity.clamp(0.0, 1.0)
        )
    }
}

impl Default for Pose {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Lerp for Pose {
    fn lerp(&self, to: &Self, t: f64) -> Self {
        Pose {
            x: self.x.lerp(&to.x, t),
            y: self.y.lerp(&to.y, t),
            z: self.z.lerp(&to.z, t),
            scale: self.scale.lerp(&to.scale, t),
            rotate: self.rotate.lerp(&to.rotate, t),
            rotate_x: self.rotate_x.lerp(&to.rotate_x, t),
            rotate_y: self.rotate_y.lerp(&to.rotate_y, t),
            opacity: self.opacity.lerp(&to.opacity, t),
        }
    }
}
