//! Motion presets shared across sections.

use portfolio_motion::{Easing, Keyframes, Motion, Pose, Transition};

/// Offset a section body slides up from.
pub const BODY_OFFSET: f64 = 50.0;
/// Offset body content slides up from.
pub const CONTENT_OFFSET: f64 = 30.0;

/// Hidden pose for fade-up reveals.
pub const fn faded(offset: f64) -> Pose {
    Pose::IDENTITY.with_y(offset).with_opacity(0.0)
}

/// The 0.8 s fade-up used by headings, grids and captions.
pub const fn reveal(delay: f64) -> Transition {
    Transition::tween(0.8).with_delay(delay)
}

pub const HEADING_DELAY: f64 = 0.2;
pub const CAPTION_DELAY: f64 = 1.0;

/// Section heading before its section is in view: lower, smaller, invisible.
pub const HEADING_HIDDEN: Pose = Pose::IDENTITY
    .with_y(30.0)
    .with_scale(0.8)
    .with_opacity(0.0);

/// Section heading under the pointer.
pub const HEADING_HOVER: Pose = Pose::IDENTITY.with_scale(1.05);

/// Soft spring that settles a heading into place.
pub const fn heading_entrance() -> Transition {
    Transition::spring(100.0, 10.0).with_delay(HEADING_DELAY)
}

/// Hover transition for text.
pub const fn text_hover() -> Transition {
    Transition::tween(0.3)
}

/// Moving highlight across gradient heading text: background position in
/// percent, 0 → 100 → 0 over 3 s.
pub fn shimmer() -> Motion<f64> {
    Motion::new(
        Keyframes::pulse(0.0, 100.0),
        Transition::tween(3.0).with_ease(Easing::Linear).forever(),
    )
}

/// Slow sweep of a section's background gradient angle.
pub fn gradient_sweep() -> Motion<f64> {
    Motion::new(
        Keyframes::pulse(135.0, 225.0),
        Transition::tween(8.0).with_ease(Easing::Linear).forever(),
    )
}

/// Endless bounce for the scroll hint under the hero.
pub fn scroll_hint() -> Motion<Pose> {
    Motion::new(
        Keyframes::pulse(Pose::IDENTITY, Pose::IDENTITY.with_y(10.0)),
        Transition::tween(1.5).forever(),
    )
}

/// Hover lift for project and contact cards.
pub const fn lifted() -> Pose {
    Pose::IDENTITY.with_y(-8.0).with_scale(1.02)
}

pub const fn hover_spring() -> Transition {
    Transition::spring(300.0, 20.0)
}

/// Twinkle of one background star.
pub fn twinkle(delay: f64) -> Motion<f64> {
    Motion::new(
        Keyframes::pulse(0.2, 1.0),
        Transition::tween(2.0 + delay).with_delay(delay).forever(),
    )
}

/// Width of a progress bar, as a percentage of its track.
pub fn bar_width(fraction: f64) -> String {
    format!("width: {:.1}%;", fraction.clamp(0.0, 1.0) * 100.0)
}

/// Transition for a growing bar, staggered by index.
pub const fn bar_fill(delay: f64) -> Transition {
    Transition::tween(1.2).with_ease(Easing::EaseOut).with_delay(delay)
}

#[cfg(test)]
mod tests {
    use super::*;
    use portfolio_motion::Timing;

    #[test]
    fn faded_is_invisible_and_offset() {
        let pose = faded(BODY_OFFSET);
        assert_eq!(pose.opacity, 0.0);
        assert_eq!(pose.y, 50.0);
        assert_eq!(pose.scale, 1.0);
    }

    #[test]
    fn heading_springs_up_from_smaller_pose() {
        assert_eq!(HEADING_HIDDEN.y, 30.0);
        assert_eq!(HEADING_HIDDEN.scale, 0.8);
        assert_eq!(HEADING_HIDDEN.opacity, 0.0);
        let entrance = heading_entrance();
        assert_eq!(entrance.delay, HEADING_DELAY);
        assert!(matches!(entrance.timing, Timing::Spring(_)));
        assert_eq!(HEADING_HOVER.scale, 1.05);
    }

    #[test]
    fn reveal_lasts_point_eight_seconds() {
        let transition = reveal(CAPTION_DELAY);
        assert_eq!(transition.delay, 1.0);
        let total = transition.total().unwrap();
        assert!((total - 1.8).abs() < 1e-9);
    }

    #[test]
    fn loops_are_infinite() {
        assert_eq!(shimmer().transition.total(), None);
        assert_eq!(gradient_sweep().transition.total(), None);
        assert_eq!(scroll_hint().transition.total(), None);
        assert_eq!(twinkle(0.5).transition.total(), None);
    }

    #[test]
    fn gradient_sweep_returns_to_start() {
        let sweep = gradient_sweep();
        assert_eq!(sweep.sample(0.0).value, 135.0);
        assert!((sweep.sample(4.0).value - 225.0).abs() < 1e-9);
        assert!((sweep.sample(8.0).value - 135.0).abs() < 1e-9);
    }

    #[test]
    fn bar_width_is_clamped() {
        assert_eq!(bar_width(0.25), "width: 25.0%;");
        assert_eq!(bar_width(1.5), "width: 100.0%;");
        assert_eq!(bar_width(-1.0), "width: 0.0%;");
    }
}
