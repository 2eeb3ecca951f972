//! Achievements grid.
//!
//! Eight static cards revealed with a staggered spring once the section is in
//! view, over a field of drifting particles. Each card also floats, pulses
//! its corner dots and border, and sweeps a glow behind its content. Those
//! loops start at mount and ignore visibility; they are offset by card index
//! so neighbouring cards never move in lockstep.

use leptos::prelude::*;
use portfolio_motion::{
    Easing, Hsla, Keyframes, Motion, PARTICLE_COUNT, Particle, ParticleField, Pose, Stagger,
    Transition,
};
use tracing::warn;

use crate::components::{Icon, SectionHeading, SectionShell};
use crate::content::{ACHIEVEMENTS, Achievement, ColorToken};
use crate::presets;
use crate::runtime::{MotionScope, use_in_view, use_motion_config};

/// Salt for this section's particle seed.
const PARTICLE_SALT: u64 = 1;

/// Pose a card waits in until the section is in view.
pub const ITEM_HIDDEN: Pose = Pose::IDENTITY
    .with_y(100.0)
    .with_opacity(0.0)
    .with_scale(0.3)
    .with_rotate_y(-30.0)
    .with_rotate_x(20.0);

/// Pointer over a card.
pub const ITEM_HOVER: Pose = Pose::IDENTITY
    .with_scale(1.08)
    .with_rotate_y(5.0)
    .with_z(50.0);

/// Card pressed.
pub const ITEM_TAP: Pose = Pose::IDENTITY.with_scale(0.95);

/// Where a drifting particle sits when motion is reduced: the middle of its
/// drift.
pub const PARTICLE_REST: Pose = Pose::IDENTITY.with_opacity(0.5);

/// Description text at rest and under the pointer.
pub const DESCRIPTION_REST: Pose = Pose::IDENTITY.with_opacity(0.7);
pub const DESCRIPTION_HOVER: Pose = Pose::IDENTITY.with_scale(1.05);

/// Resting title color.
const TITLE_REST: Hsla = Hsla::new(210.0, 40.0, 96.0, 1.0);

pub const CAPTION: &str = "Always striving for excellence and continuous growth in technology";

/// Entrance spring for card `index`, delayed by the container stagger.
pub fn item_entrance(stagger: &Stagger, index: usize) -> Transition {
    Transition::spring(120.0, 15.0).with_delay(stagger.delay_for(index))
}

/// Endless float of a card body.
pub fn float_motion(index: usize) -> Motion<Pose> {
    Motion::new(
        Keyframes::pulse(
            Pose::IDENTITY.with_x(-5.0).with_y(-10.0),
            Pose::IDENTITY.with_x(5.0).with_y(10.0),
        ),
        Transition::tween(4.0)
            .with_delay(index as f64 * 0.5)
            .forever(),
    )
}

/// Corner dot placements, indexed by `corner`. Top row first, so the top
/// dots lead the bottom ones.
pub const CORNERS: [&str; 4] = ["top-left", "top-right", "bottom-left", "bottom-right"];

/// Corner dot `corner` (an index into [`CORNERS`]) of card `index`, as
/// `(scale, opacity)`.
pub fn corner_dot_motion(index: usize, corner: usize) -> Motion<(f64, f64)> {
    Motion::new(
        Keyframes::pulse((1.0, 0.5), (1.5, 1.0)),
        Transition::tween(2.0)
            .with_delay(index as f64 * 0.2 + corner as f64 * 0.5)
            .forever(),
    )
}

/// Border ring of card `index`, as `(scale, border color)`.
pub fn pulse_ring(index: usize, color: ColorToken) -> Motion<(f64, Hsla)> {
    let hue = color.hsla();
    Motion::new(
        Keyframes::pulse((1.0, hue.alpha(0.0)), (1.02, hue.alpha(0.3))),
        Transition::tween(2.0)
            .with_delay(index as f64 * 0.3)
            .forever(),
    )
}

/// Glow behind the card content, as `(gradient angle, alpha)`.
pub fn glow_motion() -> Motion<(f64, f64)> {
    Motion::new(
        Keyframes::pulse((135.0, 0.05), (225.0, 0.15)),
        Transition::tween(3.0).forever(),
    )
}

/// Icon wiggle played each time the pointer enters the icon.
pub fn icon_wiggle() -> Motion<f64> {
    Motion::new(
        Keyframes::sequence([0.0, -10.0, 10.0, -5.0, 5.0, 0.0]),
        Transition::tween(0.6),
    )
}

/// The [`PARTICLE_COUNT`] particles for one mount of the section. Only the
/// seed comes from config.
fn spawn_particles() -> Vec<Particle> {
    let config = use_motion_config();
    match ParticleField::spawn(PARTICLE_COUNT, config.seed_for(PARTICLE_SALT)) {
        Ok(field) => field.particles().to_vec(),
        Err(e) => {
            warn!(error = %e, "achievement particles disabled");
            Vec::new()
        }
    }
}

#[component]
pub fn AchievementsSection() -> impl IntoView {
    let config = use_motion_config();
    let (node_ref, in_view) = use_in_view(config.observer);
    let scope = MotionScope::new();

    let container = scope.toggle(
        in_view,
        presets::faded(presets::BODY_OFFSET),
        Pose::IDENTITY,
        presets::reveal(0.0),
    );
    let caption = scope.toggle(
        in_view,
        presets::faded(presets::CONTENT_OFFSET),
        Pose::IDENTITY,
        presets::reveal(presets::CAPTION_DELAY),
    );
    let sweep = scope.ambient(presets::gradient_sweep());
    let particles = spawn_particles();
    let stagger = config.stagger;

    view! {
        <SectionShell id="achievements" node_ref=node_ref class="achievements">
            <div class="particle-layer" aria-hidden="true">
                {particles
                    .into_iter()
                    .map(|particle| view! { <DriftingParticle particle=particle /> })
                    .collect_view()}
            </div>
            <div
                class="section-gradient"
                style=move || {
                    format!(
                        "background: linear-gradient({:.1}deg, hsla(190, 95%, 55%, 0.05) 0%, transparent 50%, hsla(270, 90%, 65%, 0.05) 100%);",
                        sweep.get(),
                    )
                }
            ></div>
            <div class="achievements-body" style=move || container.get().to_style()>
                <SectionHeading title="Strength" in_view=in_view />
                <div class="achievement-grid">
                    {ACHIEVEMENTS
                        .iter()
                        .enumerate()
                        .map(|(index, achievement)| {
                            view! {
                                <AchievementCard
                                    index=index
                                    achievement=*achievement
                                    in_view=in_view
                                    stagger=stagger
                                />
                            }
                        })
                        .collect_view()}
                </div>
                <div class="achievements-caption" style=move || caption.get().to_style()>
                    <p>{CAPTION}</p>
                </div>
            </div>
        </SectionShell>
    }
}

#[component]
fn DriftingParticle(particle: Particle) -> impl IntoView {
    let scope = MotionScope::new();
    let pose = scope.ambient_at_rest(particle.drift(), PARTICLE_REST);
    let placement = particle.placement();

    view! {
        <div
            class="particle"
            style=move || format!("{placement} {}", pose.get().to_style())
        ></div>
    }
}

/// Hover and press state of one card, fed by pointer events so touch and pen
/// input press the card too.
#[derive(Debug, Clone, Copy)]
struct CardPointer {
    hovered: RwSignal<bool>,
    pressed: RwSignal<bool>,
}

impl CardPointer {
    fn new() -> Self {
        Self {
            hovered: RwSignal::new(false),
            pressed: RwSignal::new(false),
        }
    }

    fn enter(&self) {
        self.hovered.set(true);
    }

    /// Leaving (or a cancelled touch) releases the press as well.
    fn leave(&self) {
        self.hovered.set(false);
        self.pressed.set(false);
    }

    fn down(&self) {
        self.pressed.set(true);
    }

    fn up(&self) {
        self.pressed.set(false);
    }
}

#[component]
fn AchievementCard(
    index: usize,
    achievement: Achievement,
    in_view: ReadSignal<bool>,
    stagger: Stagger,
) -> impl IntoView {
    let scope = MotionScope::new();
    let color = achievement.color;

    let pointer = CardPointer::new();
    let (description_hovered, set_description_hovered) = signal(false);
    let (title_hovered, set_title_hovered) = signal(false);
    let (icon_hovered, set_icon_hovered) = signal(false);
    let (icon_rotate, set_icon_rotate) = signal(0.0_f64);

    let entrance = scope.toggle(
        in_view,
        ITEM_HIDDEN,
        Pose::IDENTITY,
        item_entrance(&stagger, index),
    );
    let hover = scope.toggle(
        pointer.hovered,
        Pose::IDENTITY,
        ITEM_HOVER,
        presets::hover_spring(),
    );
    let tap = scope.toggle(pointer.pressed, Pose::IDENTITY, ITEM_TAP, Transition::tween(0.15));
    let float = scope.ambient_at_rest(float_motion(index), Pose::IDENTITY);
    let ring = scope.ambient(pulse_ring(index, color));
    let glow = scope.ambient(glow_motion());
    let title = scope.toggle(
        title_hovered,
        (1.0, TITLE_REST),
        (1.1, color.hsla()),
        presets::text_hover(),
    );
    let description = scope.toggle(
        description_hovered,
        DESCRIPTION_REST,
        DESCRIPTION_HOVER,
        presets::text_hover(),
    );
    let icon_scale = scope.toggle(
        icon_hovered,
        1.0,
        1.2,
        Transition::tween(0.6).with_ease(Easing::EaseInOut),
    );

    let item_style = move || {
        entrance
            .get()
            .compose(&hover.get())
            .compose(&tap.get())
            .to_style()
    };
    let glow_hue = color.hsla();
    let glow_style = move || {
        let (angle, alpha) = glow.get();
        format!(
            "background: linear-gradient({angle:.1}deg, {} 0%, transparent 100%);",
            glow_hue.alpha(alpha).css()
        )
    };
    let ring_style = move || {
        let (scale, border) = ring.get();
        format!("transform: scale({scale:.3}); border-color: {};", border.css())
    };
    let title_style = move || {
        let (scale, tint) = title.get();
        format!("transform: scale({scale:.3}); color: {};", tint.css())
    };
    let icon_style = move || {
        format!(
            "transform: rotate({:.2}deg) scale({:.3});",
            icon_rotate.get(),
            icon_scale.get()
        )
    };

    view! {
        <div
            class="achievement-item"
            style=item_style
            on:pointerenter=move |_| pointer.enter()
            on:pointerleave=move |_| pointer.leave()
            on:pointercancel=move |_| pointer.leave()
            on:pointerdown=move |_| pointer.down()
            on:pointerup=move |_| pointer.up()
        >
            {(0..4)
                .map(|corner| view! { <CornerDot index=index corner=corner color=color /> })
                .collect_view()}
            <div
                class=format!("achievement-card {}", color.glow_class())
                style=move || float.get().to_style()
            >
                <div class="achievement-glow" style=glow_style></div>
                <div class="achievement-ring" style=ring_style></div>
                <div class="achievement-content">
                    <div
                        class="achievement-icon"
                        style=icon_style
                        on:mouseenter=move |_| {
                            set_icon_hovered.set(true);
                            scope.play(icon_wiggle(), set_icon_rotate);
                        }
                        on:mouseleave=move |_| set_icon_hovered.set(false)
                    >
                        <Icon glyph=achievement.glyph class=color.text_class() />
                    </div>
                    <h3
                        class="achievement-title"
                        style=title_style
                        on:mouseenter=move |_| set_title_hovered.set(true)
                        on:mouseleave=move |_| set_title_hovered.set(false)
                    >
                        {achievement.title}
                    </h3>
                    <p
                        class="achievement-description"
                        style=move || description.get().to_style()
                        on:mouseenter=move |_| set_description_hovered.set(true)
                        on:mouseleave=move |_| set_description_hovered.set(false)
                    >
                        {achievement.description}
                    </p>
                </div>
            </div>
        </div>
    }
}

#[component]
fn CornerDot(index: usize, corner: usize, color: ColorToken) -> impl IntoView {
    let scope = MotionScope::new();
    let pulse = scope.ambient(corner_dot_motion(index, corner));
    let class = format!("corner-dot {} bg-{}", CORNERS[corner % CORNERS.len()], color.name());

    view! {
        <div
            class=class
            style=move || {
                let (scale, opacity) = pulse.get();
                format!("transform: scale({scale:.3}); opacity: {opacity:.3};")
            }
        ></div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::reactive::owner::Owner;
    use pretty_assertions::assert_eq;

    #[test]
    fn hidden_pose_matches_entrance_start() {
        assert_eq!(ITEM_HIDDEN.y, 100.0);
        assert_eq!(ITEM_HIDDEN.opacity, 0.0);
        assert_eq!(ITEM_HIDDEN.scale, 0.3);
        assert_eq!(ITEM_HIDDEN.rotate_y, -30.0);
        assert_eq!(ITEM_HIDDEN.rotate_x, 20.0);
    }

    #[test]
    fn entrance_delays_follow_index() {
        let stagger = Stagger::default();
        let delays: Vec<f64> = (0..ACHIEVEMENTS.len())
            .map(|i| item_entrance(&stagger, i).delay)
            .collect();
        for (i, delay) in delays.iter().enumerate() {
            assert!((delay - (0.3 + 0.15 * i as f64)).abs() < 1e-9);
        }
        assert!(delays.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn entrance_settles_on_identity() {
        let stagger = Stagger::default();
        let motion = Motion::to(ITEM_HIDDEN, Pose::IDENTITY, item_entrance(&stagger, 7));
        let before = motion.sample(1.0);
        assert_eq!(before.value, ITEM_HIDDEN);
        let end = motion.sample(30.0);
        assert!(end.done);
        assert_eq!(end.value, Pose::IDENTITY);
    }

    #[test]
    fn ambient_loops_never_finish() {
        for index in 0..ACHIEVEMENTS.len() {
            assert_eq!(float_motion(index).transition.total(), None);
            assert_eq!(pulse_ring(index, ColorToken::Accent).transition.total(), None);
            for corner in 0..4 {
                assert_eq!(corner_dot_motion(index, corner).transition.total(), None);
            }
        }
        assert_eq!(glow_motion().transition.total(), None);
    }

    #[test]
    fn corner_dots_are_staggered() {
        let delays: Vec<f64> = (0..4)
            .map(|corner| corner_dot_motion(2, corner).transition.delay)
            .collect();
        let expected = [0.4, 0.9, 1.4, 1.9];
        for (got, want) in delays.iter().zip(expected) {
            assert!((got - want).abs() < 1e-9, "{got} != {want}");
        }
    }

    #[test]
    fn bottom_right_dot_pulses_last() {
        assert_eq!(CORNERS, ["top-left", "top-right", "bottom-left", "bottom-right"]);
        let delay = |name: &str| {
            let corner = CORNERS.iter().position(|c| *c == name).unwrap();
            corner_dot_motion(0, corner).transition.delay
        };
        assert_eq!(delay("bottom-left"), 1.0);
        assert_eq!(delay("bottom-right"), 1.5);
    }

    #[test]
    fn description_brightens_and_grows_on_hover() {
        assert_eq!(DESCRIPTION_REST.opacity, 0.7);
        assert_eq!(DESCRIPTION_REST.scale, 1.0);
        assert_eq!(DESCRIPTION_HOVER.opacity, 1.0);
        assert_eq!(DESCRIPTION_HOVER.scale, 1.05);
    }

    #[test]
    fn leaving_a_card_releases_the_press() {
        let owner = Owner::new();
        owner.with(|| {
            let pointer = CardPointer::new();
            pointer.enter();
            pointer.down();
            assert!(pointer.hovered.get_untracked());
            assert!(pointer.pressed.get_untracked());

            pointer.up();
            assert!(!pointer.pressed.get_untracked());

            pointer.down();
            pointer.leave();
            assert!(!pointer.hovered.get_untracked());
            assert!(!pointer.pressed.get_untracked());
        });
        owner.cleanup();
    }

    #[test]
    fn float_peaks_halfway() {
        let motion = float_motion(0);
        let peak = motion.sample(2.0).value;
        assert!((peak.y - 10.0).abs() < 1e-9);
        assert!((peak.x - 5.0).abs() < 1e-9);
    }

    #[test]
    fn pulse_ring_uses_token_hue() {
        let ring = pulse_ring(0, ColorToken::Secondary);
        let (scale, color) = ring.sample(0.0).value;
        assert_eq!(scale, 1.0);
        assert_eq!(color.h, ColorToken::Secondary.hsla().h);
        assert_eq!(color.a, 0.0);
    }

    #[test]
    fn icon_wiggle_ends_upright() {
        let wiggle = icon_wiggle();
        assert_eq!(wiggle.keyframes.frames().len(), 6);
        let end = wiggle.sample(0.6);
        assert!(end.done);
        assert_eq!(end.value, 0.0);
    }
}
