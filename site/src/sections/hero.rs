//! Landing block: name, role, tagline and calls to action, revealed line by
//! line on mount, with a bouncing scroll hint.

use leptos::prelude::*;
use portfolio_motion::Pose;

use crate::components::{Glyph, Icon};
use crate::content::{HERO_TAGLINES, OWNER_NAME, OWNER_ROLE};
use crate::presets;
use crate::runtime::{MotionScope, use_motion_config};

#[component]
pub fn HeroSection() -> impl IntoView {
    let stagger = use_motion_config().stagger;
    let scope = MotionScope::new();
    let line = |index: usize| {
        scope.enter(
            presets::faded(presets::CONTENT_OFFSET),
            Pose::IDENTITY,
            presets::reveal(stagger.delay_for(index)),
        )
    };
    let greeting = line(0);
    let name = line(1);
    let role = line(2);
    let tagline = line(3);
    let actions = line(4);
    let hint = scope.ambient(presets::scroll_hint());

    view! {
        <section id="hero" class="section hero">
            <div class="hero-inner">
                <p class="hero-greeting" style=move || greeting.get().to_style()>"Hi, I'm"</p>
                <h1 class="hero-name gradient-text" style=move || name.get().to_style()>
                    {OWNER_NAME}
                </h1>
                <p class="hero-role text-primary" style=move || role.get().to_style()>
                    {OWNER_ROLE}
                </p>
                <div class="hero-tagline" style=move || tagline.get().to_style()>
                    {HERO_TAGLINES.iter().map(|text| view! { <p>{*text}</p> }).collect_view()}
                </div>
                <div class="hero-actions" style=move || actions.get().to_style()>
                    <a href="#projects" class="button button-primary glow-primary">
                        "View Projects"
                    </a>
                    <a href="#contact" class="button button-ghost">"Get in Touch"</a>
                </div>
            </div>
            <a
                href="#about"
                class="scroll-hint"
                aria-label="Scroll to about"
                style=move || hint.get().to_style()
            >
                <Icon glyph=Glyph::ArrowDown />
            </a>
        </section>
    }
}
