use leptos::prelude::*;
use portfolio_motion::{Pose, Stagger};

use crate::components::{SectionHeading, SectionShell};
use crate::content::{ABOUT_BIO, ABOUT_FACTS, Fact};
use crate::presets;
use crate::runtime::{MotionScope, use_in_view, use_motion_config};

#[component]
pub fn AboutSection() -> impl IntoView {
    let config = use_motion_config();
    let (node_ref, in_view) = use_in_view(config.observer);
    let scope = MotionScope::new();
    let bio = scope.toggle(
        in_view,
        presets::faded(presets::CONTENT_OFFSET),
        Pose::IDENTITY,
        presets::reveal(0.4),
    );
    let stagger = config.stagger;

    view! {
        <SectionShell id="about" node_ref=node_ref>
            <SectionHeading title="About Me" in_view=in_view />
            <div class="about-grid">
                <div class="about-bio" style=move || bio.get().to_style()>
                    {ABOUT_BIO.iter().map(|text| view! { <p>{*text}</p> }).collect_view()}
                </div>
                <div class="fact-grid">
                    {ABOUT_FACTS
                        .iter()
                        .enumerate()
                        .map(|(index, fact)| {
                            view! { <FactCard index=index fact=*fact in_view=in_view stagger=stagger /> }
                        })
                        .collect_view()}
                </div>
            </div>
        </SectionShell>
    }
}

#[component]
fn FactCard(index: usize, fact: Fact, in_view: ReadSignal<bool>, stagger: Stagger) -> impl IntoView {
    let scope = MotionScope::new();
    let pose = scope.toggle(
        in_view,
        presets::faded(presets::CONTENT_OFFSET).with_scale(0.9),
        Pose::IDENTITY,
        presets::reveal(stagger.delay_for(index)),
    );

    view! {
        <div class=format!("fact-card {}", fact.color.glow_class()) style=move || pose.get().to_style()>
            <span class=format!("fact-value {}", fact.color.text_class())>{fact.value}</span>
            <span class="fact-label">{fact.label}</span>
        </div>
    }
}
