use leptos::prelude::*;
use portfolio_motion::{Pose, Stagger};

use crate::components::{SectionHeading, SectionShell};
use crate::content::{ColorToken, SKILL_GROUPS, Skill, SkillGroup};
use crate::presets;
use crate::runtime::{MotionScope, use_in_view, use_motion_config};

/// Bars inside a group start this long after the group itself.
const BAR_STEP: f64 = 0.1;

#[component]
pub fn SkillsSection() -> impl IntoView {
    let config = use_motion_config();
    let (node_ref, in_view) = use_in_view(config.observer);
    let stagger = config.stagger;

    view! {
        <SectionShell id="skills" node_ref=node_ref>
            <SectionHeading title="Skills" in_view=in_view />
            <div class="skill-grid">
                {SKILL_GROUPS
                    .iter()
                    .enumerate()
                    .map(|(index, group)| {
                        view! {
                            <SkillGroupCard index=index group=*group in_view=in_view stagger=stagger />
                        }
                    })
                    .collect_view()}
            </div>
        </SectionShell>
    }
}

#[component]
fn SkillGroupCard(
    index: usize,
    group: SkillGroup,
    in_view: ReadSignal<bool>,
    stagger: Stagger,
) -> impl IntoView {
    let scope = MotionScope::new();
    let onset = stagger.delay_for(index);
    let pose = scope.toggle(
        in_view,
        presets::faded(presets::CONTENT_OFFSET),
        Pose::IDENTITY,
        presets::reveal(onset),
    );

    view! {
        <div class=format!("skill-group {}", group.color.glow_class()) style=move || pose.get().to_style()>
            <h3 class=format!("skill-group-title {}", group.color.text_class())>{group.title}</h3>
            {group
                .skills
                .iter()
                .enumerate()
                .map(|(i, skill)| {
                    let delay = onset + BAR_STEP * (i as f64 + 1.0);
                    view! {
                        <SkillBar skill=*skill color=group.color in_view=in_view delay=delay />
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
fn SkillBar(skill: Skill, color: ColorToken, in_view: ReadSignal<bool>, delay: f64) -> impl IntoView {
    let scope = MotionScope::new();
    let fill = scope.toggle(
        in_view,
        0.0,
        f64::from(skill.level) / 100.0,
        presets::bar_fill(delay),
    );

    view! {
        <div class="skill">
            <div class="skill-header">
                <span>{skill.name}</span>
                <span class="skill-level">{format!("{}%", skill.level)}</span>
            </div>
            <div class="bar-track">
                <div
                    class=format!("bar-fill bg-{}", color.name())
                    style=move || presets::bar_width(fill.get())
                ></div>
            </div>
        </div>
    }
}
