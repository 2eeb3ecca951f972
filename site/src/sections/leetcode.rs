//! Solved-problem breakdown. Each difficulty bar grows from empty to its
//! solved ratio once the section is in view.

use leptos::prelude::*;
use portfolio_motion::{Pose, Stagger};

use crate::components::{Glyph, Icon, SectionHeading, SectionShell};
use crate::content::{
    CONTEST_BADGE, CONTEST_RATING, DifficultyStat, LEETCODE_STATS, total_solved,
};
use crate::presets;
use crate::runtime::{MotionScope, use_in_view, use_motion_config};

#[component]
pub fn LeetCodeSection() -> impl IntoView {
    let config = use_motion_config();
    let (node_ref, in_view) = use_in_view(config.observer);
    let scope = MotionScope::new();
    let summary = scope.toggle(
        in_view,
        presets::faded(presets::CONTENT_OFFSET),
        Pose::IDENTITY,
        presets::reveal(0.3),
    );
    let stagger = config.stagger;

    view! {
        <SectionShell id="leetcode" node_ref=node_ref>
            <SectionHeading title="LeetCode Journey" in_view=in_view />
            <div class="leetcode-summary" style=move || summary.get().to_style()>
                <div class="stat-card glow-accent">
                    <Icon glyph=Glyph::Code class="icon text-accent" />
                    <span class="stat-value">{total_solved()}</span>
                    <span class="stat-label">"Problems solved"</span>
                </div>
                <div class="stat-card glow-primary">
                    <Icon glyph=Glyph::Trophy class="icon text-primary" />
                    <span class="stat-value">{CONTEST_RATING}</span>
                    <span class="stat-label">{format!("Contest rating · {CONTEST_BADGE}")}</span>
                </div>
            </div>
            <div class="difficulty-list">
                {LEETCODE_STATS
                    .iter()
                    .enumerate()
                    .map(|(index, stat)| {
                        view! {
                            <DifficultyBar index=index stat=*stat in_view=in_view stagger=stagger />
                        }
                    })
                    .collect_view()}
            </div>
        </SectionShell>
    }
}

#[component]
fn DifficultyBar(
    index: usize,
    stat: DifficultyStat,
    in_view: ReadSignal<bool>,
    stagger: Stagger,
) -> impl IntoView {
    let scope = MotionScope::new();
    let fill = scope.toggle(
        in_view,
        0.0,
        stat.ratio(),
        presets::bar_fill(stagger.delay_for(index)),
    );

    view! {
        <div class="difficulty">
            <div class="difficulty-header">
                <span class=stat.color.text_class()>{stat.label}</span>
                <span class="difficulty-count">{format!("{} / {}", stat.solved, stat.total)}</span>
            </div>
            <div class="bar-track">
                <div
                    class=format!("bar-fill bg-{}", stat.color.name())
                    style=move || presets::bar_width(fill.get())
                ></div>
            </div>
        </div>
    }
}
