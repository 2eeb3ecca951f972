use leptos::prelude::*;
use portfolio_motion::{Pose, Stagger};

use crate::components::{Glyph, Icon, SectionHeading, SectionShell};
use crate::content::{PROJECTS, Project};
use crate::presets;
use crate::runtime::{MotionScope, use_in_view, use_motion_config};

#[component]
pub fn ProjectsSection() -> impl IntoView {
    let config = use_motion_config();
    let (node_ref, in_view) = use_in_view(config.observer);
    let stagger = config.stagger;

    view! {
        <SectionShell id="projects" node_ref=node_ref>
            <SectionHeading title="Projects" in_view=in_view subtitle="A few things I've built" />
            <div class="project-grid">
                {PROJECTS
                    .iter()
                    .enumerate()
                    .map(|(index, project)| {
                        view! {
                            <ProjectCard index=index project=*project in_view=in_view stagger=stagger />
                        }
                    })
                    .collect_view()}
            </div>
        </SectionShell>
    }
}

#[component]
fn ProjectCard(
    index: usize,
    project: Project,
    in_view: ReadSignal<bool>,
    stagger: Stagger,
) -> impl IntoView {
    let scope = MotionScope::new();
    let (hovered, set_hovered) = signal(false);
    let entrance = scope.toggle(
        in_view,
        presets::faded(presets::BODY_OFFSET),
        Pose::IDENTITY,
        presets::reveal(stagger.delay_for(index)),
    );
    let hover = scope.toggle(hovered, Pose::IDENTITY, presets::lifted(), presets::hover_spring());

    view! {
        <article
            class=format!("project-card {}", project.color.glow_class())
            style=move || entrance.get().compose(&hover.get()).to_style()
            on:mouseenter=move |_| set_hovered.set(true)
            on:mouseleave=move |_| set_hovered.set(false)
        >
            <h3 class=format!("project-title {}", project.color.text_class())>{project.title}</h3>
            <p class="project-blurb">{project.blurb}</p>
            <ul class="tag-list">
                {project.tags.iter().map(|tag| view! { <li class="tag">{*tag}</li> }).collect_view()}
            </ul>
            <a href=project.href class="project-link" target="_blank" rel="noopener noreferrer">
                "Source"
                <Icon glyph=Glyph::ExternalLink class="icon icon-small" />
            </a>
        </article>
    }
}
