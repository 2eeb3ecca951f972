use leptos::prelude::*;
use portfolio_motion::{Pose, Stagger};

use crate::components::{Icon, SectionHeading, SectionShell};
use crate::content::{CONTACT_LINKS, ContactLink};
use crate::presets;
use crate::runtime::{MotionScope, use_in_view, use_motion_config};

#[component]
pub fn ContactSection() -> impl IntoView {
    let config = use_motion_config();
    let (node_ref, in_view) = use_in_view(config.observer);
    let scope = MotionScope::new();
    let intro = scope.toggle(
        in_view,
        presets::faded(presets::CONTENT_OFFSET),
        Pose::IDENTITY,
        presets::reveal(0.3),
    );
    let stagger = config.stagger;

    view! {
        <SectionShell id="contact" node_ref=node_ref>
            <SectionHeading title="Get In Touch" in_view=in_view />
            <p class="contact-intro" style=move || intro.get().to_style()>
                "Open to interesting projects, internships and a good algorithms chat."
            </p>
            <div class="contact-grid">
                {CONTACT_LINKS
                    .iter()
                    .enumerate()
                    .map(|(index, link)| {
                        view! { <ContactCard index=index link=*link in_view=in_view stagger=stagger /> }
                    })
                    .collect_view()}
            </div>
        </SectionShell>
    }
}

#[component]
fn ContactCard(
    index: usize,
    link: ContactLink,
    in_view: ReadSignal<bool>,
    stagger: Stagger,
) -> impl IntoView {
    let scope = MotionScope::new();
    let (hovered, set_hovered) = signal(false);
    let entrance = scope.toggle(
        in_view,
        presets::faded(presets::CONTENT_OFFSET),
        Pose::IDENTITY,
        presets::reveal(stagger.delay_for(index)),
    );
    let hover = scope.toggle(hovered, Pose::IDENTITY, presets::lifted(), presets::hover_spring());
    let external = link.href.starts_with("http");

    view! {
        <a
            href=link.href
            class="contact-card"
            target=external.then_some("_blank")
            rel=external.then_some("noopener noreferrer")
            style=move || entrance.get().compose(&hover.get()).to_style()
            on:mouseenter=move |_| set_hovered.set(true)
            on:mouseleave=move |_| set_hovered.set(false)
        >
            <Icon glyph=link.glyph class="icon text-primary" />
            <span class="contact-label">{link.label}</span>
            <span class="contact-value">{link.value}</span>
        </a>
    }
}
