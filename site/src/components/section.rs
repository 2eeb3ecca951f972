use leptos::html;
use leptos::prelude::*;
use portfolio_motion::Pose;

use crate::presets;
use crate::runtime::MotionScope;

/// Anchored `<section>`. `node_ref` goes on the inner wrapper, which is the
/// element the visibility observer watches.
#[component]
pub fn SectionShell(
    id: &'static str,
    node_ref: NodeRef<html::Div>,
    #[prop(default = "")] class: &'static str,
    children: Children,
) -> impl IntoView {
    view! {
        <section id=id class=format!("section {class}")>
            <div class="section-inner" node_ref=node_ref>
                {children()}
            </div>
        </section>
    }
}

/// Gradient heading that springs into place when its section comes into view
/// and grows slightly under the pointer.
#[component]
pub fn SectionHeading(
    title: &'static str,
    in_view: ReadSignal<bool>,
    #[prop(optional)] subtitle: Option<&'static str>,
) -> impl IntoView {
    let scope = MotionScope::new();
    let (hovered, set_hovered) = signal(false);
    let entrance = scope.toggle(
        in_view,
        presets::HEADING_HIDDEN,
        Pose::IDENTITY,
        presets::heading_entrance(),
    );
    let hover = scope.toggle(
        hovered,
        Pose::IDENTITY,
        presets::HEADING_HOVER,
        presets::text_hover(),
    );
    let shimmer = scope.ambient(presets::shimmer());

    view! {
        <div class="section-heading">
            <h2
                class="gradient-text"
                style=move || {
                    format!(
                        "{} background-position: {:.1}% 50%;",
                        entrance.get().compose(&hover.get()).to_style(),
                        shimmer.get(),
                    )
                }
                on:mouseenter=move |_| set_hovered.set(true)
                on:mouseleave=move |_| set_hovered.set(false)
            >
                {title}
            </h2>
            {subtitle.map(|text| view! { <p class="section-subtitle">{text}</p> })}
        </div>
    }
}
