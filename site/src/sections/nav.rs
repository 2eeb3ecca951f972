use leptos::prelude::*;
use portfolio_motion::{Pose, Transition};

use crate::components::{Glyph, Icon};
use crate::content::{NAV_LINKS, OWNER_NAME};
use crate::runtime::MotionScope;

#[component]
pub fn Navigation() -> impl IntoView {
    let scope = MotionScope::new();
    let (menu_open, set_menu_open) = signal(false);
    let pose = scope.enter(
        Pose::IDENTITY.with_y(-100.0).with_opacity(0.0),
        Pose::IDENTITY,
        Transition::tween(0.6),
    );

    view! {
        <nav class="nav" style=move || pose.get().to_style()>
            <div class="nav-inner">
                <a href="#hero" class="nav-brand gradient-text">{OWNER_NAME}</a>
                <div class="nav-links">
                    {NAV_LINKS
                        .iter()
                        .map(|link| {
                            view! {
                                <a href=format!("#{}", link.anchor) class="nav-link">{link.label}</a>
                            }
                        })
                        .collect_view()}
                </div>
                <button
                    class="nav-toggle"
                    aria-label="Toggle menu"
                    on:click=move |_| set_menu_open.update(|open| *open = !*open)
                >
                    {move || {
                        let glyph = if menu_open.get() { Glyph::Close } else { Glyph::Menu };
                        view! { <Icon glyph=glyph /> }
                    }}
                </button>
            </div>

            <Show when=move || menu_open.get()>
                <div class="nav-drawer">
                    {NAV_LINKS
                        .iter()
                        .map(|link| {
                            view! {
                                <a
                                    href=format!("#{}", link.anchor)
                                    class="nav-drawer-link"
                                    on:click=move |_| set_menu_open.set(false)
                                >
                                    {link.label}
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
            </Show>
        </nav>
    }
}
