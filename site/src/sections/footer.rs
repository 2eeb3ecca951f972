use leptos::prelude::*;

use crate::components::{Glyph, Icon};
use crate::content::{COPYRIGHT_YEAR, OWNER_NAME};

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <p class="footer-line">
                "© " {COPYRIGHT_YEAR} " " {OWNER_NAME} ". Built with Rust and Leptos."
            </p>
            <a href="#hero" class="back-to-top">
                <Icon glyph=Glyph::ArrowUp class="icon icon-small" />
                "Back to top"
            </a>
        </footer>
    }
}
