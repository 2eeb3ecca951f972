//! # portfolio-site
//!
//! Animated single-page portfolio built with [Leptos](https://leptos.dev/).
//!
//! The page is a fixed stack of sections: cursor overlay, star background,
//! navigation, then hero, about, LeetCode stats, achievements, projects,
//! skills and contact, then the footer. All content is static; motion comes
//! from [`portfolio_motion`], driven by `requestAnimationFrame` in the browser.
//!
//! ## Builds
//!
//! - `csr`: the browser app (`trunk serve --no-default-features --features csr`)
//! - `ssr` (default): [`render_page`] and the `portfolio-export` CLI, which
//!   write the page as a static HTML document
//!
//! ## Static rendering
//!
//! ```rust,ignore
//! use portfolio_motion::MotionConfig;
//!
//! let html = portfolio_site::render_page(&MotionConfig {
//!     reduced_motion: true,
//!     ..MotionConfig::default()
//! });
//! assert!(html.starts_with("<!DOCTYPE html>"));
//! ```
//!
//! Natively no clock runs, so every animated value renders at its starting
//! point: hidden entrance poses, or final poses with reduced motion.

pub mod components;
pub mod content;
pub mod presets;
pub mod runtime;
pub mod sections;
pub mod styles;

use leptos::prelude::*;
use portfolio_motion::MotionConfig;

use crate::sections::*;
use crate::styles::PAGE_CSS;

/// Root of the page. Uses the [`MotionConfig`] in context, or the embedded
/// site config when none was provided.
#[component]
pub fn App() -> impl IntoView {
    if use_context::<MotionConfig>().is_none() {
        provide_context(runtime::site_config());
    }

    view! {
        <style>{PAGE_CSS}</style>
        <div class="page">
            <CustomCursor />
            <SpaceBackground />
            <Navigation />
            <main>
                <HeroSection />
                <AboutSection />
                <LeetCodeSection />
                <AchievementsSection />
                <ProjectsSection />
                <SkillsSection />
                <ContactSection />
            </main>
            <Footer />
        </div>
    }
}

/// The complete HTML document around [`App`].
#[cfg(feature = "ssr")]
#[component]
fn PageDocument() -> impl IntoView {
    view! {
        <html lang="en">
            <head>
                <meta charset="UTF-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <title>{format!("{} - Portfolio", content::OWNER_NAME)}</title>
            </head>
            <body>
                <App />
            </body>
        </html>
    }
}

/// Render the whole page to an HTML document with `config` in effect.
///
/// Every motion scope opened while rendering is closed again before this
/// returns.
#[cfg(feature = "ssr")]
pub fn render_page(config: &MotionConfig) -> String {
    use leptos::reactive::owner::Owner;
    use leptos::tachys::view::RenderHtml;

    let owner = Owner::new();
    let html = owner.with(|| {
        provide_context(config.clone());
        view! { <PageDocument /> }.to_html()
    });
    owner.cleanup();

    // Leptos doesn't include DOCTYPE, so we add it
    format!("<!DOCTYPE html>\n{html}")
}
