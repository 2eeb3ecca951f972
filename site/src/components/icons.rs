//! Inline SVG glyphs.
//!
//! Stroke icons on a 24×24 grid in the Feather/Lucide style. A [`Glyph`] is
//! the symbolic name used by the content tables; [`Icon`] renders it.

use leptos::prelude::*;

/// Symbolic icon name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Glyph {
    Trophy,
    Award,
    Star,
    Target,
    Code,
    Zap,
    GitBranch,
    Users,
    Mail,
    Github,
    Linkedin,
    ExternalLink,
    ArrowDown,
    ArrowUp,
    Menu,
    Close,
}

impl Glyph {
    /// Path data, one entry per `<path>`.
    pub fn paths(self) -> &'static [&'static str] {
        match self {
            Glyph::Trophy => &[
                "M6 9H4.5a2.5 2.5 0 0 1 0-5H6",
                "M18 9h1.5a2.5 2.5 0 0 0 0-5H18",
                "M4 22h16",
                "M10 14.66V17c0 .55-.47.98-.97 1.21C7.85 18.75 7 20.24 7 22",
                "M14 14.66V17c0 .55.47.98.97 1.21C16.15 18.75 17 20.24 17 22",
                "M18 2H6v7a6 6 0 0 0 12 0V2Z",
            ],
            Glyph::Award => &[
                "M5 8a7 7 0 1 0 14 0a7 7 0 1 0-14 0",
                "M8.21 13.89L7 23l5-3 5 3-1.21-9.12",
            ],
            Glyph::Star => &[
                "M12 2l3.09 6.26L22 9.27l-5 4.87 1.18 6.88L12 17.77l-6.18 3.25L7 14.14 2 9.27l6.91-1.01L12 2z",
            ],
            Glyph::Target => &[
                "M2 12a10 10 0 1 0 20 0a10 10 0 1 0-20 0",
                "M6 12a6 6 0 1 0 12 0a6 6 0 1 0-12 0",
                "M10 12a2 2 0 1 0 4 0a2 2 0 1 0-4 0",
            ],
            Glyph::Code => &["M16 18l6-6-6-6", "M8 6l-6 6 6 6"],
            Glyph::Zap => &["M13 2L3 14h9l-1 8 10-12h-9l1-8z"],
            Glyph::GitBranch => &[
                "M6 3v12",
                "M15 6a3 3 0 1 0 6 0a3 3 0 1 0-6 0",
                "M3 18a3 3 0 1 0 6 0a3 3 0 1 0-6 0",
                "M18 9a9 9 0 0 1-9 9",
            ],
            Glyph::Users => &[
                "M17 21v-2a4 4 0 0 0-4-4H5a4 4 0 0 0-4 4v2",
                "M5 7a4 4 0 1 0 8 0a4 4 0 1 0-8 0",
                "M23 21v-2a4 4 0 0 0-3-3.87",
                "M16 3.13a4 4 0 0 1 0 7.75",
            ],
            Glyph::Mail => &[
                "M4 4h16c1.1 0 2 .9 2 2v12c0 1.1-.9 2-2 2H4c-1.1 0-2-.9-2-2V6c0-1.1.9-2 2-2z",
                "M22 6l-10 7L2 6",
            ],
            Glyph::Github => &[
                "M9 19c-5 1.5-5-2.5-7-3m14 6v-3.87a3.37 3.37 0 0 0-.94-2.61c3.14-.35 6.44-1.54 6.44-7A5.44 5.44 0 0 0 20 4.77 5.07 5.07 0 0 0 19.91 1S18.73.65 16 2.48a13.38 13.38 0 0 0-7 0C6.27.65 5.09 1 5.09 1A5.07 5.07 0 0 0 5 4.77a5.44 5.44 0 0 0-1.5 3.78c0 5.42 3.3 6.61 6.44 7A3.37 3.37 0 0 0 9 18.13V22",
            ],
            Glyph::Linkedin => &[
                "M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-2-2 2 2 0 0 0-2 2v7h-4v-7a6 6 0 0 1 6-6z",
                "M2 9h4v12H2z",
                "M2 4a2 2 0 1 0 4 0a2 2 0 1 0-4 0",
            ],
            Glyph::ExternalLink => &[
                "M18 13v6a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V8a2 2 0 0 1 2-2h6",
                "M15 3h6v6",
                "M10 14L21 3",
            ],
            Glyph::ArrowDown => &["M12 5v14", "M19 12l-7 7-7-7"],
            Glyph::ArrowUp => &["M12 19V5", "M5 12l7-7 7 7"],
            Glyph::Menu => &["M3 12h18", "M3 6h18", "M3 18h18"],
            Glyph::Close => &["M18 6L6 18", "M6 6l12 12"],
        }
    }
}

/// Renders a [`Glyph`] as an inline stroke SVG.
///
/// ```rust,ignore
/// view! { <Icon glyph=Glyph::Trophy class="achievement-icon" /> }
/// ```
#[component]
pub fn Icon(
    glyph: Glyph,
    /// Additional CSS class names
    #[prop(default = "icon")]
    class: &'static str,
    /// Stroke width in grid units
    #[prop(default = "1.5")]
    stroke_width: &'static str,
) -> impl IntoView {
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            width="24"
            height="24"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width=stroke_width
            stroke-linecap="round"
            stroke-linejoin="round"
            class=class
            aria-hidden="true"
        >
            {glyph.paths().iter().map(|d| view! { <path d=*d></path> }).collect_view()}
        </svg>
    }
}
