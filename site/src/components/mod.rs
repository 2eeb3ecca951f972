//! Shared building blocks used by several sections.

mod icons;
mod section;

pub use icons::{Glyph, Icon};
pub use section::{SectionHeading, SectionShell};
