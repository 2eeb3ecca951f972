//! Page sections, top to bottom.

mod about;
mod achievements;
mod background;
mod contact;
mod cursor;
mod footer;
mod hero;
mod leetcode;
mod nav;
mod projects;
mod skills;

pub use about::AboutSection;
pub use achievements::AchievementsSection;
pub use background::SpaceBackground;
pub use contact::ContactSection;
pub use cursor::CustomCursor;
pub use footer::Footer;
pub use hero::HeroSection;
pub use leetcode::LeetCodeSection;
pub use nav::Navigation;
pub use projects::ProjectsSection;
pub use skills::SkillsSection;
