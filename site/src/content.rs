//! Static page content.
//!
//! Everything the page shows is defined here as literal tables, in display
//! order. Nothing is fetched or computed at runtime.

use portfolio_motion::Hsla;

use crate::components::Glyph;

/// Theme color a piece of content is tinted with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorToken {
    Primary,
    Secondary,
    Accent,
    Success,
}

impl ColorToken {
    /// Theme name, matching the `--<name>` CSS variable.
    pub fn name(self) -> &'static str {
        match self {
            ColorToken::Primary => "primary",
            ColorToken::Secondary => "secondary",
            ColorToken::Accent => "accent",
            ColorToken::Success => "success",
        }
    }

    /// Text color utility class.
    pub fn text_class(self) -> &'static str {
        match self {
            ColorToken::Primary => "text-primary",
            ColorToken::Secondary => "text-secondary",
            ColorToken::Accent => "text-accent",
            ColorToken::Success => "text-success",
        }
    }

    /// Glow class. There is no success glow; success cards glow with accent.
    pub fn glow_class(self) -> &'static str {
        match self {
            ColorToken::Primary => "glow-primary",
            ColorToken::Secondary => "glow-secondary",
            ColorToken::Accent | ColorToken::Success => "glow-accent",
        }
    }

    /// Hue used by animated borders and hover recolors. Must match the CSS
    /// variables in `styles.rs`.
    pub fn hsla(self) -> Hsla {
        match self {
            ColorToken::Primary => Hsla::new(190.0, 95.0, 55.0, 1.0),
            ColorToken::Secondary => Hsla::new(320.0, 85.0, 60.0, 1.0),
            ColorToken::Accent => Hsla::new(270.0, 90.0, 65.0, 1.0),
            ColorToken::Success => Hsla::new(145.0, 70.0, 50.0, 1.0),
        }
    }
}

/// One card in the achievements grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Achievement {
    pub glyph: Glyph,
    pub title: &'static str,
    pub description: &'static str,
    pub color: ColorToken,
}

pub const ACHIEVEMENTS: [Achievement; 8] = [
    Achievement {
        glyph: Glyph::Trophy,
        title: "LeetCode Knight",
        description: "500+ problems solved",
        color: ColorToken::Accent,
    },
    Achievement {
        glyph: Glyph::Award,
        title: "Top Performer",
        description: "Contest top 10%",
        color: ColorToken::Primary,
    },
    Achievement {
        glyph: Glyph::Star,
        title: "50-Day Streak",
        description: "Consistent coding",
        color: ColorToken::Secondary,
    },
    Achievement {
        glyph: Glyph::Target,
        title: "Goal Achiever",
        description: "2024 targets met",
        color: ColorToken::Success,
    },
    Achievement {
        glyph: Glyph::Code,
        title: "Full Stack Pro",
        description: "15+ projects built",
        color: ColorToken::Accent,
    },
    Achievement {
        glyph: Glyph::Zap,
        title: "Fast Learner",
        description: "New tech mastery",
        color: ColorToken::Primary,
    },
    Achievement {
        glyph: Glyph::GitBranch,
        title: "Open Source",
        description: "Active contributor",
        color: ColorToken::Secondary,
    },
    Achievement {
        glyph: Glyph::Users,
        title: "Team Player",
        description: "Collaborative spirit",
        color: ColorToken::Success,
    },
];

// ============================================================================
// Identity
// ============================================================================

pub const OWNER_NAME: &str = "Alex Rivera";
pub const OWNER_ROLE: &str = "Full Stack Developer & Competitive Programmer";
pub const HERO_TAGLINES: [&str; 2] = [
    "I build fast, reliable software for the web",
    "and solve algorithm puzzles for fun.",
];
pub const COPYRIGHT_YEAR: &str = "2025";

// ============================================================================
// Navigation
// ============================================================================

/// A link in the navigation bar; `anchor` is the target section id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub anchor: &'static str,
}

pub const NAV_LINKS: [NavLink; 7] = [
    NavLink { label: "Home", anchor: "hero" },
    NavLink { label: "About", anchor: "about" },
    NavLink { label: "LeetCode", anchor: "leetcode" },
    NavLink { label: "Strength", anchor: "achievements" },
    NavLink { label: "Projects", anchor: "projects" },
    NavLink { label: "Skills", anchor: "skills" },
    NavLink { label: "Contact", anchor: "contact" },
];

// ============================================================================
// About
// ============================================================================

pub const ABOUT_BIO: [&str; 2] = [
    "I'm a developer who enjoys the whole stack: shaping APIs, tuning queries and polishing the last pixel of an interface.",
    "Competitive programming keeps my problem solving sharp, and open source keeps me honest about code quality.",
];

/// A headline number in the about section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fact {
    pub value: &'static str,
    pub label: &'static str,
    pub color: ColorToken,
}

pub const ABOUT_FACTS: [Fact; 4] = [
    Fact { value: "3+", label: "Years coding", color: ColorToken::Primary },
    Fact { value: "15+", label: "Projects shipped", color: ColorToken::Accent },
    Fact { value: "500+", label: "Problems solved", color: ColorToken::Secondary },
    Fact { value: "10+", label: "Technologies", color: ColorToken::Success },
];

// ============================================================================
// LeetCode
// ============================================================================

/// Solved count for one difficulty tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DifficultyStat {
    pub label: &'static str,
    pub solved: u32,
    pub total: u32,
    pub color: ColorToken,
}

impl DifficultyStat {
    /// Fraction solved in `[0, 1]`.
    pub fn ratio(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            (self.solved as f64 / self.total as f64).min(1.0)
        }
    }
}

pub const LEETCODE_STATS: [DifficultyStat; 3] = [
    DifficultyStat { label: "Easy", solved: 210, total: 850, color: ColorToken::Success },
    DifficultyStat { label: "Medium", solved: 245, total: 1780, color: ColorToken::Primary },
    DifficultyStat { label: "Hard", solved: 52, total: 790, color: ColorToken::Secondary },
];

pub const CONTEST_RATING: u32 = 1872;
pub const CONTEST_BADGE: &str = "Knight";

/// Total problems solved across all tiers.
pub fn total_solved() -> u32 {
    LEETCODE_STATS.iter().map(|s| s.solved).sum()
}

// ============================================================================
// Projects
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub title: &'static str,
    pub blurb: &'static str,
    pub tags: &'static [&'static str],
    pub href: &'static str,
    pub color: ColorToken,
}

pub const PROJECTS: [Project; 4] = [
    Project {
        title: "DevBoard",
        blurb: "Realtime team dashboard with live presence, drag-and-drop boards and offline sync.",
        tags: &["Rust", "Axum", "WebSockets", "PostgreSQL"],
        href: "https://github.com/alexrivera/devboard",
        color: ColorToken::Primary,
    },
    Project {
        title: "AlgoViz",
        blurb: "Step-through visualizer for graph and dynamic-programming algorithms.",
        tags: &["TypeScript", "Canvas", "Algorithms"],
        href: "https://github.com/alexrivera/algoviz",
        color: ColorToken::Accent,
    },
    Project {
        title: "ShopLite",
        blurb: "Small-business storefront with inventory, payments and an admin panel.",
        tags: &["Next.js", "Stripe", "Prisma"],
        href: "https://github.com/alexrivera/shoplite",
        color: ColorToken::Secondary,
    },
    Project {
        title: "Orbit Portfolio",
        blurb: "This site: a Leptos single-page app with a small spring and keyframe motion layer.",
        tags: &["Rust", "Leptos", "WASM"],
        href: "https://github.com/alexrivera/portfolio",
        color: ColorToken::Success,
    },
];

// ============================================================================
// Skills
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Skill {
    pub name: &'static str,
    /// Self-assessed level, 0..=100.
    pub level: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkillGroup {
    pub title: &'static str,
    pub color: ColorToken,
    pub skills: &'static [Skill],
}

pub const SKILL_GROUPS: [SkillGroup; 3] = [
    SkillGroup {
        title: "Frontend",
        color: ColorToken::Primary,
        skills: &[
            Skill { name: "TypeScript", level: 90 },
            Skill { name: "React", level: 88 },
            Skill { name: "Leptos", level: 72 },
            Skill { name: "CSS & Animation", level: 85 },
        ],
    },
    SkillGroup {
        title: "Backend",
        color: ColorToken::Accent,
        skills: &[
            Skill { name: "Rust", level: 80 },
            Skill { name: "Node.js", level: 85 },
            Skill { name: "PostgreSQL", level: 78 },
            Skill { name: "Redis", level: 70 },
        ],
    },
    SkillGroup {
        title: "Tools & Practice",
        color: ColorToken::Secondary,
        skills: &[
            Skill { name: "Data Structures & Algorithms", level: 92 },
            Skill { name: "Git", level: 88 },
            Skill { name: "Docker", level: 75 },
            Skill { name: "CI/CD", level: 72 },
        ],
    },
];

// ============================================================================
// Contact
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactLink {
    pub glyph: Glyph,
    pub label: &'static str,
    pub value: &'static str,
    pub href: &'static str,
}

pub const CONTACT_LINKS: [ContactLink; 3] = [
    ContactLink {
        glyph: Glyph::Mail,
        label: "Email",
        value: "alex@rivera.dev",
        href: "mailto:alex@rivera.dev",
    },
    ContactLink {
        glyph: Glyph::Github,
        label: "GitHub",
        value: "github.com/alexrivera",
        href: "https://github.com/alexrivera",
    },
    ContactLink {
        glyph: Glyph::Linkedin,
        label: "LinkedIn",
        value: "linkedin.com/in/alexrivera",
        href: "https://www.linkedin.com/in/alexrivera",
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn achievements_are_fixed_and_ordered() {
        assert_eq!(ACHIEVEMENTS.len(), 8);
        let titles: Vec<&str> = ACHIEVEMENTS.iter().map(|a| a.title).collect();
        assert_eq!(
            titles,
            vec![
                "LeetCode Knight",
                "Top Performer",
                "50-Day Streak",
                "Goal Achiever",
                "Full Stack Pro",
                "Fast Learner",
                "Open Source",
                "Team Player",
            ]
        );
        assert_eq!(ACHIEVEMENTS[0].glyph, Glyph::Trophy);
        assert_eq!(ACHIEVEMENTS[7].glyph, Glyph::Users);
    }

    #[test]
    fn achievement_titles_are_unique() {
        let mut titles: Vec<&str> = ACHIEVEMENTS.iter().map(|a| a.title).collect();
        titles.sort_unstable();
        titles.dedup();
        assert_eq!(titles.len(), ACHIEVEMENTS.len());
    }

    #[test]
    fn color_tokens_cycle_through_the_grid() {
        let colors: Vec<&str> = ACHIEVEMENTS.iter().map(|a| a.color.text_class()).collect();
        assert_eq!(
            colors,
            vec![
                "text-accent",
                "text-primary",
                "text-secondary",
                "text-success",
                "text-accent",
                "text-primary",
                "text-secondary",
                "text-success",
            ]
        );
    }

    #[test]
    fn success_glows_with_accent() {
        assert_eq!(ColorToken::Success.glow_class(), "glow-accent");
        assert_eq!(ColorToken::Primary.glow_class(), "glow-primary");
    }

    #[test]
    fn nav_links_point_at_sections() {
        let anchors: Vec<&str> = NAV_LINKS.iter().map(|l| l.anchor).collect();
        assert_eq!(
            anchors,
            vec!["hero", "about", "leetcode", "achievements", "projects", "skills", "contact"]
        );
    }

    #[test]
    fn leetcode_totals_match_the_badge_claim() {
        assert!(total_solved() >= 500);
        for stat in LEETCODE_STATS {
            assert!(stat.solved <= stat.total, "{}", stat.label);
            assert!((0.0..=1.0).contains(&stat.ratio()));
        }
    }

    #[test]
    fn ratio_handles_empty_tier() {
        let empty = DifficultyStat {
            label: "None",
            solved: 0,
            total: 0,
            color: ColorToken::Primary,
        };
        assert_eq!(empty.ratio(), 0.0);
    }

    #[test]
    fn skill_levels_are_percentages() {
        for group in SKILL_GROUPS {
            assert!(!group.skills.is_empty(), "{}", group.title);
            assert!(group.skills.iter().all(|s| s.level <= 100));
        }
    }
}
