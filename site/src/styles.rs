//! Page stylesheet.
//!
//! Embedded in a `<style>` element by the app root, so the browser build and
//! the static export look the same without a CSS pipeline. Animated
//! properties are not here: motion writes `transform`, `opacity` and colors
//! into inline styles every frame.
//!
//! Theme colors are HSL triples in CSS variables and must stay in sync with
//! `ColorToken::hsla`.

/// Complete CSS for the portfolio - dark space theme with neon accents.
pub const PAGE_CSS: &str = r#"
:root {
    --background: 230 35% 5%;
    --foreground: 210 40% 96%;
    --card: 230 30% 10%;
    --border: 230 20% 22%;
    --muted: 220 15% 65%;
    --primary: 190 95% 55%;
    --secondary: 320 85% 60%;
    --accent: 270 90% 65%;
    --success: 145 70% 50%;
    --radius: 14px;
    --font-sans: 'Inter', system-ui, -apple-system, 'Segoe UI', sans-serif;
    --font-mono: 'JetBrains Mono', 'SF Mono', Menlo, monospace;
}

*, *::before, *::after { box-sizing: border-box; }

html { scroll-behavior: smooth; }

@media (prefers-reduced-motion: reduce) {
    html { scroll-behavior: auto; }
}

body {
    margin: 0;
    background: hsl(var(--background));
    color: hsl(var(--foreground));
    font-family: var(--font-sans);
    line-height: 1.6;
    -webkit-font-smoothing: antialiased;
    overflow-x: hidden;
}

a { color: inherit; text-decoration: none; }

.page { position: relative; min-height: 100vh; }
main { position: relative; z-index: 10; }

/* ------------------------------------------------------------------ */
/* Theme utilities                                                     */
/* ------------------------------------------------------------------ */

.text-primary { color: hsl(var(--primary)); }
.text-secondary { color: hsl(var(--secondary)); }
.text-accent { color: hsl(var(--accent)); }
.text-success { color: hsl(var(--success)); }

.bg-primary { background: hsl(var(--primary)); }
.bg-secondary { background: hsl(var(--secondary)); }
.bg-accent { background: hsl(var(--accent)); }
.bg-success { background: hsl(var(--success)); }

.glow-primary { box-shadow: 0 0 24px hsl(var(--primary) / 0.25); }
.glow-secondary { box-shadow: 0 0 24px hsl(var(--secondary) / 0.25); }
.glow-accent { box-shadow: 0 0 24px hsl(var(--accent) / 0.25); }

.gradient-text {
    background: linear-gradient(90deg, hsl(var(--accent)), hsl(var(--primary)), hsl(var(--accent)));
    background-size: 200% 100%;
    -webkit-background-clip: text;
    background-clip: text;
    color: transparent;
}

.icon { width: 1.5rem; height: 1.5rem; }
.icon-small { width: 1rem; height: 1rem; }

/* ------------------------------------------------------------------ */
/* Cursor and background                                               */
/* ------------------------------------------------------------------ */

.cursor-layer { position: fixed; inset: 0; pointer-events: none; z-index: 100; }
.cursor-layer.hidden { display: none; }
.cursor-ring, .cursor-dot { position: absolute; top: 0; left: 0; border-radius: 50%; }
.cursor-ring {
    width: 32px; height: 32px; margin: -16px 0 0 -16px;
    border: 1px solid hsl(var(--primary) / 0.7);
    box-shadow: 0 0 12px hsl(var(--primary) / 0.4);
}
.cursor-dot {
    width: 6px; height: 6px; margin: -3px 0 0 -3px;
    background: hsl(var(--primary));
}

@media (hover: none) {
    .cursor-layer { display: none; }
}

.space-background { position: fixed; inset: 0; pointer-events: none; overflow: hidden; z-index: 0; }
.star { position: absolute; border-radius: 50%; background: hsl(var(--foreground)); }
.nebula { position: absolute; width: 40vw; height: 40vw; border-radius: 50%; filter: blur(120px); opacity: 0.15; }
.nebula-primary { top: -10vw; left: -10vw; background: hsl(var(--primary)); }
.nebula-accent { bottom: -10vw; right: -10vw; background: hsl(var(--accent)); }

/* ------------------------------------------------------------------ */
/* Navigation                                                          */
/* ------------------------------------------------------------------ */

.nav {
    position: fixed; top: 0; left: 0; right: 0; z-index: 50;
    background: hsl(var(--background) / 0.8);
    backdrop-filter: blur(12px);
    border-bottom: 1px solid hsl(var(--border) / 0.5);
}
.nav-inner {
    max-width: 72rem; margin: 0 auto; padding: 0.9rem 1.5rem;
    display: flex; align-items: center; justify-content: space-between;
}
.nav-brand { font-weight: 700; font-size: 1.2rem; }
.nav-links { display: flex; gap: 1.5rem; }
.nav-link { color: hsl(var(--muted)); font-size: 0.95rem; transition: color 0.2s; }
.nav-link:hover { color: hsl(var(--primary)); }
.nav-toggle { display: none; background: none; border: 0; color: hsl(var(--foreground)); cursor: pointer; }
.nav-drawer { display: flex; flex-direction: column; padding: 0.5rem 1.5rem 1rem; }
.nav-drawer-link { padding: 0.6rem 0; color: hsl(var(--muted)); }

@media (max-width: 768px) {
    .nav-links { display: none; }
    .nav-toggle { display: block; }
}

/* ------------------------------------------------------------------ */
/* Sections                                                            */
/* ------------------------------------------------------------------ */

.section { position: relative; padding: 6rem 1.5rem; overflow: hidden; }
.section-inner { position: relative; z-index: 1; max-width: 72rem; margin: 0 auto; }
.section-heading { text-align: center; margin-bottom: 3rem; }
.section-heading h2 { font-size: clamp(2rem, 5vw, 3rem); margin: 0; }
.section-subtitle { color: hsl(var(--muted)); margin-top: 0.5rem; }
.section-gradient { position: absolute; inset: 0; pointer-events: none; }

.hero { min-height: 100vh; display: flex; align-items: center; justify-content: center; text-align: center; }
.hero-greeting { color: hsl(var(--muted)); font-family: var(--font-mono); margin: 0; }
.hero-name { font-size: clamp(2.5rem, 8vw, 5rem); margin: 0.25rem 0; }
.hero-role { font-size: clamp(1.1rem, 3vw, 1.5rem); margin: 0; }
.hero-tagline { color: hsl(var(--muted)); margin: 1.5rem 0 2rem; }
.hero-tagline p { margin: 0; }
.hero-actions { display: flex; gap: 1rem; justify-content: center; flex-wrap: wrap; }
.scroll-hint { position: absolute; bottom: 2rem; left: 50%; margin-left: -0.75rem; color: hsl(var(--muted)); }

.button { padding: 0.75rem 1.75rem; border-radius: 999px; font-weight: 600; }
.button-primary { background: hsl(var(--primary)); color: hsl(var(--background)); }
.button-ghost { border: 1px solid hsl(var(--border)); }

.card-surface, .fact-card, .stat-card, .project-card, .skill-group, .contact-card, .achievement-card {
    background: linear-gradient(135deg, hsl(var(--card) / 0.8), hsl(var(--card) / 0.4));
    border: 1px solid hsl(var(--border) / 0.4);
    border-radius: var(--radius);
    backdrop-filter: blur(6px);
}

.about-grid { display: grid; grid-template-columns: 1.2fr 1fr; gap: 3rem; align-items: center; }
.about-bio { color: hsl(var(--muted)); font-size: 1.05rem; }
.fact-grid { display: grid; grid-template-columns: repeat(2, 1fr); gap: 1rem; }
.fact-card { padding: 1.5rem; text-align: center; display: flex; flex-direction: column; }
.fact-value { font-size: 2rem; font-weight: 700; }
.fact-label { color: hsl(var(--muted)); font-size: 0.9rem; }

.leetcode-summary { display: flex; gap: 1.5rem; justify-content: center; margin-bottom: 2.5rem; flex-wrap: wrap; }
.stat-card { padding: 1.5rem 2.5rem; display: flex; flex-direction: column; align-items: center; }
.stat-value { font-size: 2.2rem; font-weight: 700; }
.stat-label { color: hsl(var(--muted)); font-size: 0.9rem; }
.difficulty-list { max-width: 40rem; margin: 0 auto; display: flex; flex-direction: column; gap: 1.25rem; }
.difficulty-header, .skill-header { display: flex; justify-content: space-between; font-size: 0.95rem; margin-bottom: 0.4rem; }
.difficulty-count, .skill-level { color: hsl(var(--muted)); font-family: var(--font-mono); }
.bar-track { height: 8px; border-radius: 999px; background: hsl(var(--border) / 0.5); overflow: hidden; }
.bar-fill { height: 100%; border-radius: 999px; }

.achievements { perspective: 1000px; }
.particle-layer { position: absolute; inset: 0; pointer-events: none; }
.particle { position: absolute; width: 8px; height: 8px; border-radius: 50%; background: hsl(var(--primary) / 0.2); }
.achievement-grid { display: grid; grid-template-columns: repeat(4, 1fr); gap: 1.5rem; }
.achievement-item { position: relative; cursor: pointer; transform-style: preserve-3d; }
.achievement-card { position: relative; height: 10rem; padding: 1.5rem; overflow: hidden; }
.achievement-glow, .achievement-ring { position: absolute; inset: 0; border-radius: var(--radius); pointer-events: none; }
.achievement-glow { opacity: 0; transition: opacity 0.5s; }
.achievement-item:hover .achievement-glow { opacity: 1; }
.achievement-ring { border: 2px solid transparent; }
.achievement-content {
    position: relative; z-index: 1; height: 100%;
    display: flex; flex-direction: column; align-items: center; justify-content: center; text-align: center;
}
.achievement-icon { margin-bottom: 0.75rem; }
.achievement-icon .icon { width: 2rem; height: 2rem; }
.achievement-title { font-size: 0.9rem; margin: 0 0 0.25rem; }
.achievement-description { font-size: 0.75rem; color: hsl(var(--muted)); margin: 0; }
.achievements-caption { text-align: center; margin-top: 3rem; color: hsl(var(--muted)); font-size: 1.1rem; }
.corner-dot { position: absolute; z-index: 2; width: 8px; height: 8px; border-radius: 50%; }
.corner-dot.top-left { top: 0.5rem; left: 0.5rem; }
.corner-dot.top-right { top: 0.5rem; right: 0.5rem; }
.corner-dot.bottom-right { bottom: 0.5rem; right: 0.5rem; }
.corner-dot.bottom-left { bottom: 0.5rem; left: 0.5rem; }

.project-grid { display: grid; grid-template-columns: repeat(2, 1fr); gap: 1.5rem; }
.project-card { padding: 1.75rem; display: flex; flex-direction: column; gap: 0.75rem; }
.project-title { margin: 0; font-size: 1.3rem; }
.project-blurb { margin: 0; color: hsl(var(--muted)); }
.tag-list { list-style: none; padding: 0; margin: 0; display: flex; flex-wrap: wrap; gap: 0.5rem; }
.tag { font-family: var(--font-mono); font-size: 0.75rem; padding: 0.2rem 0.6rem; border-radius: 999px; border: 1px solid hsl(var(--border)); }
.project-link { display: inline-flex; align-items: center; gap: 0.4rem; color: hsl(var(--primary)); margin-top: auto; }

.skill-grid { display: grid; grid-template-columns: repeat(3, 1fr); gap: 1.5rem; }
.skill-group { padding: 1.75rem; display: flex; flex-direction: column; gap: 1rem; }
.skill-group-title { margin: 0; }

.contact-intro { text-align: center; color: hsl(var(--muted)); max-width: 36rem; margin: 0 auto 2.5rem; }
.contact-grid { display: grid; grid-template-columns: repeat(3, 1fr); gap: 1.5rem; }
.contact-card { padding: 1.75rem; display: flex; flex-direction: column; align-items: center; gap: 0.4rem; }
.contact-label { font-weight: 600; }
.contact-value { color: hsl(var(--muted)); font-size: 0.9rem; }

.footer {
    position: relative; z-index: 10; padding: 2rem 1.5rem; text-align: center;
    border-top: 1px solid hsl(var(--border) / 0.5); color: hsl(var(--muted));
}
.footer-line { margin: 0 0 0.5rem; }
.back-to-top { display: inline-flex; align-items: center; gap: 0.4rem; }

@media (max-width: 900px) {
    .about-grid, .project-grid, .skill-grid, .contact-grid { grid-template-columns: 1fr; }
    .achievement-grid { grid-template-columns: repeat(2, 1fr); gap: 0.75rem; }
}
"#;
