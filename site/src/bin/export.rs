//! # portfolio-export
//!
//! Render the portfolio to a single static HTML file.
//!
//! ```bash
//! # Readable without JavaScript: every section in its final pose
//! portfolio-export --out dist/index.html
//!
//! # Reproducible particle layout
//! portfolio-export --seed 42
//!
//! # Keep the hidden entrance poses, for pages that add their own script
//! portfolio-export --animated --config portfolio.toml
//! ```

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use portfolio_motion::MotionConfig;
use tracing::{debug, info};

#[derive(Parser, Debug)]
#[command(name = "portfolio-export")]
#[command(about = "Render the portfolio page to a static HTML file")]
#[command(version)]
struct Args {
    /// Output file
    #[arg(long, short, default_value = "dist/index.html")]
    out: PathBuf,

    /// Motion config (TOML). Defaults to the config embedded in the site
    #[arg(long, short)]
    config: Option<PathBuf>,

    /// Seed for particle and star positions
    #[arg(long)]
    seed: Option<u64>,

    /// Render entrance animations in their hidden starting poses
    #[arg(long)]
    animated: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn load_config(path: Option<&Path>) -> Result<MotionConfig> {
    let Some(path) = path else {
        return Ok(portfolio_site::runtime::site_config());
    };
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    let config = MotionConfig::from_toml_str(&text)
        .with_context(|| format!("invalid config {}", path.display()))?;
    debug!(path = %path.display(), "loaded motion config");
    Ok(config)
}

fn run(args: Args) -> Result<()> {
    let mut config = load_config(args.config.as_deref())?;
    if let Some(seed) = args.seed {
        config.particles.seed = Some(seed);
    }
    config.reduced_motion = !args.animated;

    let html = portfolio_site::render_page(&config);

    if let Some(parent) = args.out.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    std::fs::write(&args.out, &html)
        .with_context(|| format!("failed to write {}", args.out.display()))?;

    info!(
        path = %args.out.display(),
        bytes = html.len(),
        animated = args.animated,
        "page exported"
    );
    println!("{}", args.out.display());
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| args.log_level.parse().unwrap_or_default()),
        )
        .init();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("[portfolio-export] Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
