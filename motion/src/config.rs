//! Motion configuration.
//!
//! Loaded from TOML. Every field has a default, so an empty file (or no file
//! at all) gives the stock page behaviour.

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::warn;

use crate::error::MotionError;
use crate::particles::MAX_PARTICLES;
use crate::stagger::Stagger;
use crate::visibility::ObserverOptions;

/// Root configuration structure.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MotionConfig {
    /// Section visibility observer.
    pub observer: ObserverOptions,
    /// Decorative particle fields.
    pub particles: ParticleConfig,
    /// Entrance stagger for grids.
    pub stagger: Stagger,
    /// Show everything in its final pose and skip ambient loops.
    pub reduced_motion: bool,
}

/// Star field size and optional seed. The achievements field is always
/// [`PARTICLE_COUNT`](crate::PARTICLE_COUNT) particles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParticleConfig {
    /// Stars in the page background.
    pub star_count: usize,
    /// Fixed seed for reproducible fields. Unset means fresh entropy per mount.
    pub seed: Option<u64>,
}

impl Default for ParticleConfig {
    fn default() -> Self {
        Self {
            star_count: 48,
            seed: None,
        }
    }
}

impl MotionConfig {
    /// Parse and validate TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, MotionError> {
        let config: MotionConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Load config from a specific path.
    /// Returns default config if the file doesn't exist or is invalid.
    pub fn load_from_path(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match Self::from_toml_str(&content) {
                Ok(config) => config,
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "ignoring motion config");
                    Self::default()
                }
            },
            Err(e) => {
                warn!(path = %path.display(), error = %e, "failed to read motion config");
                Self::default()
            }
        }
    }

    pub fn validate(&self) -> Result<(), MotionError> {
        self.observer.validate()?;
        self.stagger.validate()?;
        let count = self.particles.star_count;
        if count == 0 || count > MAX_PARTICLES {
            return Err(MotionError::InvalidParticleCount {
                count,
                max: MAX_PARTICLES,
            });
        }
        Ok(())
    }

    /// Seed for one particle field, distinct per field but stable per config.
    pub fn seed_for(&self, salt: u64) -> Option<u64> {
        self.particles
            .seed
            .map(|seed| seed ^ salt.wrapping_mul(0x9E37_79B9_7F4A_7C15))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = MotionConfig::default();
        assert_eq!(config.observer, ObserverOptions::SECTION);
        assert_eq!(config.particles.star_count, 48);
        assert_eq!(config.particles.seed, None);
        assert_eq!(config.stagger, Stagger::new(0.3, 0.15));
        assert!(!config.reduced_motion);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn empty_text_is_default() {
        assert_eq!(MotionConfig::from_toml_str("").unwrap(), MotionConfig::default());
    }

    #[test]
    fn partial_tables_keep_other_defaults() {
        let config = MotionConfig::from_toml_str(
            r#"
reduced_motion = true

[observer]
threshold = 0.5

[particles]
seed = 99
"#,
        )
        .unwrap();
        assert!(config.reduced_motion);
        assert_eq!(config.observer.threshold, 0.5);
        assert!(config.observer.trigger_once);
        assert_eq!(config.particles.star_count, 48);
        assert_eq!(config.particles.seed, Some(99));
    }

    #[test]
    fn invalid_values_are_rejected() {
        assert_eq!(
            MotionConfig::from_toml_str("[observer]\nthreshold = 2.0\n"),
            Err(MotionError::InvalidThreshold(2.0))
        );
        assert!(MotionConfig::from_toml_str("[particles]\nstar_count = 0\n").is_err());
        assert!(MotionConfig::from_toml_str("[stagger]\ndelay_children = -1.0\n").is_err());
        assert!(matches!(
            MotionConfig::from_toml_str("reduced_motion = \"yes\""),
            Err(MotionError::Config(_))
        ));
    }

    #[test]
    fn load_missing_file_gives_default() {
        let temp = TempDir::new().expect("temp dir");
        let config = MotionConfig::load_from_path(&temp.path().join("portfolio.toml"));
        assert_eq!(config, MotionConfig::default());
    }

    #[test]
    fn load_invalid_file_gives_default() {
        let temp = TempDir::new().expect("temp dir");
        let path = temp.path().join("portfolio.toml");
        std::fs::write(&path, "[observer]\nthreshold = -3.0\n").expect("write config");
        assert_eq!(MotionConfig::load_from_path(&path), MotionConfig::default());
    }

    #[test]
    fn load_valid_file() {
        let temp = TempDir::new().expect("temp dir");
        let path = temp.path().join("portfolio.toml");
        let mut file = std::fs::File::create(&path).expect("create config");
        writeln!(file, "[particles]\nstar_count = 10\nseed = 3\n").expect("write config");

        let config = MotionConfig::load_from_path(&path);
        assert_eq!(config.particles.star_count, 10);
        assert_eq!(config.particles.seed, Some(3));
    }

    #[test]
    fn seeds_differ_per_field_but_are_stable() {
        let mut config = MotionConfig::default();
        assert_eq!(config.seed_for(1), None);
        config.particles.seed = Some(5);
        assert_eq!(config.seed_for(1), config.seed_for(1));
        assert_ne!(config.seed_for(1), config.seed_for(2));
    }
}
