// src/config/guesser_config.rs

use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Tuning knobs for a relation search.
///
/// The 20-number input cap and the pre-sized registry capacity are part
/// of the search contract and deliberately not configurable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GuesserConfig {
    /// Logging level (error, warn, info, debug, trace)
    pub log_level: String,

    /// Number of threads for the search sections (None lets rayon decide)
    #[serde(default)]
    pub threads: Option<usize>,

    /// Convergent cap for the continued-fraction Wiener attack
    pub wiener_max_iterations: usize,

    /// Random-base redraws the RSA factor recovery will attempt before
    /// giving up on a triple
    pub factor_recovery_max_retries: usize,
}

impl Default for GuesserConfig {
    fn default() -> Self {
        GuesserConfig {
            log_level: "info".to_string(),
            threads: None, // Use rayon's default
            wiener_max_iterations: 5000,
            factor_recovery_max_retries: 64,
        }
    }
}

impl GuesserConfig {
    /// Load configuration with precedence: config file → env vars → defaults
    pub fn load() -> Result<Self, ConfigError> {
        let mut builder = Config::builder()
            // Start with defaults
            .set_default("log_level", "info")?
            .set_default("wiener_max_iterations", 5000)?
            .set_default("factor_recovery_max_retries", 64)?;

        // Try to load from config files (TOML preferred, YAML fallback)
        if Path::new("guesser.toml").exists() {
            builder = builder.add_source(File::with_name("guesser.toml"));
        } else if Path::new("guesser.yaml").exists() {
            builder = builder.add_source(File::with_name("guesser.yaml"));
        }

        // Override with environment variables (prefix: GUESSER_)
        builder = builder.add_source(
            Environment::with_prefix("GUESSER")
                .separator("_")
                .try_parsing(true),
        );

        let config = builder.build()?;
        config.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GuesserConfig::default();
        assert_eq!(config.log_level, "info");
        assert_eq!(config.threads, None);
        assert_eq!(config.wiener_max_iterations, 5000);
        assert_eq!(config.factor_recovery_max_retries, 64);
    }

    #[test]
    fn test_load_without_file() {
        // Should successfully load defaults when no config file exists
        let config = GuesserConfig::load().unwrap_or_else(|_| GuesserConfig::default());
        assert_eq!(config.wiener_max_iterations, 5000);
    }
}
