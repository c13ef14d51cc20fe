//! Dashboard configuration.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::data::summary::Thresholds;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("reading config '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("parsing config '{}': {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Settings for the dashboard. Every key is optional in the JSON file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Song table to load, relative to the working directory.
    pub data_path: PathBuf,
    /// Seed for the sample data offered when the table is missing.
    pub synthetic_seed: u64,
    /// p-value below which the correlation is labelled significant.
    pub significance_level: f64,
    /// Correlation above which both attributes read as growing together.
    pub strong_correlation: f64,
    /// How many genres (alphabetically first) are selected initially.
    pub default_genre_count: usize,
    /// Export file name prefix; the year range is appended.
    pub export_prefix: String,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        let thresholds = Thresholds::default();
        Self {
            data_path: PathBuf::from("top10_s.csv"),
            synthetic_seed: 42,
            significance_level: thresholds.significance_level,
            strong_correlation: thresholds.strong_correlation,
            default_genre_count: 3,
            export_prefix: "spotify_filtered".to_string(),
        }
    }
}

impl DashboardConfig {
    /// Read a JSON config file. Missing keys keep their defaults.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = serde_json::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        log::debug!("Loaded config from {}: {config:?}", path.display());
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.significance_level) {
            return Err(ConfigError::Invalid(format!(
                "significance_level must be within [0, 1], got {}",
                self.significance_level
            )));
        }
        if !(-1.0..=1.0).contains(&self.strong_correlation) {
            return Err(ConfigError::Invalid(format!(
                "strong_correlation must be within [-1, 1], got {}",
                self.strong_correlation
            )));
        }
        if self.export_prefix.trim().is_empty() {
            return Err(ConfigError::Invalid("export_prefix must not be empty".into()));
        }
        Ok(())
    }

    pub fn thresholds(&self) -> Thresholds {
        Thresholds {
            significance_level: self.significance_level,
            strong_correlation: self.strong_correlation,
        }
    }
}
