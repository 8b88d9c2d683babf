//! YAML configuration file support for the claimcheck pipeline.
//!
//! Deployments tune the match thresholds per environment; this module loads
//! them from a single YAML file instead of scattering env vars.
//!
//! ## Example YAML Configuration
//!
//! ```yaml
//! # Claimcheck pipeline configuration
//! version: "1.0"
//! name: "production"
//!
//! matcher:
//!   min_common_bytes: 25
//!   min_overlap_percent: 80
//!   chunk:
//!     ratio_threshold: 6
//!     window_factor: 2
//! ```

use std::fs;
use std::path::Path;

use matcher::MatchConfig;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur when loading YAML configuration files
#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    #[error("failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("validation error: {0}")]
    Validation(String),

    #[error("unsupported config version: {0}")]
    UnsupportedVersion(String),
}

/// Top-level YAML configuration for the claimcheck pipeline
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ClaimcheckConfig {
    /// Configuration format version
    pub version: String,

    /// Optional configuration name/description
    #[serde(default)]
    pub name: Option<String>,

    /// Match decision thresholds (includes the chunking strategy)
    #[serde(default)]
    pub matcher: MatchConfig,
}

impl ClaimcheckConfig {
    /// Load a YAML configuration file from the given path
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigLoadError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse YAML configuration from a string
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigLoadError> {
        let config: ClaimcheckConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// The match configuration carried by this file.
    pub fn match_config(&self) -> MatchConfig {
        self.matcher.clone()
    }

    /// Validate the configuration
    fn validate(&self) -> Result<(), ConfigLoadError> {
        match self.version.as_str() {
            "1.0" | "1" => {}
            v => return Err(ConfigLoadError::UnsupportedVersion(v.to_string())),
        }

        self.matcher
            .validate()
            .map_err(|err| ConfigLoadError::Validation(err.to_string()))
    }
}

impl Default for ClaimcheckConfig {
    fn default() -> Self {
        Self {
            version: "1.0".to_string(),
            name: None,
            matcher: MatchConfig::default(),
        }
    }
}
