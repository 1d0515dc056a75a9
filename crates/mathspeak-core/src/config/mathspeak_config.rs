//! Top-level mathspeak configuration with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{defaults, EngineConfig, ObservabilityConfig, PostProcessingConfig, RulesConfig};
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`MATHSPEAK_*`)
/// 2. Project config (`mathspeak.toml` in the project root)
/// 3. Compiled defaults
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MathspeakConfig {
    pub engine: EngineConfig,
    pub post_processing: PostProcessingConfig,
    pub rules: RulesConfig,
    pub observability: ObservabilityConfig,
}

impl MathspeakConfig {
    /// Load configuration for the project rooted at `root`.
    pub fn load(root: &Path) -> Result<Self, ConfigError> {
        let project_config_path = root.join(defaults::PROJECT_CONFIG_FILENAME);
        let mut config = if project_config_path.exists() {
            Self::from_file(&project_config_path)?
        } else {
            Self::default()
        };

        config.apply_env_overrides(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file. Missing keys take their defaults.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;
        toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Apply `MATHSPEAK_*` overrides read through `lookup`.
    /// Values that fail to parse are ignored.
    pub fn apply_env_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(v) = lookup(defaults::ENV_MAX_ITERATIONS).and_then(|v| v.parse().ok()) {
            self.engine.max_iterations = v;
        }
        if let Some(v) = lookup(defaults::ENV_TIMEOUT_SECONDS).and_then(|v| v.parse().ok()) {
            self.engine.timeout_seconds = v;
        }
        if let Some(v) = lookup(defaults::ENV_LOG_LEVEL) {
            self.observability.log_level = v;
        }
    }

    /// Validate the configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.engine.max_iterations == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "engine.max_iterations".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        let timeout = self.engine.timeout_seconds;
        if !timeout.is_finite() || timeout < 0.0 {
            return Err(ConfigError::ValidationFailed {
                field: "engine.timeout_seconds".to_string(),
                message: "must be a finite, non-negative number of seconds".to_string(),
            });
        }
        for (field, table) in [
            ("post_processing.basic_phrases", &self.post_processing.basic_phrases),
            ("post_processing.advanced_phrases", &self.post_processing.advanced_phrases),
        ] {
            if table.iter().any(|p| p.from.is_empty()) {
                return Err(ConfigError::ValidationFailed {
                    field: field.to_string(),
                    message: "phrase to replace must not be empty".to_string(),
                });
            }
        }
        Ok(())
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}
