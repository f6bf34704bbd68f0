use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::Config;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/shoplist/config.toml` on Linux, or the platform
    /// equivalent via `dirs::config_dir()`. Falls back to the current
    /// directory if config_dir is unavailable.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("shoplist").join("config.toml")
    }

    /// Loads configuration from the default config file.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Loads configuration from `path`.
    ///
    /// - If the file doesn't exist, returns `Config::default()`.
    /// - Otherwise parses it as TOML and validates.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - The fixed location is a valid coordinate
    /// - Map step and zoom span are positive
    /// - The geocoding timeout is non-zero
    pub fn validate(&self) -> Result<(), ConfigError> {
        let location = self.location.fixed_location();
        if !location.is_valid() {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "Location ({}, {}) is out of range",
                    location.latitude, location.longitude
                ),
            });
        }

        if !(self.map.step_degrees > 0.0) {
            return Err(ConfigError::ValidationError {
                message: "map.step_degrees must be positive".to_string(),
            });
        }

        if !(self.map.zoom_span_degrees > 0.0) {
            return Err(ConfigError::ValidationError {
                message: "map.zoom_span_degrees must be positive".to_string(),
            });
        }

        if self.geocoding.timeout_seconds == 0 {
            return Err(ConfigError::ValidationError {
                message: "geocoding.timeout_seconds must be greater than zero".to_string(),
            });
        }

        Ok(())
    }
}
