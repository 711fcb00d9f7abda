use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::Config;

/// Environment variable that overrides `service.base_url`.
pub const BASE_URL_ENV: &str = "EMAIL_SUMMARY_URL";

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
    /// Uses `~/.config/email-summary/config.toml` on Unix/macOS,
    /// or equivalent on other platforms via `dirs::config_dir()`.
    /// Falls back to current directory if config_dir is unavailable.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("email-summary").join("config.toml")
    }

    /// Loads configuration from the default config file.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Loads configuration from `path`.
    ///
    /// - If the file doesn't exist, returns `Config::default()`.
    /// - If the file exists, parses it as TOML and validates.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
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
        tracing::debug!(path = %path.display(), "Loaded config file");
        Ok(config)
    }

    /// Reads the base URL override from the environment, if set and non-empty.
    pub fn env_base_url() -> Option<String> {
        std::env::var(BASE_URL_ENV)
            .ok()
            .filter(|value| !value.trim().is_empty())
    }

    /// Applies overrides in increasing priority: environment, then CLI.
    pub fn apply_overrides(&mut self, env_base_url: Option<String>, cli_base_url: Option<String>) {
        if let Some(url) = cli_base_url.or(env_base_url) {
            self.service.base_url = url;
        }
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - The base URL is an http(s) URL
    /// - The UI tick rate is positive
    pub fn validate(&self) -> Result<(), ConfigError> {
        let base_url = self.service.base_url.trim();
        if base_url.is_empty() {
            return Err(ConfigError::ValidationError {
                message: "service.base_url must not be empty".to_string(),
            });
        }

        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "service.base_url '{}' must start with http:// or https://",
                    base_url
                ),
            });
        }

        if self.ui.tick_rate_ms == 0 {
            return Err(ConfigError::ValidationError {
                message: "ui.tick_rate_ms must be greater than zero".to_string(),
            });
        }

        Ok(())
    }
}
