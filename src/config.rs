//! Backend connection configuration.
//!
//! Precedence: explicit builder override (CLI flag) > environment or config
//! file > default.

use std::env;
use std::path::Path;

use miette::Diagnostic;
use serde::Deserialize;
use thiserror::Error;

pub const URL_ENV: &str = "STUDIODESK_URL";
pub const ANON_KEY_ENV: &str = "STUDIODESK_ANON_KEY";
pub const TIMEOUT_ENV: &str = "STUDIODESK_TIMEOUT_SECS";

const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Error, Diagnostic, Debug)]
pub enum ConfigError {
    #[error("Missing configuration: {field}")]
    #[diagnostic(
        code(studiodesk::config::missing),
        help("Set STUDIODESK_URL and STUDIODESK_ANON_KEY, or pass --url/--anon-key, or use --config <file>")
    )]
    Missing { field: &'static str },

    #[error("Invalid configuration: {message}")]
    #[diagnostic(code(studiodesk::config::invalid))]
    Invalid { message: String },

    #[error("Failed to read config file: {message}")]
    #[diagnostic(code(studiodesk::config::file))]
    File { message: String },
}

/// Connection settings for the hosted backend.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Config {
    /// Project URL, without the `/rest/v1` suffix.
    #[serde(default)]
    pub url: String,
    /// Public (anon) API key.
    #[serde(default)]
    pub anon_key: String,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl Default for Config {
    fn default() -> Self {
        Self {
            url: String::new(),
            anon_key: String::new(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl Config {
    /// Read configuration from `STUDIODESK_*` environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        let timeout_secs = match env::var(TIMEOUT_ENV) {
            Ok(raw) => raw.trim().parse().map_err(|_| ConfigError::Invalid {
                message: format!("{} must be a whole number of seconds, got '{}'", TIMEOUT_ENV, raw),
            })?,
            Err(_) => DEFAULT_TIMEOUT_SECS,
        };

        Ok(Self {
            url: env::var(URL_ENV).unwrap_or_default(),
            anon_key: env::var(ANON_KEY_ENV).unwrap_or_default(),
            timeout_secs,
        })
    }

    /// Read configuration from a YAML file with `url`, `anon_key` and `timeout_secs` keys.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::File {
            message: format!("{}: {}", path.display(), e),
        })?;
        serde_yaml::from_str(&content).map_err(|e| ConfigError::File {
            message: format!("{}: {}", path.display(), e),
        })
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    pub fn with_anon_key(mut self, anon_key: impl Into<String>) -> Self {
        self.anon_key = anon_key.into();
        self
    }

    pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }

    /// Check that the settings are usable for a connection.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.url.trim().is_empty() {
            return Err(ConfigError::Missing { field: "url" });
        }
        if self.anon_key.trim().is_empty() {
            return Err(ConfigError::Missing { field: "anon_key" });
        }
        if !(self.url.starts_with("http://") || self.url.starts_with("https://")) {
            return Err(ConfigError::Invalid {
                message: format!("url must start with http:// or https://, got '{}'", self.url),
            });
        }
        if self.timeout_secs == 0 {
            return Err(ConfigError::Invalid {
                message: "timeout_secs must be greater than zero".to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;
