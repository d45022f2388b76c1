//! Configuration for formalgraph
//!
//! Only the logging setup is configurable. Settings come from a TOML file,
//! then environment variable overrides, then validation.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::constants::{
    CONFIG_FILE_NAME, DEFAULT_LOG_FORMAT, DEFAULT_LOG_LEVEL, ENV_LOG_FORMAT, ENV_LOG_LEVEL,
    LOG_FORMATS, LOG_LEVELS,
};
use crate::types::{Error, Result};
use crate::{log_info, log_trace, log_warn};

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_level")]
    pub level: String,

    /// Log format (pretty, compact, full)
    #[serde(default = "default_format")]
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            format: default_format(),
        }
    }
}

// Default value functions for serde
fn default_level() -> String { DEFAULT_LOG_LEVEL.to_string() }
fn default_format() -> String { DEFAULT_LOG_FORMAT.to_string() }

impl Config {
    /// Load configuration from `formalgraph.toml` (if present) and the environment
    pub fn load() -> Result<Self> {
        let mut config = if Path::new(CONFIG_FILE_NAME).exists() {
            Self::from_file(CONFIG_FILE_NAME)?
        } else {
            Config::default()
        };

        config.apply_overrides(|key| std::env::var(key).ok());
        config.validate()?;

        Ok(config)
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| Error::config(format!("Failed to read config file: {}", e)))?;

        let config: Config = toml::from_str(&contents)
            .map_err(|e| Error::config(format!("Failed to parse config file: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Apply overrides, looking each variable up through `lookup`
    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(level) = lookup(ENV_LOG_LEVEL) {
            log_trace!("{} overrides log level with {}", ENV_LOG_LEVEL, level);
            self.logging.level = level.to_ascii_lowercase();
        }

        if let Some(format) = lookup(ENV_LOG_FORMAT) {
            log_trace!("{} overrides log format with {}", ENV_LOG_FORMAT, format);
            self.logging.format = format.to_ascii_lowercase();
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if !LOG_LEVELS.contains(&self.logging.level.as_str()) {
            return Err(Error::config(format!("Unknown log level: {}", self.logging.level)));
        }

        if !LOG_FORMATS.contains(&self.logging.format.as_str()) {
            return Err(Error::config(format!("Unknown log format: {}", self.logging.format)));
        }

        Ok(())
    }
}

/// Load configuration from file or use defaults
pub fn load_config_or_default(path: Option<&str>) -> Config {
    match path {
        Some(path) => match Config::from_file(path) {
            Ok(config) => {
                log_info!("Loaded configuration from: {}", path);
                config
            }
            Err(e) => {
                log_warn!("Failed to load config from {}: {}. Using defaults.", path, e);
                Config::default()
            }
        },
        None => {
            log_info!("No config file specified, using defaults");
            Config::default()
        }
    }
}
