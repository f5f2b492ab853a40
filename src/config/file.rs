// src/config/file.rs
// File-based configuration from ~/.validator-rank/config.toml

use crate::error::{RankError, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{Level, debug, warn};

/// Top-level config structure
#[derive(Debug, Deserialize, Default, PartialEq)]
pub struct RankConfig {
    #[serde(default)]
    pub log: LogConfig,
    #[serde(default)]
    pub input: InputConfig,
}

/// Logging section
#[derive(Debug, Deserialize, Default, PartialEq)]
pub struct LogConfig {
    /// One of trace, debug, info, warn, error
    pub level: Option<String>,
}

/// Input section
#[derive(Debug, Deserialize, Default, PartialEq)]
pub struct InputConfig {
    /// JSON file of validator records used when `--input` is not given
    pub path: Option<PathBuf>,
}

impl RankConfig {
    /// Load config from ~/.validator-rank/config.toml, falling back to defaults
    pub fn load() -> Self {
        let path = Self::config_path();

        match Self::load_from(&path) {
            Ok(Some(config)) => {
                debug!(path = %path.display(), "Loaded config from file");
                config
            }
            Ok(None) => {
                debug!(path = %path.display(), "Config file not found, using defaults");
                Self::default()
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Failed to parse config file");
                Self::default()
            }
        }
    }

    /// Load config from an explicit path. `Ok(None)` when the file does not exist.
    pub fn load_from(path: &Path) -> Result<Option<Self>> {
        let contents = match std::fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        let config: Self = toml::from_str(&contents)?;
        config.validate()?;
        Ok(Some(config))
    }

    /// Get the config file path
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".validator-rank")
            .join("config.toml")
    }

    /// Configured log level, if any
    pub fn log_level(&self) -> Option<Level> {
        self.log.level.as_deref().and_then(parse_level)
    }

    fn validate(&self) -> Result<()> {
        if let Some(level) = &self.log.level
            && parse_level(level).is_none()
        {
            return Err(RankError::Config(format!("unknown log level `{}`", level)));
        }
        Ok(())
    }
}

/// Parse a case-insensitive tracing level name
pub fn parse_level(s: &str) -> Option<Level> {
    match s.trim().to_ascii_lowercase().as_str() {
        "trace" => Some(Level::TRACE),
        "debug" => Some(Level::DEBUG),
        "info" => Some(Level::INFO),
        "warn" | "warning" => Some(Level::WARN),
        "error" => Some(Level::ERROR),
        _ => None,
    }
}
