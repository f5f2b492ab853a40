// src/config/env.rs
// Environment-based configuration overrides

use super::file::parse_level;
use std::path::PathBuf;
use tracing::{Level, debug, warn};

/// Log level override (trace, debug, info, warn, error)
pub const LOG_VAR: &str = "VALIDATOR_RANK_LOG";
/// Default input file override
pub const INPUT_VAR: &str = "VALIDATOR_RANK_INPUT";
/// Emit JSON instead of text when set to a truthy value
pub const JSON_VAR: &str = "VALIDATOR_RANK_JSON";

/// Settings read from `VALIDATOR_RANK_*` environment variables
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EnvConfig {
    /// Log level override (VALIDATOR_RANK_LOG)
    pub log_level: Option<Level>,
    /// Input file override (VALIDATOR_RANK_INPUT)
    pub input: Option<PathBuf>,
    /// JSON output (VALIDATOR_RANK_JSON)
    pub json: bool,
}

impl EnvConfig {
    /// Load from the process environment (call once at startup)
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load using an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let log_level = read(LOG_VAR).and_then(|raw| {
            let level = parse_level(&raw);
            if level.is_none() {
                warn!(var = LOG_VAR, value = %raw, "Ignoring unknown log level");
            }
            level
        });

        let config = Self {
            log_level,
            input: read(INPUT_VAR).map(PathBuf::from),
            json: read(JSON_VAR).and_then(|v| parse_bool(&v)).unwrap_or(false),
        };
        debug!(?config, "Loaded environment configuration");
        config
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
