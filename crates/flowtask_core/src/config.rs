//! Runtime configuration for the composition root.
//!
//! # Responsibility
//! - Collect latency, logging and seed settings from the environment.
//!
//! # Invariants
//! - Unset or blank variables fall back to defaults.
//! - Present but malformed values are reported, never silently ignored.

use crate::latency::Latency;
use crate::logging::default_log_level;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

pub const ENV_LATENCY_MS: &str = "FLOWTASK_LATENCY_MS";
pub const ENV_LOG_LEVEL: &str = "FLOWTASK_LOG_LEVEL";
pub const ENV_LOG_DIR: &str = "FLOWTASK_LOG_DIR";
pub const ENV_SEED_PATH: &str = "FLOWTASK_SEED_PATH";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    InvalidLatency(String),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidLatency(value) => write!(
                f,
                "invalid {ENV_LATENCY_MS} value `{value}`; expected milliseconds as an integer"
            ),
        }
    }
}

impl Error for ConfigError {}

/// Settings used to build a `FlowTask` instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub latency: Latency,
    pub log_level: String,
    /// Logging stays disabled when unset.
    pub log_dir: Option<PathBuf>,
    /// Embedded dataset is used when unset.
    pub seed_path: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            latency: Latency::default(),
            log_level: default_log_level().to_string(),
            log_dir: None,
            seed_path: None,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds config from any key lookup; used by tests instead of the
    /// process environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let read = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };
        let mut config = Self::default();

        if let Some(raw) = read(ENV_LATENCY_MS) {
            let millis = raw
                .parse::<u64>()
                .map_err(|_| ConfigError::InvalidLatency(raw.clone()))?;
            config.latency = Latency::from_millis(millis);
        }
        if let Some(level) = read(ENV_LOG_LEVEL) {
            config.log_level = level;
        }
        config.log_dir = read(ENV_LOG_DIR).map(PathBuf::from);
        config.seed_path = read(ENV_SEED_PATH).map(PathBuf::from);

        Ok(config)
    }
}
