//! Calculator session configuration.
//!
//! All fields have defaults, so an empty JSON object is a valid config.

use crate::core::DEFAULT_HISTORY_CAPACITY;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

/// Errors produced while loading or validating an [`EngineConfig`].
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("history_capacity must be at least 1")]
    ZeroHistoryCapacity,

    #[error("failed to parse config: {0}")]
    Parse(String),
}

/// Settings for a [`Calculator`](crate::effects::Calculator) session.
///
/// # Example
///
/// ```rust
/// use reckon::EngineConfig;
///
/// let config = EngineConfig::from_json(r#"{ "history_capacity": 10 }"#).unwrap();
/// assert_eq!(config.history_capacity, 10);
/// assert_eq!(config.error_display_ms, 2000);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct EngineConfig {
    /// Completed calculations kept before the oldest is evicted.
    pub history_capacity: usize,

    /// How long an error message stays visible, in milliseconds.
    pub error_display_ms: u64,

    /// Text shown by the renderer while the memory register is non-zero.
    pub memory_indicator: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            history_capacity: DEFAULT_HISTORY_CAPACITY,
            error_display_ms: 2000,
            memory_indicator: "M".to_string(),
        }
    }
}

impl EngineConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse and validate a JSON document.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.history_capacity == 0 {
            return Err(ConfigError::ZeroHistoryCapacity);
        }
        Ok(())
    }

    pub fn error_display(&self) -> Duration {
        Duration::from_millis(self.error_display_ms)
    }
}
