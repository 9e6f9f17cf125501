//! Build errors for calculator sessions.

use crate::config::ConfigError;
use thiserror::Error;

/// Errors that can occur when building a calculator.
#[derive(Debug, Error, PartialEq)]
pub enum BuildError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(#[from] ConfigError),
}
