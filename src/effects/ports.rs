//! Collaborator interfaces the calculator reports to or reads from.
//!
//! None of these may influence the calculation state: renderer calls have no
//! return value, and store/logger failures are logged and dropped by the
//! [`Calculator`](super::Calculator).

use crate::core::HistoryEntry;
use std::time::Duration;
use thiserror::Error;

/// Errors a history store or calculation logger may report.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization failed: {0}")]
    Serialization(String),

    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

/// Everything a renderer needs to draw the calculator.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Frame {
    /// The current operand.
    pub display: String,
    /// Pending expression such as `"7 +"`, empty when nothing is pending.
    pub history_label: String,
    /// Memory indicator text, empty while memory is zero.
    pub memory_indicator: String,
}

/// Receives a new [`Frame`] after every event.
pub trait Renderer {
    fn render(&mut self, frame: &Frame);

    /// Surface a transient error message for `duration`.
    ///
    /// Default implementation ignores the message.
    fn show_error(&mut self, _message: &str, _duration: Duration) {}
}

/// Best-effort persistence of the calculation history.
pub trait HistoryStore {
    /// Persist the full history, most recent first.
    fn save(&mut self, history: &[HistoryEntry]) -> Result<(), StoreError>;

    /// Load a previously saved history. An empty vector means nothing saved.
    fn load(&mut self) -> Result<Vec<HistoryEntry>, StoreError>;
}

/// Best-effort sink for completed calculations.
pub trait CalculationLogger {
    fn log(&mut self, expression: &str, result: f64) -> Result<(), StoreError>;
}
