//! Discrete input events dispatched to a [`Calculator`](super::Calculator).

use crate::core::{Digit, Operator};

/// One user action.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Event {
    Digit(Digit),
    DecimalPoint,
    Operator(Operator),
    Equals,
    ClearAll,
    ClearEntry,
    Backspace,
    Percentage,
    MemoryClear,
    MemoryRecall,
    MemoryAdd,
    MemorySubtract,
    ClearHistory,
    /// Reuse the result of a history entry; 0 is the most recent.
    RecallHistory(usize),
}

impl Event {
    /// Short name for logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Digit(_) => "digit",
            Self::DecimalPoint => "decimal_point",
            Self::Operator(_) => "operator",
            Self::Equals => "equals",
            Self::ClearAll => "clear_all",
            Self::ClearEntry => "clear_entry",
            Self::Backspace => "backspace",
            Self::Percentage => "percentage",
            Self::MemoryClear => "memory_clear",
            Self::MemoryRecall => "memory_recall",
            Self::MemoryAdd => "memory_add",
            Self::MemorySubtract => "memory_subtract",
            Self::ClearHistory => "clear_history",
            Self::RecallHistory(_) => "recall_history",
        }
    }
}

impl From<Digit> for Event {
    fn from(digit: Digit) -> Self {
        Self::Digit(digit)
    }
}

impl From<Operator> for Event {
    fn from(op: Operator) -> Self {
        Self::Operator(op)
    }
}
