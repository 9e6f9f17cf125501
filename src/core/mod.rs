//! Core calculator types and logic.
//!
//! This module contains the pure functional core of the calculator:
//! - Engine state and its transitions
//! - Operator evaluation with fixed 8-place rounding
//! - Display formatting
//! - The memory register and bounded history
//!
//! All logic in this module is pure (no side effects), following
//! the "pure core, imperative shell" philosophy.

mod arithmetic;
mod error;
mod format;
mod history;
mod input;
mod memory;
mod state;

pub use arithmetic::{evaluate, parse_operand, round_result, PRECISION};
pub use error::CalcError;
pub use format::{format_number, plain_decimal, EXPONENTIAL_THRESHOLD, MAX_DISPLAY_LEN};
pub use history::{CalcHistory, HistoryEntry, DEFAULT_HISTORY_CAPACITY};
pub use input::{Digit, Operator};
pub use memory::MemoryRegister;
pub use state::{is_valid_operand, EngineState, Evaluation};
