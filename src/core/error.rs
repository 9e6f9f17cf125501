//! Calculation error types.

use thiserror::Error;

/// Errors raised by engine operations.
///
/// `DivideByZero` and `Overflow` are calculation failures: the operation that
/// raised them is aborted and the engine state is left exactly as it was.
/// The remaining variants come from constructing typed inputs.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CalcError {
    #[error("Cannot divide by zero")]
    DivideByZero,

    #[error("Result is too large to represent")]
    Overflow,

    #[error("'{0}' is not a decimal digit")]
    InvalidDigit(char),

    #[error("Unknown operator '{0}'")]
    UnknownOperator(String),
}

impl CalcError {
    /// Whether this error came out of evaluating an operation (as opposed
    /// to rejecting malformed input).
    pub fn is_calculation_error(&self) -> bool {
        matches!(self, Self::DivideByZero | Self::Overflow)
    }
}
