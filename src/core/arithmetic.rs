//! Pure arithmetic: operator evaluation, rounding and operand parsing.

use super::error::CalcError;
use super::input::Operator;

/// Number of decimal places every result is rounded to.
pub const PRECISION: i32 = 8;

const SCALE: f64 = 1e8;

/// Evaluate `a op b`, rounded to [`PRECISION`] decimal places.
///
/// Division by exactly zero fails with [`CalcError::DivideByZero`]; a result
/// that is not finite after rounding fails with [`CalcError::Overflow`].
///
/// # Example
///
/// ```rust
/// use reckon::core::{evaluate, CalcError, Operator};
///
/// assert_eq!(evaluate(0.1, 0.2, Operator::Add), Ok(0.3));
/// assert_eq!(evaluate(8.0, 0.0, Operator::Divide), Err(CalcError::DivideByZero));
/// ```
pub fn evaluate(a: f64, b: f64, op: Operator) -> Result<f64, CalcError> {
    if op == Operator::Divide && b == 0.0 {
        return Err(CalcError::DivideByZero);
    }

    let rounded = round_result(op.apply(a, b));
    if rounded.is_finite() {
        Ok(rounded)
    } else {
        Err(CalcError::Overflow)
    }
}

/// Round to [`PRECISION`] decimal places, nudging by machine epsilon first so
/// that binary noise such as `0.30000000000000004` collapses to `0.3`.
///
/// Halves round towards positive infinity.
pub fn round_result(value: f64) -> f64 {
    let scaled = (value + f64::EPSILON) * SCALE;
    let floor = scaled.floor();
    let rounded = if scaled - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    };
    rounded / SCALE
}

/// Parse an operand string the way a lenient float parser would: the longest
/// parseable prefix wins and anything unparseable reads as zero.
///
/// ```rust
/// use reckon::core::parse_operand;
///
/// assert_eq!(parse_operand("12.5"), 12.5);
/// assert_eq!(parse_operand("3."), 3.0);
/// assert_eq!(parse_operand("1.5e+"), 1.5);
/// assert_eq!(parse_operand("-"), 0.0);
/// ```
pub fn parse_operand(text: &str) -> f64 {
    let mut candidate = text.trim();
    while !candidate.is_empty() {
        if let Ok(value) = candidate.parse::<f64>() {
            if value.is_finite() {
                return value;
            }
        }
        let mut chars = candidate.chars();
        chars.next_back();
        candidate = chars.as_str();
    }
    0.0
}
