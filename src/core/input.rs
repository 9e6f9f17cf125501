//! Typed inputs accepted by the engine.
//!
//! Front ends translate key presses into these values before calling the
//! engine, so the transition functions never see malformed input.

use super::error::CalcError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A single decimal digit, `0` through `9`.
///
/// # Example
///
/// ```rust
/// use reckon::core::Digit;
///
/// let seven = Digit::try_from('7').unwrap();
/// assert_eq!(seven.as_char(), '7');
/// assert!(Digit::try_from('x').is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Digit(u8);

impl Digit {
    /// Build a digit from its numeric value. Returns `None` above 9.
    pub fn new(value: u8) -> Option<Self> {
        (value <= 9).then_some(Self(value))
    }

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn as_char(self) -> char {
        char::from(b'0' + self.0)
    }
}

impl TryFrom<char> for Digit {
    type Error = CalcError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        c.to_digit(10)
            .map(|d| Self(d as u8))
            .ok_or(CalcError::InvalidDigit(c))
    }
}

impl fmt::Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Binary arithmetic operator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    /// Symbol used in history expressions and the pending-expression label.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "×",
            Self::Divide => "÷",
        }
    }

    pub(crate) fn apply(self, a: f64, b: f64) -> f64 {
        match self {
            Self::Add => a + b,
            Self::Subtract => a - b,
            Self::Multiply => a * b,
            Self::Divide => a / b,
        }
    }
}

impl FromStr for Operator {
    type Err = CalcError;

    /// Accepts both keyboard spellings (`* /`) and display glyphs (`× ÷ −`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "+" => Ok(Self::Add),
            "-" | "−" => Ok(Self::Subtract),
            "*" | "x" | "X" | "×" => Ok(Self::Multiply),
            "/" | "÷" => Ok(Self::Divide),
            other => Err(CalcError::UnknownOperator(other.to_string())),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}
