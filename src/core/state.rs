//! Calculator engine state and its pure transition functions.
//!
//! Every transition takes `&self` and returns a new [`EngineState`]; nothing
//! here touches the history, the memory register or any collaborator. The
//! imperative shell in [`crate::effects`] stitches those together.

use super::arithmetic::{evaluate, parse_operand};
use super::error::CalcError;
use super::format::{format_number, MAX_DISPLAY_LEN};
use super::input::{Digit, Operator};
use serde::{Deserialize, Serialize};

/// Running state of the calculator.
///
/// `current_value` is always a syntactically valid operand: optionally
/// negative, at most one decimal point, at most 12 characters (or an
/// exponential rendering produced by [`format_number`]).
///
/// # Example
///
/// ```rust
/// use reckon::core::{Digit, EngineState, Operator};
///
/// let seven = Digit::try_from('7').unwrap();
/// let three = Digit::try_from('3').unwrap();
///
/// let state = EngineState::new()
///     .input_digit(seven)
///     .input_operator(Operator::Add)
///     .unwrap()
///     .input_digit(three);
///
/// let done = state.calculate_result().unwrap().unwrap();
/// assert_eq!(done.state.current_value(), "10");
/// assert_eq!(done.expression, "7 + 3 = 10");
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EngineState {
    current_value: String,
    previous_value: Option<f64>,
    operator: Option<Operator>,
    waiting_for_operand: bool,
}

/// Output of a completed `=`: the new state plus what should be recorded.
#[derive(Clone, Debug, PartialEq)]
pub struct Evaluation {
    pub state: EngineState,
    /// `"a SYMBOL b = result"`
    pub expression: String,
    pub result: f64,
}

impl Default for EngineState {
    fn default() -> Self {
        Self::new()
    }
}

impl EngineState {
    /// Initial state: `"0"`, nothing pending, not waiting.
    pub fn new() -> Self {
        Self {
            current_value: "0".to_string(),
            previous_value: None,
            operator: None,
            waiting_for_operand: false,
        }
    }

    pub fn current_value(&self) -> &str {
        &self.current_value
    }

    pub fn previous_value(&self) -> Option<f64> {
        self.previous_value
    }

    pub fn operator(&self) -> Option<Operator> {
        self.operator
    }

    pub fn is_waiting_for_operand(&self) -> bool {
        self.waiting_for_operand
    }

    /// The in-progress operand as a number.
    pub fn operand(&self) -> f64 {
        parse_operand(&self.current_value)
    }

    /// `"<previous> <symbol>"` while an operation is pending.
    pub fn pending_expression(&self) -> Option<String> {
        match (self.previous_value, self.operator) {
            (Some(previous), Some(op)) => {
                Some(format!("{} {}", format_number(previous), op.symbol()))
            }
            _ => None,
        }
    }

    /// Type a digit. Starts a fresh operand while waiting, replaces a lone
    /// `"0"`, and never grows past 12 characters.
    pub fn input_digit(&self, digit: Digit) -> Self {
        let mut next = self.clone();
        if self.waiting_for_operand {
            next.current_value = digit.as_char().to_string();
            next.waiting_for_operand = false;
        } else if self.current_value == "0" {
            next.current_value = digit.as_char().to_string();
        } else {
            next.current_value.push(digit.as_char());
            truncate_chars(&mut next.current_value, MAX_DISPLAY_LEN);
        }
        next
    }

    /// Type a decimal point. A second point in the same operand is ignored.
    pub fn input_decimal_point(&self) -> Self {
        let mut next = self.clone();
        if self.waiting_for_operand {
            next.current_value = "0.".to_string();
            next.waiting_for_operand = false;
        } else if !self.current_value.contains('.')
            && self.current_value.chars().count() < MAX_DISPLAY_LEN
        {
            next.current_value.push('.');
        }
        next
    }

    /// Choose an operator.
    ///
    /// With an operation already pending, that operation is evaluated first
    /// and its result becomes both the displayed value and the new left
    /// operand, so `2 + 3 *` shows `5`. On failure the state is unchanged.
    pub fn input_operator(&self, op: Operator) -> Result<Self, CalcError> {
        let input = self.operand();
        let mut next = self.clone();

        match (self.previous_value, self.operator) {
            (None, _) => next.previous_value = Some(input),
            (Some(previous), Some(pending)) => {
                let result = evaluate(previous, input, pending)?;
                next.current_value = format_number(result);
                next.previous_value = Some(result);
            }
            (Some(_), None) => {}
        }

        next.waiting_for_operand = true;
        next.operator = Some(op);
        Ok(next)
    }

    /// Press `=`.
    ///
    /// Returns `Ok(None)` when nothing is pending. On failure the state is
    /// unchanged and nothing should be recorded.
    pub fn calculate_result(&self) -> Result<Option<Evaluation>, CalcError> {
        let (Some(previous), Some(op)) = (self.previous_value, self.operator) else {
            return Ok(None);
        };

        let input = self.operand();
        let result = evaluate(previous, input, op)?;
        let formatted = format_number(result);
        let expression = format!(
            "{} {} {} = {}",
            format_number(previous),
            op.symbol(),
            format_number(input),
            formatted
        );

        let state = Self {
            current_value: formatted,
            previous_value: None,
            operator: None,
            waiting_for_operand: true,
        };

        Ok(Some(Evaluation {
            state,
            expression,
            result,
        }))
    }

    /// `C`: back to the initial state.
    pub fn clear_all(&self) -> Self {
        Self::new()
    }

    /// `CE`: reset only the operand being typed.
    pub fn clear_entry(&self) -> Self {
        Self {
            current_value: "0".to_string(),
            ..self.clone()
        }
    }

    /// Delete the last typed character. Ignored while waiting for a new operand.
    pub fn backspace(&self) -> Self {
        if self.waiting_for_operand {
            return self.clone();
        }

        let mut next = self.clone();
        next.current_value.pop();
        if next.current_value.is_empty() || next.current_value == "-" {
            next.current_value = "0".to_string();
        }
        next
    }

    /// Divide the operand by 100.
    ///
    /// The result is a finished operand: the next digit starts a new one, so
    /// an exponential result like `1e-7` is never edited in place.
    pub fn percentage(&self) -> Result<Self, CalcError> {
        let result = evaluate(self.operand(), 100.0, Operator::Divide)?;
        Ok(Self {
            current_value: format_number(result),
            waiting_for_operand: true,
            ..self.clone()
        })
    }

    /// Show a stored value (memory or a history entry) as a finished operand.
    pub fn recall(&self, value: f64) -> Self {
        Self {
            current_value: format_number(value),
            waiting_for_operand: true,
            ..self.clone()
        }
    }

    /// Check the operand invariant. Used when restoring persisted state.
    ///
    /// Exponential form only appears in computed values, which are never
    /// open for editing.
    pub fn has_valid_operand(&self) -> bool {
        is_valid_operand(&self.current_value)
            && (self.waiting_for_operand || !is_exponential(&self.current_value))
    }
}

fn truncate_chars(text: &mut String, max: usize) {
    if let Some((index, _)) = text.char_indices().nth(max) {
        text.truncate(index);
    }
}

fn is_exponential(text: &str) -> bool {
    text.contains(|c: char| c == 'e' || c == 'E')
}

/// Whether `text` is an operand the engine could have produced.
pub fn is_valid_operand(text: &str) -> bool {
    if text.is_empty() || text.parse::<f64>().map_or(true, |v| !v.is_finite()) {
        return false;
    }
    if is_exponential(text) {
        return true;
    }

    let digits = text.strip_prefix('-').unwrap_or(text);
    text.chars().count() <= MAX_DISPLAY_LEN
        && digits.matches('.').count() <= 1
        && digits.chars().all(|c| c.is_ascii_digit() || c == '.')
}
