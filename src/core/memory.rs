//! Single-value memory register.

use super::arithmetic::round_result;
use super::error::CalcError;
use serde::{Deserialize, Serialize};

/// Memory accumulator (`MC`, `MR`, `M+`, `M-`).
///
/// Like [`CalcHistory`](super::CalcHistory), the register is immutable:
/// every operation returns a new register.
///
/// # Example
///
/// ```rust
/// use reckon::core::MemoryRegister;
///
/// let memory = MemoryRegister::new().add(4.0).unwrap().subtract(1.5).unwrap();
/// assert_eq!(memory.recall(), 2.5);
/// assert_eq!(memory.clear().recall(), 0.0);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MemoryRegister {
    value: f64,
}

impl MemoryRegister {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn recall(&self) -> f64 {
        self.value
    }

    /// Whether the register holds a non-zero value.
    pub fn is_set(&self) -> bool {
        self.value != 0.0
    }

    pub fn clear(&self) -> Self {
        Self::default()
    }

    /// Add to the register. Fails with [`CalcError::Overflow`] and leaves the
    /// register untouched if the sum is not finite.
    pub fn add(&self, operand: f64) -> Result<Self, CalcError> {
        self.accumulate(self.value + operand)
    }

    /// Subtract from the register, with the same overflow rule as [`add`](Self::add).
    pub fn subtract(&self, operand: f64) -> Result<Self, CalcError> {
        self.accumulate(self.value - operand)
    }

    fn accumulate(&self, raw: f64) -> Result<Self, CalcError> {
        let value = round_result(raw);
        if value.is_finite() {
            Ok(Self { value })
        } else {
            Err(CalcError::Overflow)
        }
    }
}
