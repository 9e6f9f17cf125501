//! Validation of restored checkpoints.
//!
//! Uses Stillwater's `Validation` to report every problem with a checkpoint
//! in one pass instead of stopping at the first.

use super::SessionCheckpoint;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;
use thiserror::Error;

/// A single problem found in a checkpoint.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CheckpointViolation {
    #[error("operand '{0}' is not a valid decimal")]
    InvalidOperand(String),

    #[error("{field} is not a finite number")]
    NonFiniteValue { field: &'static str },

    #[error("history holds {len} entries, capacity is {capacity}")]
    HistoryOverCapacity { len: usize, capacity: usize },

    #[error("history entry {index} has a non-finite result")]
    NonFiniteHistoryResult { index: usize },

    #[error("history entry {index} has an empty expression")]
    EmptyExpression { index: usize },
}

type Check = Validation<(), NonEmptyVec<CheckpointViolation>>;

fn check(ok: bool, violation: impl FnOnce() -> CheckpointViolation) -> Check {
    if ok {
        Validation::success(())
    } else {
        Validation::fail(violation())
    }
}

/// Check a checkpoint against a history capacity, accumulating ALL
/// violations.
pub fn validate(
    checkpoint: &SessionCheckpoint,
    capacity: usize,
) -> Validation<(), NonEmptyVec<CheckpointViolation>> {
    let state = &checkpoint.state;
    let mut checks = vec![
        check(state.has_valid_operand(), || {
            CheckpointViolation::InvalidOperand(state.current_value().to_string())
        }),
        check(state.previous_value().map_or(true, f64::is_finite), || {
            CheckpointViolation::NonFiniteValue {
                field: "previous_value",
            }
        }),
        check(checkpoint.memory.recall().is_finite(), || {
            CheckpointViolation::NonFiniteValue { field: "memory" }
        }),
        check(checkpoint.history.len() <= capacity, || {
            CheckpointViolation::HistoryOverCapacity {
                len: checkpoint.history.len(),
                capacity,
            }
        }),
    ];

    for (index, entry) in checkpoint.history.entries().iter().enumerate() {
        checks.push(check(entry.result.is_finite(), || {
            CheckpointViolation::NonFiniteHistoryResult { index }
        }));
        checks.push(check(!entry.expression.trim().is_empty(), || {
            CheckpointViolation::EmptyExpression { index }
        }));
    }

    Validation::all_vec(checks).map(|_| ())
}
