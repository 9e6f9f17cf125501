//! Checkpoint and resume functionality for calculator sessions.
//!
//! A checkpoint captures the engine state, memory register and history so
//! a session can survive a restart. Collaborators are not part of it.

use crate::core::{CalcHistory, EngineState, MemoryRegister};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use stillwater::validation::Validation;
use uuid::Uuid;

pub mod error;
pub mod validation;

pub use error::CheckpointError;
pub use validation::{validate, CheckpointViolation};

/// Version identifier for checkpoint format
pub const CHECKPOINT_VERSION: u32 = 1;

/// Serializable snapshot of a calculator session.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionCheckpoint {
    /// Checkpoint format version
    pub version: u32,

    /// Unique checkpoint identifier
    pub id: Uuid,

    /// When checkpoint was created
    pub timestamp: DateTime<Utc>,

    /// Engine state at checkpoint time
    pub state: EngineState,

    /// Memory register at checkpoint time
    pub memory: MemoryRegister,

    /// Calculation history, most recent first
    pub history: CalcHistory,
}

impl SessionCheckpoint {
    pub fn new(state: EngineState, memory: MemoryRegister, history: CalcHistory) -> Self {
        Self {
            version: CHECKPOINT_VERSION,
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
            state,
            memory,
            history,
        }
    }

    pub fn to_json(&self) -> Result<String, CheckpointError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| CheckpointError::SerializationFailed(e.to_string()))
    }

    pub fn from_json(json: &str) -> Result<Self, CheckpointError> {
        let checkpoint: Self = serde_json::from_str(json)
            .map_err(|e| CheckpointError::DeserializationFailed(e.to_string()))?;
        checkpoint.check_version()?;
        Ok(checkpoint)
    }

    /// Compact binary encoding.
    pub fn to_bytes(&self) -> Result<Vec<u8>, CheckpointError> {
        bincode::serialize(self).map_err(|e| CheckpointError::SerializationFailed(e.to_string()))
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, CheckpointError> {
        let checkpoint: Self = bincode::deserialize(bytes)
            .map_err(|e| CheckpointError::DeserializationFailed(e.to_string()))?;
        checkpoint.check_version()?;
        Ok(checkpoint)
    }

    /// Check version and contents before the checkpoint is applied to a
    /// session whose history holds at most `capacity` entries.
    pub fn validate_for(&self, capacity: usize) -> Result<(), CheckpointError> {
        self.check_version()?;
        match validate(self, capacity) {
            Validation::Success(_) => Ok(()),
            Validation::Failure(violations) => Err(CheckpointError::ValidationFailed(
                violations.iter().map(ToString::to_string).collect(),
            )),
        }
    }

    fn check_version(&self) -> Result<(), CheckpointError> {
        if self.version == CHECKPOINT_VERSION {
            Ok(())
        } else {
            Err(CheckpointError::UnsupportedVersion {
                found: self.version,
                supported: CHECKPOINT_VERSION,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Digit, HistoryEntry, Operator};

    fn sample() -> SessionCheckpoint {
        let state = EngineState::new()
            .input_digit(Digit::try_from('4').unwrap())
            .input_operator(Operator::Add)
            .unwrap();
        let memory = MemoryRegister::new().add(2.5).unwrap();
        let history = CalcHistory::new().record(HistoryEntry {
            expression: "7 + 3 = 10".to_string(),
            result: 10.0,
            timestamp: Utc::now(),
        });
        SessionCheckpoint::new(state, memory, history)
    }

    #[test]
    fn json_encoding_preserves_session() {
        let checkpoint = sample();
        let restored = SessionCheckpoint::from_json(&checkpoint.to_json().unwrap()).unwrap();
        assert_eq!(restored, checkpoint);
    }

    #[test]
    fn binary_encoding_preserves_session() {
        let checkpoint = sample();
        let restored = SessionCheckpoint::from_bytes(&checkpoint.to_bytes().unwrap()).unwrap();
        assert_eq!(restored, checkpoint);
    }

    #[test]
    fn unknown_version_is_rejected() {
        let mut checkpoint = sample();
        checkpoint.version = CHECKPOINT_VERSION + 1;
        let json = checkpoint.to_json().unwrap();

        assert!(matches!(
            SessionCheckpoint::from_json(&json),
            Err(CheckpointError::UnsupportedVersion { found: 2, supported: 1 })
        ));
    }

    #[test]
    fn garbage_bytes_fail_to_deserialize() {
        assert!(matches!(
            SessionCheckpoint::from_bytes(&[1, 2, 3]),
            Err(CheckpointError::DeserializationFailed(_))
        ));
    }

    #[test]
    fn valid_checkpoint_passes_validation() {
        assert!(validate(&sample(), 50).is_success());
        assert!(sample().validate_for(50).is_ok());
    }

    #[test]
    fn validation_accumulates_all_violations() {
        let mut value = serde_json::to_value(sample()).unwrap();
        value["state"]["current_value"] = "1.2.3".into();
        value["history"]["entries"][0]["expression"] = "".into();
        let checkpoint: SessionCheckpoint = serde_json::from_value(value).unwrap();

        match validate(&checkpoint, 0) {
            Validation::Failure(violations) => {
                assert_eq!(violations.len(), 3);
                assert!(violations
                    .iter()
                    .any(|v| matches!(v, CheckpointViolation::InvalidOperand(_))));
                assert!(violations
                    .iter()
                    .any(|v| matches!(v, CheckpointViolation::EmptyExpression { index: 0 })));
                assert!(violations.iter().any(|v| matches!(
                    v,
                    CheckpointViolation::HistoryOverCapacity { len: 1, capacity: 0 }
                )));
            }
            Validation::Success(_) => panic!("Expected failures, got success"),
        }
    }

    #[test]
    fn validate_for_lists_every_violation() {
        let mut value = serde_json::to_value(sample()).unwrap();
        value["state"]["current_value"] = "".into();
        let checkpoint: SessionCheckpoint = serde_json::from_value(value).unwrap();

        match checkpoint.validate_for(50) {
            Err(CheckpointError::ValidationFailed(messages)) => {
                assert_eq!(messages, vec!["operand '' is not a valid decimal".to_string()]);
            }
            other => panic!("Expected validation failure, got {other:?}"),
        }
    }
}
