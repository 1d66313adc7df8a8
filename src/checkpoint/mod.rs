//! Checkpoint and resume for calculator sessions.
//!
//! A checkpoint captures the calculator state (entry line, pending
//! operation, memory register, angle mode) together with the calculation
//! tape, so a session can survive a restart. JSON is used for readability,
//! bincode for compactness; the file extension picks the format.

use crate::core::{CalculatorState, Tape};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;
use uuid::Uuid;

pub mod error;

pub use error::CheckpointError;

/// Version identifier for checkpoint format
pub const CHECKPOINT_VERSION: u32 = 1;

/// On-disk encoding of a checkpoint.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CheckpointFormat {
    /// `.json`, human readable
    Json,
    /// `.bin`, bincode
    Binary,
}

impl CheckpointFormat {
    /// Pick the format from a file extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()? {
            "json" => Some(Self::Json),
            "bin" => Some(Self::Binary),
            _ => None,
        }
    }
}

/// Serializable snapshot of a calculator session.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Checkpoint {
    /// Checkpoint format version
    pub version: u32,

    /// Unique checkpoint identifier
    pub id: Uuid,

    /// When checkpoint was created
    pub timestamp: DateTime<Utc>,

    /// Calculator state at capture time
    pub state: CalculatorState,

    /// Calculation tape at capture time
    pub tape: Tape,
}

impl Checkpoint {
    /// Capture a checkpoint of the given state and tape.
    pub fn capture(state: &CalculatorState, tape: &Tape) -> Self {
        Self {
            version: CHECKPOINT_VERSION,
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
            state: state.clone(),
            tape: tape.clone(),
        }
    }

    pub fn to_json(&self) -> Result<String, CheckpointError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| CheckpointError::SerializationFailed(e.to_string()))
    }

    pub fn from_json(json: &str) -> Result<Self, CheckpointError> {
        let checkpoint: Self = serde_json::from_str(json)
            .map_err(|e| CheckpointError::DeserializationFailed(e.to_string()))?;
        checkpoint.validate()?;
        Ok(checkpoint)
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>, CheckpointError> {
        bincode::serialize(self).map_err(|e| CheckpointError::SerializationFailed(e.to_string()))
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, CheckpointError> {
        let checkpoint: Self = bincode::deserialize(bytes)
            .map_err(|e| CheckpointError::DeserializationFailed(e.to_string()))?;
        checkpoint.validate()?;
        Ok(checkpoint)
    }

    /// Write the checkpoint atomically: temp file first, then rename.
    pub fn save(&self, path: &Path) -> Result<(), CheckpointError> {
        let bytes = match CheckpointFormat::from_path(path) {
            Some(CheckpointFormat::Json) => self.to_json()?.into_bytes(),
            Some(CheckpointFormat::Binary) => self.to_bytes()?,
            None => return Err(CheckpointError::UnknownFormat(path.to_path_buf())),
        };

        let temp_path = path.with_extension("tmp");
        fs::write(&temp_path, bytes)?;
        fs::rename(&temp_path, path)?;
        Ok(())
    }

    /// Read and validate a checkpoint file.
    pub fn load(path: &Path) -> Result<Self, CheckpointError> {
        match CheckpointFormat::from_path(path) {
            Some(CheckpointFormat::Json) => Self::from_json(&fs::read_to_string(path)?),
            Some(CheckpointFormat::Binary) => Self::from_bytes(&fs::read(path)?),
            None => Err(CheckpointError::UnknownFormat(path.to_path_buf())),
        }
    }

    /// Check the checkpoint can be resumed from.
    ///
    /// The version must match exactly; the data checks accumulate so every
    /// problem is reported at once.
    pub fn validate(&self) -> Result<(), CheckpointError> {
        if self.version != CHECKPOINT_VERSION {
            return Err(CheckpointError::UnsupportedVersion {
                found: self.version,
                supported: CHECKPOINT_VERSION,
            });
        }

        match self.check() {
            Validation::Success(_) => Ok(()),
            Validation::Failure(problems) => Err(CheckpointError::ValidationFailed(
                problems.iter().cloned().collect::<Vec<_>>().join("; "),
            )),
        }
    }

    fn check(&self) -> Validation<(), NonEmptyVec<String>> {
        let registers = if self.state.registers_are_finite() {
            Validation::success(())
        } else {
            Validation::fail("state registers must be finite".to_string())
        };

        let entry = if self.state.entry().is_well_formed() {
            Validation::success(())
        } else {
            Validation::fail(format!(
                "entry text '{}' is not a number",
                self.state.entry().text()
            ))
        };

        let expression = if self.state.expression_matches_pending() {
            Validation::success(())
        } else {
            Validation::fail(format!(
                "expression '{}' does not match the pending operation",
                self.state.expression()
            ))
        };

        let tape_values = if self.tape.values_are_finite() {
            Validation::success(())
        } else {
            Validation::fail("tape values must be finite".to_string())
        };

        let tape_size = if self.tape.len() <= self.tape.capacity() {
            Validation::success(())
        } else {
            Validation::fail(format!(
                "tape holds {} entries but capacity is {}",
                self.tape.len(),
                self.tape.capacity()
            ))
        };

        Validation::all_vec(vec![registers, entry, expression, tape_values, tape_size]).map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{
        transition, AngleMode, BinaryOp, Entry, Input, MemoryAction, PendingOperation, TapeEntry,
    };
    use crate::engine::StandardEngine;
    use crate::keymap::parse_keys;
    use tempfile::tempdir;

    fn session() -> (CalculatorState, Tape) {
        let mut state = CalculatorState::with_angle_mode(AngleMode::Deg);
        for input in parse_keys("12 m+ c 7 *").unwrap() {
            state = transition(&state, input, &StandardEngine).0;
        }
        let tape = Tape::with_capacity(4).record(TapeEntry {
            expression: "3 + 4".to_string(),
            value: 7.0,
            timestamp: Utc::now(),
        });
        (state, tape)
    }

    #[test]
    fn capture_copies_state_and_tape() {
        let (state, tape) = session();
        let checkpoint = Checkpoint::capture(&state, &tape);

        assert_eq!(checkpoint.version, CHECKPOINT_VERSION);
        assert_eq!(checkpoint.state.memory(), 12.0);
        assert_eq!(checkpoint.state.expression(), "7 * ");
        assert_eq!(checkpoint.tape.len(), 1);
    }

    #[test]
    fn json_preserves_pending_operation() {
        let (state, tape) = session();
        let checkpoint = Checkpoint::capture(&state, &tape);

        let restored = Checkpoint::from_json(&checkpoint.to_json().unwrap()).unwrap();
        assert_eq!(restored, checkpoint);

        let resumed = transition(&restored.state, Input::Equals, &StandardEngine).0;
        assert_eq!(resumed.snapshot().primary_text, "49");
    }

    #[test]
    fn binary_preserves_memory_register() {
        let (state, tape) = session();
        let checkpoint = Checkpoint::capture(&state, &tape);

        let restored = Checkpoint::from_bytes(&checkpoint.to_bytes().unwrap()).unwrap();
        assert_eq!(restored, checkpoint);

        let recalled = transition(
            &restored.state,
            Input::Memory(MemoryAction::Recall),
            &StandardEngine,
        )
        .0;
        assert_eq!(recalled.snapshot().primary_text, "12");
    }

    #[test]
    fn unsupported_version_is_rejected() {
        let (state, tape) = session();
        let mut checkpoint = Checkpoint::capture(&state, &tape);
        checkpoint.version = 99;

        let result = Checkpoint::from_json(&checkpoint.to_json().unwrap());
        assert!(matches!(
            result,
            Err(CheckpointError::UnsupportedVersion {
                found: 99,
                supported: CHECKPOINT_VERSION
            })
        ));
    }

    #[test]
    fn validation_reports_every_problem() {
        let (mut state, tape) = session();
        state.memory = f64::INFINITY;
        let mut checkpoint = Checkpoint::capture(&state, &tape);
        checkpoint.tape = Tape::with_capacity(1).record(TapeEntry {
            expression: "overflow".to_string(),
            value: f64::NAN,
            timestamp: Utc::now(),
        });

        match checkpoint.validate() {
            Err(CheckpointError::ValidationFailed(message)) => {
                assert!(message.contains("registers"));
                assert!(message.contains("tape values"));
            }
            other => panic!("Expected validation failure, got {other:?}"),
        }
    }

    fn assert_rejected(state: CalculatorState, needle: &str) {
        let json = Checkpoint::capture(&state, &Tape::new()).to_json().unwrap();
        match Checkpoint::from_json(&json) {
            Err(CheckpointError::ValidationFailed(message)) => {
                assert!(message.contains(needle), "{message}")
            }
            other => panic!("Expected validation failure, got {other:?}"),
        }
    }

    #[test]
    fn malformed_entry_text_is_rejected() {
        for text in ["1.2.3", "junk", ""] {
            let mut state = CalculatorState::new();
            state.entry = Entry::Text(text.to_string());
            assert_rejected(state, "entry text");
        }
    }

    #[test]
    fn stray_expression_is_rejected() {
        let mut state = CalculatorState::new();
        state.expression = "junk * ".to_string();
        assert_rejected(state, "expression");

        let mut state = CalculatorState::new();
        state.pending = Some(PendingOperation {
            operand: 5.0,
            operator: BinaryOp::Multiply,
        });
        assert_rejected(state, "expression");
    }

    #[test]
    fn hand_edited_session_reports_every_problem() {
        let mut state = CalculatorState::new();
        state.entry = Entry::Text("1.2.3".to_string());
        state.expression = "junk * ".to_string();

        let json = Checkpoint::capture(&state, &Tape::new()).to_json().unwrap();
        match Checkpoint::from_json(&json) {
            Err(CheckpointError::ValidationFailed(message)) => {
                assert!(message.contains("entry text '1.2.3'"));
                assert!(message.contains("expression 'junk * '"));
            }
            other => panic!("Expected validation failure, got {other:?}"),
        }
    }

    #[test]
    fn partial_entries_are_accepted() {
        for text in [".", "-", "0.", "1.5e+"] {
            let mut state = CalculatorState::new();
            state.entry = Entry::Text(text.to_string());
            assert!(Checkpoint::capture(&state, &Tape::new()).validate().is_ok(), "{text}");
        }
    }

    #[test]
    fn garbage_input_fails_to_deserialize() {
        assert!(matches!(
            Checkpoint::from_json("{ not json"),
            Err(CheckpointError::DeserializationFailed(_))
        ));
        assert!(matches!(
            Checkpoint::from_bytes(&[1, 2, 3]),
            Err(CheckpointError::DeserializationFailed(_))
        ));
    }

    #[test]
    fn save_and_load_by_extension() {
        let dir = tempdir().unwrap();
        let (state, tape) = session();
        let checkpoint = Checkpoint::capture(&state, &tape);

        for name in ["session.json", "session.bin"] {
            let path = dir.path().join(name);
            checkpoint.save(&path).unwrap();
            assert_eq!(Checkpoint::load(&path).unwrap(), checkpoint);
        }
        assert!(!dir.path().join("session.tmp").exists());
    }

    #[test]
    fn unknown_extension_is_rejected() {
        let dir = tempdir().unwrap();
        let (state, tape) = session();
        let path = dir.path().join("session.yaml");

        let result = Checkpoint::capture(&state, &tape).save(&path);
        assert!(matches!(result, Err(CheckpointError::UnknownFormat(_))));
        assert!(matches!(
            Checkpoint::load(&path),
            Err(CheckpointError::UnknownFormat(_))
        ));
    }

    #[test]
    fn format_from_path() {
        assert_eq!(
            CheckpointFormat::from_path(Path::new("a/b.json")),
            Some(CheckpointFormat::Json)
        );
        assert_eq!(
            CheckpointFormat::from_path(Path::new("b.bin")),
            Some(CheckpointFormat::Binary)
        );
        assert_eq!(CheckpointFormat::from_path(Path::new("noext")), None);
    }
}
