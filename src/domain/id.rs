//! Identifiers for tasks and sub-tasks
//!
//! ID Format:
//! - Task IDs: `TASK-{n}` (e.g., `TASK-3`), assigned sequentially in
//!   appearance order starting at 1, independent of any number embedded
//!   in the source heading.
//! - Sub-task IDs: `TASK-{major}.{minor}` (e.g., `TASK-3.2`), where the
//!   `major.minor` pair is taken verbatim from the source line.
//!
//! Sub-task numbering is never normalized: `TASK-01.2` stays `TASK-01.2`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum IdError {
    #[error("Invalid task ID format: expected 'TASK-{{n}}', got '{0}'")]
    InvalidTaskId(String),

    #[error("Invalid sub-task ID format: expected 'TASK-{{major}}.{{minor}}', got '{0}'")]
    InvalidSubTaskId(String),
}

/// Task ID in the format `TASK-{n}`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TaskId {
    sequence: u32,
}

impl TaskId {
    /// Creates a task ID from a 1-based sequence number
    pub fn new(sequence: u32) -> Self {
        Self { sequence }
    }

    /// Returns the sequence number
    pub fn sequence(&self) -> u32 {
        self.sequence
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TASK-{}", self.sequence)
    }
}

impl FromStr for TaskId {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let rest = s
            .strip_prefix("TASK-")
            .ok_or_else(|| IdError::InvalidTaskId(s.to_string()))?;

        if rest.is_empty() || !rest.chars().all(|c| c.is_ascii_digit()) {
            return Err(IdError::InvalidTaskId(s.to_string()));
        }

        let sequence = rest
            .parse()
            .map_err(|_| IdError::InvalidTaskId(s.to_string()))?;

        Ok(Self { sequence })
    }
}

impl TryFrom<String> for TaskId {
    type Error = IdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TaskId> for String {
    fn from(id: TaskId) -> Self {
        id.to_string()
    }
}

/// Sub-task ID in the format `TASK-{major}.{minor}`
///
/// The `major.minor` pair is kept exactly as written in the source
/// document, so leading zeros survive a round-trip.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SubTaskId {
    number: String,
}

impl SubTaskId {
    /// Creates a sub-task ID from a literal `major.minor` pair
    pub fn new(number: &str) -> Result<Self, IdError> {
        if !is_number_pair(number) {
            return Err(IdError::InvalidSubTaskId(number.to_string()));
        }

        Ok(Self {
            number: number.to_string(),
        })
    }

    /// Returns the literal `major.minor` pair
    pub fn number(&self) -> &str {
        &self.number
    }
}

/// Checks that a string is exactly `{digits}.{digits}`
fn is_number_pair(s: &str) -> bool {
    match s.split_once('.') {
        Some((major, minor)) => {
            !major.is_empty()
                && !minor.is_empty()
                && major.chars().all(|c| c.is_ascii_digit())
                && minor.chars().all(|c| c.is_ascii_digit())
        }
        None => false,
    }
}

impl fmt::Display for SubTaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TASK-{}", self.number)
    }
}

impl FromStr for SubTaskId {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let number = s
            .strip_prefix("TASK-")
            .ok_or_else(|| IdError::InvalidSubTaskId(s.to_string()))?;

        Self::new(number).map_err(|_| IdError::InvalidSubTaskId(s.to_string()))
    }
}

impl TryFrom<String> for SubTaskId {
    type Error = IdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<SubTaskId> for String {
    fn from(id: SubTaskId) -> Self {
        id.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn task_id_display() {
        assert_eq!(TaskId::new(1).to_string(), "TASK-1");
        assert_eq!(TaskId::new(42).to_string(), "TASK-42");
    }

    #[test]
    fn task_id_parse_roundtrip() {
        let id: TaskId = "TASK-7".parse().unwrap();
        assert_eq!(id.sequence(), 7);
        assert_eq!(id.to_string(), "TASK-7");
    }

    #[test]
    fn task_id_rejects_bad_formats() {
        assert!("TASK-".parse::<TaskId>().is_err());
        assert!("TASK-abc".parse::<TaskId>().is_err());
        assert!("TASK-1.2".parse::<TaskId>().is_err());
        assert!("task-1".parse::<TaskId>().is_err());
        assert!("1".parse::<TaskId>().is_err());
    }

    #[test]
    fn sub_task_id_keeps_literal_numbering() {
        let id = SubTaskId::new("01.20").unwrap();
        assert_eq!(id.number(), "01.20");
        assert_eq!(id.to_string(), "TASK-01.20");
    }

    #[test]
    fn sub_task_id_parse_roundtrip() {
        let id: SubTaskId = "TASK-3.2".parse().unwrap();
        assert_eq!(id.number(), "3.2");
        assert_eq!(id.to_string(), "TASK-3.2");
    }

    #[test]
    fn sub_task_id_rejects_bad_formats() {
        assert!(SubTaskId::new("1").is_err());
        assert!(SubTaskId::new("1.").is_err());
        assert!(SubTaskId::new(".2").is_err());
        assert!(SubTaskId::new("1.2.3").is_err());
        assert!(SubTaskId::new("a.b").is_err());
        assert!("TASK-1".parse::<SubTaskId>().is_err());
    }

    #[test]
    fn ids_serialize_as_strings() {
        let task_id = TaskId::new(2);
        assert_eq!(serde_json::to_string(&task_id).unwrap(), r#""TASK-2""#);

        let sub_id = SubTaskId::new("2.1").unwrap();
        assert_eq!(serde_json::to_string(&sub_id).unwrap(), r#""TASK-2.1""#);

        let parsed: SubTaskId = serde_json::from_str(r#""TASK-2.1""#).unwrap();
        assert_eq!(parsed, sub_id);
    }
}
