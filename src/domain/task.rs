//! Task and sub-task records produced by the converter
//!
//! Tasks map one-to-one to feature headings in the source document and
//! own the sub-tasks extracted from their sub-feature lines. Records are
//! built once during a conversion pass and never mutated afterwards.

use serde::{Deserialize, Serialize};

use super::id::{SubTaskId, TaskId};

/// Status of a sub-task
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    #[default]
    Pending,
    InProgress,
    Completed,
    Blocked,
}

impl TaskStatus {
    /// All statuses a sub-task may take, in display order
    pub const ALL: [TaskStatus; 4] = [
        TaskStatus::Pending,
        TaskStatus::InProgress,
        TaskStatus::Completed,
        TaskStatus::Blocked,
    ];

    /// Returns the serialized label for the status
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Pending => "pending",
            TaskStatus::InProgress => "in_progress",
            TaskStatus::Completed => "completed",
            TaskStatus::Blocked => "blocked",
        }
    }
}

/// A sub-task extracted from a sub-feature line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubTask {
    /// Identifier carrying the literal source numbering
    pub id: SubTaskId,

    /// Human-readable name derived from the source numbering
    pub name: String,

    /// Description copied from the sub-feature line
    pub description: String,

    /// Estimated token budget for the work
    pub estimated_tokens: u32,

    /// Sub-tasks this one depends on (always empty at creation)
    pub dependencies: Vec<SubTaskId>,

    /// Current status (always `pending` at creation)
    pub status: TaskStatus,
}

impl SubTask {
    /// Creates a sub-task from its id, source description, and token estimate
    pub fn new(id: SubTaskId, description: impl Into<String>, estimated_tokens: u32) -> Self {
        let name = format!("Sub-feature {}", id.number());
        Self {
            id,
            name,
            description: description.into(),
            estimated_tokens,
            dependencies: Vec::new(),
            status: TaskStatus::default(),
        }
    }
}

/// A task extracted from a feature heading
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    /// Sequential identifier in appearance order
    pub id: TaskId,

    /// Human-readable name derived from the feature name
    pub name: String,

    /// Description derived from the feature name
    pub description: String,

    /// Component names covered by this task (always exactly one)
    pub components: Vec<String>,

    /// Sub-tasks in source order
    pub sub_tasks: Vec<SubTask>,
}

impl Task {
    /// Creates a task from its 1-based sequence number and feature name
    pub fn from_feature(sequence: u32, feature_name: &str) -> Self {
        Self {
            id: TaskId::new(sequence),
            name: format!("{} Implementation", feature_name),
            description: format!("Implementation of {}", feature_name),
            components: vec![component_name(feature_name)],
            sub_tasks: Vec::new(),
        }
    }

    /// Returns the component name for this task
    ///
    /// Tasks always carry exactly one component.
    pub fn component(&self) -> &str {
        &self.components[0]
    }
}

/// Derives a component name from a feature name by stripping whitespace
fn component_name(feature_name: &str) -> String {
    feature_name.split_whitespace().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn task_from_feature() {
        let task = Task::from_feature(3, "User Auth");

        assert_eq!(task.id.to_string(), "TASK-3");
        assert_eq!(task.name, "User Auth Implementation");
        assert_eq!(task.description, "Implementation of User Auth");
        assert_eq!(task.components, vec!["UserAuth".to_string()]);
        assert_eq!(task.component(), "UserAuth");
        assert!(task.sub_tasks.is_empty());
    }

    #[test]
    fn component_name_strips_all_whitespace() {
        assert_eq!(component_name("User Auth"), "UserAuth");
        assert_eq!(component_name("  Data \t Layer  "), "DataLayer");
        assert_eq!(component_name("Auth"), "Auth");
    }

    #[test]
    fn new_sub_task_defaults() {
        let id = SubTaskId::new("1.2").unwrap();
        let sub = SubTask::new(id, "logout", 25_000);

        assert_eq!(sub.id.to_string(), "TASK-1.2");
        assert_eq!(sub.name, "Sub-feature 1.2");
        assert_eq!(sub.description, "logout");
        assert_eq!(sub.estimated_tokens, 25_000);
        assert!(sub.dependencies.is_empty());
        assert_eq!(sub.status, TaskStatus::Pending);
    }

    #[test]
    fn status_serializes_snake_case() {
        assert_eq!(
            serde_json::to_string(&TaskStatus::InProgress).unwrap(),
            r#""in_progress""#
        );
        assert_eq!(
            serde_json::to_string(&TaskStatus::Pending).unwrap(),
            r#""pending""#
        );

        let parsed: TaskStatus = serde_json::from_str(r#""blocked""#).unwrap();
        assert_eq!(parsed, TaskStatus::Blocked);
    }

    #[test]
    fn status_labels_match_serialization() {
        for status in TaskStatus::ALL {
            let json = serde_json::to_string(&status).unwrap();
            assert_eq!(json, format!("\"{}\"", status.as_str()));
        }
    }

    #[test]
    fn serde_roundtrip() {
        let mut task = Task::from_feature(1, "Auth");
        task.sub_tasks
            .push(SubTask::new(SubTaskId::new("1.1").unwrap(), "login", 25_000));

        let json = serde_json::to_string(&task).unwrap();
        let parsed: Task = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed, task);
    }
}
