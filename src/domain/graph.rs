//! The assembled task graph document
//!
//! This is the output contract of the converter. Serialized field order
//! is the document order consumed by the downstream splitter and
//! scaffolding tools, so the struct field order here is load-bearing.

use serde::{Deserialize, Serialize};

use super::id::SubTaskId;
use super::task::{Task, TaskStatus};

/// Project metadata block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectInfo {
    /// Project title from the document's level-1 heading
    pub name: String,

    /// Body of the Overview section
    pub description: String,

    /// Version from the `[Version: ...]` marker, or `1.0.0`
    pub version: String,
}

/// Settings block carried alongside the tasks
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Per-task resource cap
    pub max_tokens_per_task: u32,

    /// Status assigned to newly created sub-tasks
    pub default_status: TaskStatus,

    /// Every status value downstream tools may write back
    pub allowed_statuses: Vec<TaskStatus>,
}

/// Index entry mapping a component to its externally managed task file
///
/// The converter never writes these files; the index only tells the
/// splitter and initializer where they belong.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskFileEntry {
    /// Per-component task-file path
    pub path: String,

    /// Sub-task ids belonging to the component
    pub tasks: Vec<SubTaskId>,
}

/// The complete task graph handed to downstream tools
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskGraph {
    pub project: ProjectInfo,
    pub tasks: Vec<Task>,
    pub settings: Settings,
    pub task_files: Vec<TaskFileEntry>,
}
