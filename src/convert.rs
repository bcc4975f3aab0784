//! Document-to-task-graph conversion pipeline
//!
//! Ties the parser stages together: split sections, validate, extract
//! project info and features, assemble the graph. Validation failure
//! aborts before assembly, so no partial graph ever escapes.

use thiserror::Error;

use crate::domain::{ProjectInfo, Settings, Task, TaskFileEntry, TaskGraph, TaskStatus};
use crate::parser::{self, Sections};
use crate::storage::ConvertConfig;

/// Section whose body becomes the project description
const OVERVIEW_SECTION: &str = "Overview";

#[derive(Debug, Error)]
pub enum ConvertError {
    /// The document failed structural validation
    #[error("document failed validation with {} error(s)", .0.len())]
    Validation(Vec<String>),
}

impl ConvertError {
    /// Returns the individual error messages
    pub fn messages(&self) -> &[String] {
        match self {
            ConvertError::Validation(errors) => errors,
        }
    }
}

/// Result of a successful conversion
#[derive(Debug)]
pub struct Conversion {
    /// The assembled task graph
    pub graph: TaskGraph,

    /// Sub-feature lines dropped because no feature heading preceded them
    pub orphaned_sub_features: usize,
}

/// Converts proposal documents into task graphs
///
/// A converter is a pure function of its configuration: the same text
/// always produces the same graph.
#[derive(Debug, Default)]
pub struct Converter {
    config: ConvertConfig,
}

impl Converter {
    /// Creates a converter with the given configuration
    pub fn new(config: ConvertConfig) -> Self {
        Self { config }
    }

    /// Returns the converter configuration
    pub fn config(&self) -> &ConvertConfig {
        &self.config
    }

    /// Converts raw document text into a task graph
    ///
    /// Returns every validation violation at once; nothing is assembled
    /// unless the document is structurally valid.
    pub fn convert(&self, text: &str) -> Result<Conversion, ConvertError> {
        let sections = Sections::parse(text);

        let errors = parser::validate(
            &sections,
            &self.config.required_sections,
            &self.config.features_section,
        );
        if !errors.is_empty() {
            return Err(ConvertError::Validation(errors));
        }

        let extraction = parser::extract_features(
            sections
                .body(&self.config.features_section)
                .unwrap_or_default(),
            self.config.subtask_estimate_tokens,
        );

        let project = ProjectInfo {
            name: parser::extract_title(text),
            description: sections.body(OVERVIEW_SECTION).unwrap_or_default().to_string(),
            version: parser::extract_version(text),
        };

        let task_files = self.task_file_index(&extraction.tasks);

        let graph = TaskGraph {
            project,
            tasks: extraction.tasks,
            settings: self.settings(),
            task_files,
        };

        Ok(Conversion {
            graph,
            orphaned_sub_features: extraction.orphaned,
        })
    }

    fn settings(&self) -> Settings {
        Settings {
            max_tokens_per_task: self.config.max_tokens_per_task,
            default_status: TaskStatus::default(),
            allowed_statuses: TaskStatus::ALL.to_vec(),
        }
    }

    /// Builds the per-component task-file index handed to the external
    /// splitter and initializer
    fn task_file_index(&self, tasks: &[Task]) -> Vec<TaskFileEntry> {
        tasks
            .iter()
            .map(|task| TaskFileEntry {
                path: self.config.task_file_path(task.component()),
                tasks: task.sub_tasks.iter().map(|s| s.id.clone()).collect(),
            })
            .collect()
    }
}
