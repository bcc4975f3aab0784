//! Feature and sub-feature extraction
//!
//! Walks the classified lines of the features section with two states:
//! no open task, or one open task collecting sub-tasks. A feature
//! heading closes the open task and opens the next; a sub-feature line
//! before the first feature heading has no parent and is dropped.

use crate::domain::{SubTask, SubTaskId, Task};

use super::line::{classify, LineKind};

/// Result of walking the features section
#[derive(Debug)]
pub struct Extraction {
    /// Tasks in the order their feature headings appeared
    pub tasks: Vec<Task>,

    /// Count of sub-feature lines dropped for lack of an open feature
    pub orphaned: usize,
}

/// Extracts tasks from the body of the features section
///
/// Task ids are assigned sequentially in appearance order; the numbering
/// embedded in the feature headings is ignored. Sub-task ids carry the
/// literal `major.minor` pair from their source lines. Lines matching
/// neither pattern are skipped.
pub fn extract_features(body: &str, estimated_tokens: u32) -> Extraction {
    let mut tasks: Vec<Task> = Vec::new();
    let mut current: Option<Task> = None;
    let mut orphaned = 0;

    for line in body.lines() {
        match classify(line) {
            LineKind::Feature { name, .. } => {
                if let Some(task) = current.take() {
                    tasks.push(task);
                }
                current = Some(Task::from_feature(tasks.len() as u32 + 1, name));
            }
            LineKind::SubFeature {
                number,
                description,
            } => match &mut current {
                Some(task) => {
                    if let Ok(id) = SubTaskId::new(number) {
                        task.sub_tasks
                            .push(SubTask::new(id, description, estimated_tokens));
                    }
                }
                None => orphaned += 1,
            },
            _ => {}
        }
    }

    if let Some(task) = current {
        tasks.push(task);
    }

    Extraction { tasks, orphaned }
}

/// Returns true if the body contains at least one feature heading
pub fn has_features(body: &str) -> bool {
    body.lines()
        .any(|line| matches!(classify(line), LineKind::Feature { .. }))
}
