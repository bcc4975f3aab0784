//! Document I/O at the process boundary
//!
//! One input read and one output write per conversion. The output is
//! written atomically (temp file + rename), so a failed write never
//! leaves a partial graph behind.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::domain::TaskGraph;

/// Reads the input document
pub fn read_document(path: &Path) -> Result<String> {
    fs::read_to_string(path)
        .with_context(|| format!("Failed to read document: {}", path.display()))
}

/// Returns the default output path: the input path with its extension
/// replaced by `.yaml`
pub fn default_output_path(input: &Path) -> PathBuf {
    input.with_extension("yaml")
}

/// Writes the task graph as YAML, atomically
pub fn write_graph(path: &Path, graph: &TaskGraph) -> Result<()> {
    let yaml = serde_yaml::to_string(graph).context("Failed to serialize task graph")?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }
    }

    let temp_path = temp_path_for(path);
    fs::write(&temp_path, yaml)
        .with_context(|| format!("Failed to write temp file: {}", temp_path.display()))?;

    fs::rename(&temp_path, path).with_context(|| {
        format!(
            "Failed to rename {} to {}",
            temp_path.display(),
            path.display()
        )
    })?;

    Ok(())
}

fn temp_path_for(path: &Path) -> PathBuf {
    match path.extension().and_then(|e| e.to_str()) {
        Some(ext) => path.with_extension(format!("{}.tmp", ext)),
        None => path.with_extension("tmp"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ProjectInfo, Settings, TaskStatus};
    use tempfile::TempDir;

    fn sample_graph() -> TaskGraph {
        TaskGraph {
            project: ProjectInfo {
                name: "Demo".to_string(),
                description: "desc".to_string(),
                version: "1.0.0".to_string(),
            },
            tasks: vec![],
            settings: Settings {
                max_tokens_per_task: 40_000,
                default_status: TaskStatus::Pending,
                allowed_statuses: TaskStatus::ALL.to_vec(),
            },
            task_files: vec![],
        }
    }

    #[test]
    fn default_output_swaps_extension() {
        assert_eq!(
            default_output_path(Path::new("proposal.md")),
            PathBuf::from("proposal.yaml")
        );
        assert_eq!(
            default_output_path(Path::new("dir/proposal.txt")),
            PathBuf::from("dir/proposal.yaml")
        );
        assert_eq!(
            default_output_path(Path::new("noext")),
            PathBuf::from("noext.yaml")
        );
    }

    #[test]
    fn write_and_reparse_graph() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("graph.yaml");

        write_graph(&path, &sample_graph()).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let parsed: TaskGraph = serde_yaml::from_str(&content).unwrap();
        assert_eq!(parsed, sample_graph());
    }

    #[test]
    fn write_creates_parent_directories() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("out").join("graph.yaml");

        write_graph(&path, &sample_graph()).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn atomic_write_leaves_no_temp_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("graph.yaml");

        write_graph(&path, &sample_graph()).unwrap();

        assert!(path.exists());
        assert!(!path.with_extension("yaml.tmp").exists());
    }

    #[test]
    fn read_missing_document_errors() {
        let dir = TempDir::new().unwrap();
        assert!(read_document(&dir.path().join("absent.md")).is_err());
    }
}
