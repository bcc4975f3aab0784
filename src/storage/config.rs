//! Converter configuration
//!
//! The fixed parameters of a conversion (token budgets, the
//! required-section list, the task-file layout) are an explicit value
//! handed to the converter rather than module constants. Defaults can
//! be overridden by a global config file or an explicit `--config`
//! path.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse configuration: {0}")]
    Parse(String),
}

/// Conversion parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ConvertConfig {
    /// Sections every proposal document must carry
    pub required_sections: Vec<String>,

    /// Section holding the feature headings
    pub features_section: String,

    /// Per-task resource cap recorded in the output settings
    pub max_tokens_per_task: u32,

    /// Token estimate assigned to each extracted sub-task
    pub subtask_estimate_tokens: u32,

    /// Root directory for per-component task files
    pub task_file_root: String,
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            required_sections: [
                "Overview",
                "Features/Components",
                "Requirements",
                "Technical Specifications",
                "Dependencies",
                "Implementation Details",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
            features_section: "Features/Components".to_string(),
            max_tokens_per_task: 40_000,
            subtask_estimate_tokens: 25_000,
            task_file_root: "src/libs".to_string(),
        }
    }
}

impl ConvertConfig {
    /// Loads configuration from the global config file, falling back to
    /// defaults when none exists
    pub fn load() -> Result<Self> {
        let config_path = match Self::global_config_dir() {
            Some(dir) => dir.join("config.toml"),
            None => return Ok(Self::default()),
        };

        if !config_path.exists() {
            return Ok(Self::default());
        }

        Self::from_file(&config_path)
    }

    /// Loads configuration from a specific file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;

        toml::from_str(&content)
            .map_err(|e| ConfigError::Parse(e.to_string()))
            .with_context(|| format!("Failed to parse config: {}", path.display()))
    }

    /// Returns the global config directory
    pub fn global_config_dir() -> Option<PathBuf> {
        ProjectDirs::from("dev", "blueprint", "blueprint")
            .map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Returns the task-file path for a component
    pub fn task_file_path(&self, component: &str) -> String {
        format!(
            "{}/{}/task_{}.yaml",
            self.task_file_root, component, component
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn default_parameters() {
        let config = ConvertConfig::default();

        assert_eq!(config.max_tokens_per_task, 40_000);
        assert_eq!(config.subtask_estimate_tokens, 25_000);
        assert_eq!(config.features_section, "Features/Components");
        assert_eq!(config.required_sections.len(), 6);
        assert_eq!(config.required_sections[0], "Overview");
        assert_eq!(
            config.required_sections.last().map(String::as_str),
            Some("Implementation Details")
        );
    }

    #[test]
    fn parse_partial_override() {
        let toml = r#"
max_tokens_per_task = 60000
task_file_root = "crates"
"#;

        let config: ConvertConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.max_tokens_per_task, 60_000);
        assert_eq!(config.task_file_root, "crates");
        // Untouched fields keep their defaults
        assert_eq!(config.subtask_estimate_tokens, 25_000);
        assert_eq!(config.required_sections.len(), 6);
    }

    #[test]
    fn task_file_path_layout() {
        let config = ConvertConfig::default();
        assert_eq!(
            config.task_file_path("Auth"),
            "src/libs/Auth/task_Auth.yaml"
        );
    }

    #[test]
    fn from_file_reads_toml() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        let mut file = fs::File::create(&path).unwrap();
        writeln!(file, "subtask_estimate_tokens = 5000").unwrap();

        let config = ConvertConfig::from_file(&path).unwrap();
        assert_eq!(config.subtask_estimate_tokens, 5_000);
    }

    #[test]
    fn from_file_rejects_bad_toml() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "max_tokens_per_task = \"lots\"").unwrap();

        assert!(ConvertConfig::from_file(&path).is_err());
    }

    #[test]
    fn from_file_missing_path_errors() {
        assert!(ConvertConfig::from_file(Path::new("/nonexistent/config.toml")).is_err());
    }
}
