//! # Storage Layer
//!
//! The file boundary of the converter: one document read, one atomic
//! YAML write, and the TOML configuration layer.
//!
//! | Data | Format | Location |
//! |------|--------|----------|
//! | Input document | Markdown-style text | caller-supplied path |
//! | Task graph | YAML | `--output`, or input path with `.yaml` extension |
//! | Config | TOML | `<config-dir>/blueprint/config.toml`, or `--config` |

mod config;
mod document;

pub use config::{ConfigError, ConvertConfig};
pub use document::{default_output_path, read_document, write_graph};
