//! # Document Parser
//!
//! Turns raw proposal text into the inputs of the task-graph assembler.
//!
//! Parsing happens in two stages: every line is first classified
//! ([`classify`]) as a heading, feature, sub-feature, or plain text; the
//! section splitter and feature extractor then run small state machines
//! over those classifications. Fixed precedence rules resolve the
//! ambiguous cases (duplicate headings overwrite, orphan sub-feature
//! lines are dropped) instead of raising errors.

mod line;
mod sections;
mod project_info;
mod features;
mod validate;

pub use line::{classify, LineKind};
pub use sections::{Section, Sections};
pub use project_info::{extract_title, extract_version, DEFAULT_VERSION};
pub use features::{extract_features, has_features, Extraction};
pub use validate::validate;
