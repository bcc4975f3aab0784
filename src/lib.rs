//! Blueprint CLI - Convert project proposal documents into structured task graphs
//!
//! Blueprint reads a semi-structured proposal document (markdown-style
//! headings), validates its structure, and emits a YAML task graph
//! consumed by downstream scaffolding and splitting tools.

pub mod domain;
pub mod parser;
pub mod convert;
pub mod storage;
pub mod cli;

pub use convert::{Conversion, ConvertError, Converter};
pub use domain::{SubTask, SubTaskId, Task, TaskGraph, TaskId, TaskStatus};
