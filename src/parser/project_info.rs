//! Project title and version extraction
//!
//! Both extractions are best-effort over the raw text: a missing title
//! yields an empty name and a missing version marker falls back to
//! [`DEFAULT_VERSION`]. Nothing here raises an error.

use super::line::{classify, LineKind};

/// Version used when the document carries no `[Version: ...]` marker
pub const DEFAULT_VERSION: &str = "1.0.0";

const VERSION_MARKER: &str = "[Version:";

/// Extracts the project title from the first level-1 heading
///
/// Enclosing bracket characters are stripped, so `# [Demo Project]`
/// yields `Demo Project`. Returns an empty string if the document has
/// no level-1 heading.
pub fn extract_title(text: &str) -> String {
    for line in text.lines() {
        if let LineKind::Title(title) = classify(line) {
            return title.trim_matches(|c| c == '[' || c == ']').to_string();
        }
    }

    String::new()
}

/// Extracts the project version from the first `[Version: <value>]`
/// marker anywhere in the text
///
/// The captured value is trimmed and must be non-empty; otherwise the
/// scan continues. Falls back to [`DEFAULT_VERSION`].
pub fn extract_version(text: &str) -> String {
    for (start, _) in text.match_indices(VERSION_MARKER) {
        let after = &text[start + VERSION_MARKER.len()..];
        if let Some(end) = after.find(']') {
            let value = after[..end].trim();
            if !value.is_empty() {
                return value.to_string();
            }
        }
    }

    DEFAULT_VERSION.to_string()
}
