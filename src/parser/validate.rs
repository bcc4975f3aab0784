//! Structural validation of the section set
//!
//! Runs before any extraction output is trusted: every required section
//! must be present with non-empty content, and the features section must
//! contain at least one recognizable feature heading. Violations are
//! collected as human-readable messages; any violation aborts the
//! pipeline before assembly.

use super::features::has_features;
use super::sections::Sections;

/// Validates the section set against the required-section list
///
/// Returns one message per violation, in check order; an empty list
/// means the document is structurally valid.
pub fn validate(sections: &Sections, required: &[String], features_section: &str) -> Vec<String> {
    let mut errors = Vec::new();

    for name in required {
        match sections.body(name) {
            None => errors.push(format!("Missing required section: {}", name)),
            Some(body) if body.is_empty() => {
                errors.push(format!("Empty required section: {}", name));
            }
            Some(_) => {}
        }
    }

    if let Some(body) = sections.body(features_section) {
        if !has_features(body) {
            errors.push(format!(
                "No features found in {} section",
                features_section
            ));
        }
    }

    errors
}
