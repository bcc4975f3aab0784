//! Section splitting for proposal documents
//!
//! Sections are the level-2 heading blocks of the document. The mapping
//! preserves first-appearance order; a repeated heading replaces the
//! earlier body but keeps its original position. Content before the
//! first heading belongs to the title/version extraction path and is
//! not part of the mapping.

use super::line::{classify, LineKind};

/// A named section with its trimmed body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub title: String,
    pub body: String,
}

/// Ordered mapping from section title to trimmed body
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sections(Vec<Section>);

impl Sections {
    /// Splits raw document text into sections
    ///
    /// Never fails: empty input yields an empty mapping.
    pub fn parse(text: &str) -> Self {
        let mut sections = Sections::default();
        let mut current: Option<(String, Vec<&str>)> = None;

        for raw in text.lines() {
            match classify(raw) {
                LineKind::Section(title) => {
                    if let Some((title, body)) = current.take() {
                        sections.insert(title, join_body(&body));
                    }
                    current = Some((title.to_string(), Vec::new()));
                }
                _ => {
                    if let Some((_, body)) = &mut current {
                        body.push(raw);
                    }
                }
            }
        }

        if let Some((title, body)) = current {
            sections.insert(title, join_body(&body));
        }

        sections
    }

    /// Inserts a section, replacing the body of an earlier one with the
    /// same title while keeping its position
    fn insert(&mut self, title: String, body: String) {
        if let Some(existing) = self.0.iter_mut().find(|s| s.title == title) {
            existing.body = body;
        } else {
            self.0.push(Section { title, body });
        }
    }

    /// Returns the body of the named section
    pub fn body(&self, title: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|s| s.title == title)
            .map(|s| s.body.as_str())
    }

    /// Returns true if the named section exists
    pub fn contains(&self, title: &str) -> bool {
        self.0.iter().any(|s| s.title == title)
    }

    /// Iterates over sections in document order
    pub fn iter(&self) -> impl Iterator<Item = &Section> {
        self.0.iter()
    }

    /// Returns the number of sections
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the mapping is empty
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

fn join_body(lines: &[&str]) -> String {
    lines.join("\n").trim().to_string()
}
