//! Line classification for proposal documents
//!
//! Every raw line falls into exactly one class. The section splitter and
//! feature extractor consume these classifications instead of matching
//! patterns ad hoc, so the precedence between heading styles lives in
//! one place.
//!
//! Heading levels are exact: `#### Deep Dive` is plain text, not a
//! heading, and a `### ` line that is not a well-formed feature heading
//! is plain text too.

/// Classification of a single raw line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// Level-1 heading: `# <text>`
    Title(&'a str),

    /// Level-2 heading: `## <text>`
    Section(&'a str),

    /// Feature heading: `### Feature <n>: <name>`
    Feature { number: &'a str, name: &'a str },

    /// Sub-feature item: `- Sub-feature <major>.<minor>: <description>`
    ///
    /// `number` is the literal digit pair from the line.
    SubFeature {
        number: &'a str,
        description: &'a str,
    },

    /// Anything else
    Text(&'a str),
}

/// Classifies a single line
pub fn classify(line: &str) -> LineKind<'_> {
    if let Some((level, text)) = heading(line) {
        match level {
            1 => return LineKind::Title(text.trim()),
            2 => return LineKind::Section(text.trim()),
            3 => {
                if let Some(kind) = parse_feature(text) {
                    return kind;
                }
            }
            _ => {}
        }
        return LineKind::Text(line);
    }

    if let Some(rest) = line.trim_start().strip_prefix("- Sub-feature ") {
        if let Some(kind) = parse_sub_feature(rest) {
            return kind;
        }
    }

    LineKind::Text(line)
}

/// Splits a `#`-prefixed heading line into its level and text
///
/// The marker must be followed by a space; `##Text` is not a heading.
fn heading(line: &str) -> Option<(usize, &str)> {
    let rest = line.trim_start_matches('#');
    let level = line.len() - rest.len();
    if level == 0 {
        return None;
    }

    rest.strip_prefix(' ').map(|text| (level, text))
}

/// Parses `Feature <n>: <name>` (the text after `### `)
fn parse_feature(text: &str) -> Option<LineKind<'_>> {
    let after = text.strip_prefix("Feature ")?;

    let digits_end = after.find(|c: char| !c.is_ascii_digit())?;
    if digits_end == 0 {
        return None;
    }
    let number = &after[..digits_end];

    let name = after[digits_end..].strip_prefix(": ")?.trim();
    if name.is_empty() {
        return None;
    }

    Some(LineKind::Feature { number, name })
}

/// Parses `<major>.<minor>: <description>` (the text after `- Sub-feature `)
fn parse_sub_feature(text: &str) -> Option<LineKind<'_>> {
    let (number, tail) = text.split_once(':')?;
    if !is_number_pair(number) {
        return None;
    }

    let description = tail.strip_prefix(' ')?.trim();
    if description.is_empty() {
        return None;
    }

    Some(LineKind::SubFeature {
        number,
        description,
    })
}

fn is_number_pair(s: &str) -> bool {
    match s.split_once('.') {
        Some((major, minor)) => {
            !major.is_empty()
                && !minor.is_empty()
                && major.chars().all(|c| c.is_ascii_digit())
                && minor.chars().all(|c| c.is_ascii_digit())
        }
        None => false,
    }
}
