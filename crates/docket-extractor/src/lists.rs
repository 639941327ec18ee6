//! List-structure extraction
//!
//! Numbered items start with `<digits>.` or `<digits>)`; bullet items with
//! one of `•`, `-`, `*`, `+`. Both need whitespace after the marker. An item
//! runs until the next marker of the same kind, a blank line or the end of
//! the text, so it may span several lines.

use crate::keywords::is_task_like;
use crate::metadata::build_suggestion;
use crate::Linguistics;
use docket_domain::{ExtractionMethod, TaskSuggestion};
use tracing::debug;

/// Kind of list marker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    /// `1.` or `1)`
    Numbered,
    /// `•`, `-`, `*` or `+`
    Bullet,
}

impl ListKind {
    /// Method tag for this kind of item
    pub fn method(self, capable: bool) -> ExtractionMethod {
        match (self, capable) {
            (ListKind::Numbered, true) => ExtractionMethod::NlpNumberedList,
            (ListKind::Bullet, true) => ExtractionMethod::NlpBulletList,
            (ListKind::Numbered, false) => ExtractionMethod::NumberedList,
            (ListKind::Bullet, false) => ExtractionMethod::BulletPattern,
        }
    }
}

/// Detect a list marker at the start of a line
///
/// Returns the marker kind and the content after the marker.
pub fn list_marker(line: &str) -> Option<(ListKind, &str)> {
    let line = line.trim_start();
    let mut chars = line.char_indices();

    let (kind, rest) = match chars.next()? {
        (_, '•' | '-' | '*' | '+') => {
            let (i, _) = chars.next()?;
            (ListKind::Bullet, &line[i..])
        }
        (_, c) if c.is_ascii_digit() => {
            let after_digits = line.trim_start_matches(|c: char| c.is_ascii_digit());
            let rest = after_digits
                .strip_prefix('.')
                .or_else(|| after_digits.strip_prefix(')'))?;
            (ListKind::Numbered, rest)
        }
        _ => return None,
    };

    if !rest.starts_with(char::is_whitespace) {
        return None;
    }
    Some((kind, rest.trim_start()))
}

/// Split text into the items of one list kind, in order of appearance
pub fn segment(text: &str, kind: ListKind) -> Vec<String> {
    let mut items = Vec::new();
    let mut current: Option<String> = None;

    for line in text.lines() {
        if line.trim().is_empty() {
            items.extend(current.take());
            continue;
        }

        match list_marker(line) {
            Some((found, content)) if found == kind => {
                items.extend(current.take());
                current = Some(content.to_string());
            }
            _ => {
                if let Some(item) = current.as_mut() {
                    item.push('\n');
                    item.push_str(line.trim());
                }
            }
        }
    }

    items.extend(current);
    items
        .into_iter()
        .map(|item| item.trim().to_string())
        .collect()
}

/// Extract list items that pass the task-likeness gate
///
/// Numbered items come before bullet items.
pub fn extract(text: &str, linguistics: &Linguistics, min_length: usize) -> Vec<TaskSuggestion> {
    let capable = linguistics.is_available();
    let mut suggestions = Vec::new();

    for kind in [ListKind::Numbered, ListKind::Bullet] {
        let method = kind.method(capable);
        let before = suggestions.len();

        for item in segment(text, kind) {
            if !is_task_like(&item, linguistics, min_length) {
                continue;
            }
            suggestions.extend(build_suggestion(&item, method));
        }

        debug!("{} candidates from {:?} items", suggestions.len() - before, kind);
    }

    suggestions
}
