//! Explicit task-marker extraction ("Task 3:", "Item #2", "Step 4.")

use crate::metadata::build_suggestion;
use docket_domain::{ExtractionMethod, TaskSuggestion};
use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

static TASK_MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:task|item|step|requirement|feature|deliverable)\s*[#:]?\s*\d+[.:]?")
        .expect("Invalid task marker regex")
});

/// Extract the content following each task marker
///
/// Content runs to the next marker or the end of the text. No gate is
/// applied; spans whose title comes out empty are dropped.
pub fn extract(text: &str) -> Vec<TaskSuggestion> {
    let markers: Vec<_> = TASK_MARKER.find_iter(text).collect();

    let suggestions: Vec<TaskSuggestion> = markers
        .iter()
        .enumerate()
        .filter_map(|(i, marker)| {
            let end = markers.get(i + 1).map_or(text.len(), |next| next.start());
            build_suggestion(&text[marker.end()..end], ExtractionMethod::PatternMatching)
        })
        .collect();

    debug!(
        "{} candidates from {} task markers",
        suggestions.len(),
        markers.len()
    );
    suggestions
}
