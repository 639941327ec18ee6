//! Sentence-level extraction using verb and dependency cues

use crate::keywords::{contains_task_keyword, is_task_like};
use crate::lists::list_marker;
use crate::metadata::build_suggestion;
use crate::Linguistics;
use docket_domain::{ExtractionMethod, TaskSuggestion};
use tracing::{debug, trace};

/// Extract task-like sentences
///
/// Yields nothing without an analyzer. Sentences opening with a list marker
/// belong to the list extractor and are skipped.
pub fn extract(text: &str, linguistics: &Linguistics, min_length: usize) -> Vec<TaskSuggestion> {
    if !linguistics.is_available() {
        return Vec::new();
    }

    let mut suggestions = Vec::new();
    let sentences = linguistics.sentences(text);
    let total = sentences.len();

    for sentence in sentences {
        let span = sentence.text.trim();
        if list_marker(span).is_some() {
            continue;
        }
        if !is_task_like(span, linguistics, min_length) {
            continue;
        }

        let root = sentence.root_verb();
        let object = sentence.direct_object();
        trace!(
            root = root.map(|t| t.lemma.as_str()),
            object = object.map(|t| t.lemma.as_str()),
            "sentence cues"
        );

        if root.is_some() || contains_task_keyword(span) {
            suggestions.extend(build_suggestion(span, ExtractionMethod::DependencyParsing));
        }
    }

    debug!("{} candidates from {} sentences", suggestions.len(), total);
    suggestions
}
