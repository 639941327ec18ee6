//! Task suggestion module - the unit of extraction output

use crate::{ConfidenceScore, ExtractionMethod, Priority};

/// Maximum title length in characters
pub const MAX_TITLE_CHARS: usize = 255;

/// Maximum raw snippet length in characters
pub const MAX_SNIPPET_CHARS: usize = 500;

/// A candidate task inferred from a span of document text
///
/// Created by exactly one extraction strategy from one span. Only the
/// confidence score changes after creation.
#[derive(Debug, Clone, PartialEq)]
pub struct TaskSuggestion {
    /// Derived title: non-empty, at most [`MAX_TITLE_CHARS`] characters
    pub title: String,

    /// Full span, present only when strictly longer than the title
    pub description: Option<String>,

    /// Inferred priority (defaults to medium)
    pub priority: Priority,

    /// Raw due-date text as matched, not normalized
    pub due_date: Option<String>,

    /// Estimated effort in hours (always positive)
    pub estimated_hours: Option<u32>,

    /// Strategy that produced this suggestion
    pub method: ExtractionMethod,

    /// First [`MAX_SNIPPET_CHARS`] characters of the source span
    pub raw_text_snippet: String,

    /// Ranking score
    pub confidence: ConfidenceScore,
}

impl TaskSuggestion {
    /// Whether a due date was inferred
    pub fn has_due_date(&self) -> bool {
        self.due_date.is_some()
    }

    /// Whether an effort estimate was inferred
    pub fn has_estimate(&self) -> bool {
        self.estimated_hours.is_some()
    }

    /// Replace the confidence score
    pub fn with_confidence(mut self, confidence: ConfidenceScore) -> Self {
        self.confidence = confidence;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> TaskSuggestion {
        TaskSuggestion {
            title: "Write the report".to_string(),
            description: None,
            priority: Priority::Medium,
            due_date: Some("12/01/2024".to_string()),
            estimated_hours: None,
            method: ExtractionMethod::NumberedList,
            raw_text_snippet: "Write the report".to_string(),
            confidence: ConfidenceScore::MIN,
        }
    }

    #[test]
    fn test_presence_helpers() {
        let suggestion = sample();
        assert!(suggestion.has_due_date());
        assert!(!suggestion.has_estimate());
    }

    #[test]
    fn test_with_confidence_only_touches_score() {
        let original = sample();
        let scored = original.clone().with_confidence(ConfidenceScore::new(0.6));
        assert_eq!(scored.confidence.value(), 0.6);
        assert_eq!(scored.title, original.title);
        assert_eq!(scored.method, original.method);
    }
}
