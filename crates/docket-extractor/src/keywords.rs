//! Task keywords and the task-likeness gate

use crate::Linguistics;

/// Words whose presence (as a case-insensitive substring) marks a span as
/// task-like
pub const TASK_KEYWORDS: &[&str] = &[
    "implement",
    "create",
    "develop",
    "build",
    "design",
    "write",
    "test",
    "fix",
    "update",
    "add",
    "remove",
    "modify",
    "improve",
    "refactor",
    "deploy",
    "configure",
    "setup",
    "task",
    "feature",
    "requirement",
    "deliverable",
    "milestone",
    "sprint",
    "story",
    "action",
    "complete",
    "finish",
];

/// Whether `text` contains any task keyword
pub fn contains_task_keyword(text: &str) -> bool {
    let lower = text.to_lowercase();
    TASK_KEYWORDS.iter().any(|keyword| lower.contains(keyword))
}

/// Number of distinct task keywords contained in `text`
pub fn count_task_keywords(text: &str) -> usize {
    let lower = text.to_lowercase();
    TASK_KEYWORDS
        .iter()
        .filter(|keyword| lower.contains(*keyword))
        .count()
}

/// Task-likeness gate
///
/// A span passes when it has at least `min_length` characters and either
/// contains a task keyword or, with an analyzer present, starts with a verb.
pub fn is_task_like(span: &str, linguistics: &Linguistics, min_length: usize) -> bool {
    if span.chars().count() < min_length {
        return false;
    }
    contains_task_keyword(span) || linguistics.first_token_is_verb(span)
}

#[cfg(test)]
mod tests {
    use super::*;
    use docket_nlp::LexiconAnalyzer;
    use std::sync::Arc;

    #[test]
    fn test_keyword_substring_case_insensitive() {
        assert!(contains_task_keyword("Please DEPLOY on Friday"));
        // substring semantics: "address" contains "add"
        assert!(contains_task_keyword("New address"));
        assert!(!contains_task_keyword("Lunch with Bob"));
    }

    #[test]
    fn test_count_distinct() {
        assert_eq!(count_task_keywords("Fix and test the fix"), 2);
        assert_eq!(count_task_keywords("nothing here"), 0);
        assert_eq!(count_task_keywords("update setup test"), 3);
    }

    #[test]
    fn test_gate_length() {
        assert!(!is_task_like("Fix it", &Linguistics::Absent, 10));
        assert!(is_task_like("Fix it now!", &Linguistics::Absent, 10));
    }

    #[test]
    fn test_gate_verb_only_with_analyzer() {
        let span = "Review the quarterly numbers";
        assert!(!is_task_like(span, &Linguistics::Absent, 10));

        let present = Linguistics::Present(Arc::new(LexiconAnalyzer::new()));
        assert!(is_task_like(span, &present, 10));
    }

    #[test]
    fn test_gate_counts_characters_not_bytes() {
        // 9 characters, 18 bytes
        let span = "ééééééééé";
        assert!(!is_task_like(span, &Linguistics::Absent, 10));
    }
}
