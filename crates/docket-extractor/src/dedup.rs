//! Near-duplicate merge across strategies

use crate::{ExtractorError, Linguistics};
use docket_domain::TaskSuggestion;
use std::time::Instant;
use tracing::trace;

/// Merge suggestions whose titles are more similar than `threshold`
///
/// Suggestions are visited in generation order. Each one is compared with
/// the accepted list; at the first match it replaces the accepted entry in
/// the same slot if its score is strictly higher, and is dropped otherwise.
/// Unmatched suggestions are appended.
///
/// The deadline is checked before each suggestion.
pub fn deduplicate(
    suggestions: Vec<TaskSuggestion>,
    linguistics: &Linguistics,
    threshold: f64,
    deadline: Option<Instant>,
) -> Result<Vec<TaskSuggestion>, ExtractorError> {
    let mut accepted: Vec<(String, TaskSuggestion)> = Vec::with_capacity(suggestions.len());
    let mut similarity = linguistics.similarity_fn();

    for suggestion in suggestions {
        if deadline.is_some_and(|deadline| Instant::now() >= deadline) {
            return Err(ExtractorError::DeadlineExceeded);
        }

        let title = suggestion.title.to_lowercase();

        let matched = accepted
            .iter()
            .position(|(existing, _)| similarity(&title, existing) > threshold);

        match matched {
            Some(slot) => {
                let existing = &mut accepted[slot];
                if suggestion.confidence > existing.1.confidence {
                    trace!(kept = %suggestion.title, dropped = %existing.1.title, "duplicate replaced");
                    *existing = (title, suggestion);
                } else {
                    trace!(kept = %existing.1.title, dropped = %suggestion.title, "duplicate dropped");
                }
            }
            None => accepted.push((title, suggestion)),
        }
    }

    Ok(accepted.into_iter().map(|(_, suggestion)| suggestion).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metadata::build_suggestion;
    use docket_domain::{ConfidenceScore, ExtractionMethod};
    use docket_nlp::LexiconAnalyzer;
    use std::sync::Arc;

    fn scored(title: &str, confidence: f64) -> TaskSuggestion {
        build_suggestion(title, ExtractionMethod::PatternMatching)
            .unwrap()
            .with_confidence(ConfidenceScore::new(confidence))
    }

    fn titles(suggestions: &[TaskSuggestion]) -> Vec<&str> {
        suggestions.iter().map(|s| s.title.as_str()).collect()
    }

    #[test]
    fn test_higher_score_takes_slot() {
        let input = vec![
            scored("Fix the login bug", 0.6),
            scored("Order lunch", 0.7),
            scored("fix the login bugs", 0.9),
        ];
        let result = deduplicate(input, &Linguistics::Absent, 0.8, None).unwrap();
        assert_eq!(titles(&result), vec!["Fix the login bugs", "Order lunch"]);
        assert_eq!(result[0].confidence, ConfidenceScore::new(0.9));
    }

    #[test]
    fn test_lower_or_equal_score_dropped() {
        let input = vec![
            scored("Fix the login bug", 0.7),
            scored("Fix the login bugs", 0.7),
        ];
        let result = deduplicate(input, &Linguistics::Absent, 0.8, None).unwrap();
        assert_eq!(titles(&result), vec!["Fix the login bug"]);
    }

    #[test]
    fn test_edit_distance_keeps_reworded_titles() {
        let input = vec![scored("Fix the login bug", 0.6), scored("Fix login bug", 0.9)];
        let result = deduplicate(input, &Linguistics::Absent, 0.8, None).unwrap();
        assert_eq!(result.len(), 2);
    }

    #[test]
    fn test_analyzer_similarity_merges_reworded_titles() {
        let linguistics = Linguistics::Present(Arc::new(LexiconAnalyzer::new()));
        let input = vec![scored("Fix the login bug", 0.6), scored("Fix login bug", 0.9)];
        let result = deduplicate(input, &linguistics, 0.8, None).unwrap();
        assert_eq!(titles(&result), vec!["Fix login bug"]);
    }

    #[test]
    fn test_distinct_titles_all_kept() {
        let input = vec![
            scored("Write the report", 0.7),
            scored("Review the report", 0.7),
        ];
        let linguistics = Linguistics::Present(Arc::new(LexiconAnalyzer::new()));
        assert_eq!(deduplicate(input, &linguistics, 0.8, None).unwrap().len(), 2);
    }

    #[test]
    fn test_passed_deadline_stops() {
        let input = vec![scored("Write the report", 0.7)];
        assert!(matches!(
            deduplicate(input, &Linguistics::Absent, 0.8, Some(Instant::now())),
            Err(ExtractorError::DeadlineExceeded)
        ));
    }

    #[test]
    fn test_empty_input() {
        assert!(deduplicate(Vec::new(), &Linguistics::Absent, 0.8, None).unwrap().is_empty());
    }
}
