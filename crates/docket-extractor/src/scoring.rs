//! Confidence scoring and ranking

use crate::keywords::count_task_keywords;
use crate::Linguistics;
use docket_domain::{ConfidenceScore, TaskSuggestion};

const BASE: f64 = 0.5;
const LINGUISTIC_BONUS: f64 = 0.2;
const DEPENDENCY_BONUS: f64 = 0.15;
const KEYWORD_BONUS: f64 = 0.05;
const KEYWORD_BONUS_CAP: f64 = 0.15;
const PRIORITY_BONUS: f64 = 0.05;
const DUE_DATE_BONUS: f64 = 0.05;
const ESTIMATE_BONUS: f64 = 0.05;
const VERB_BONUS: f64 = 0.1;

/// Compute the confidence score for one suggestion
pub fn score(suggestion: &TaskSuggestion, linguistics: &Linguistics) -> ConfidenceScore {
    let mut score = BASE;

    if suggestion.method.is_linguistic() {
        score += LINGUISTIC_BONUS;
    }
    if suggestion.method.is_dependency_parsing() {
        score += DEPENDENCY_BONUS;
    }

    let keywords = count_task_keywords(&suggestion.title) as f64;
    score += (keywords * KEYWORD_BONUS).min(KEYWORD_BONUS_CAP);

    // Priority always carries a value, so this bonus always applies
    score += PRIORITY_BONUS;

    if suggestion.has_due_date() {
        score += DUE_DATE_BONUS;
    }
    if suggestion.has_estimate() {
        score += ESTIMATE_BONUS;
    }
    if linguistics.has_verb(&suggestion.title) {
        score += VERB_BONUS;
    }

    ConfidenceScore::new(score)
}

/// Score every suggestion in place
pub fn score_all(suggestions: &mut [TaskSuggestion], linguistics: &Linguistics) {
    for suggestion in suggestions.iter_mut() {
        suggestion.confidence = score(suggestion, linguistics);
    }
}

/// Sort by confidence, highest first; equal scores keep their order
pub fn rank(suggestions: &mut [TaskSuggestion]) {
    suggestions.sort_by(|a, b| b.confidence.total_cmp(&a.confidence));
}
