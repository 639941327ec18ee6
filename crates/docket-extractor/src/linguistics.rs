//! Capability handle over an optional linguistic analyzer
//!
//! The pipeline never checks for a null analyzer. It holds a
//! [`Linguistics`] value which is either backed by an analyzer or
//! implements the degraded contract itself: no sentences, no verbs and
//! edit-distance similarity.

use docket_domain::{LinguisticAnalyzer, Sentence, SimilarityFn};
use std::fmt;
use std::sync::Arc;

/// Linguistic capability available to one extraction call
#[derive(Clone)]
pub enum Linguistics {
    /// Analyzer loaded and shared read-only
    Present(Arc<dyn LinguisticAnalyzer>),
    /// No analyzer; pattern-only extraction
    Absent,
}

impl Linguistics {
    /// Whether an analyzer is loaded
    pub fn is_available(&self) -> bool {
        matches!(self, Linguistics::Present(_))
    }

    /// Analyzer name, or "none"
    pub fn name(&self) -> &str {
        match self {
            Linguistics::Present(analyzer) => analyzer.name(),
            Linguistics::Absent => "none",
        }
    }

    /// Segmented sentences (empty without an analyzer)
    pub fn sentences(&self, text: &str) -> Vec<Sentence> {
        match self {
            Linguistics::Present(analyzer) => analyzer.sentences(text),
            Linguistics::Absent => Vec::new(),
        }
    }

    /// Whether the first token of `text` is tagged as a verb
    pub fn first_token_is_verb(&self, text: &str) -> bool {
        match self {
            Linguistics::Present(analyzer) => analyzer
                .tokens(text)
                .first()
                .is_some_and(|token| token.is_verb()),
            Linguistics::Absent => false,
        }
    }

    /// Whether any token of `text` is tagged as a verb
    pub fn has_verb(&self, text: &str) -> bool {
        match self {
            Linguistics::Present(analyzer) => {
                analyzer.tokens(text).iter().any(|token| token.is_verb())
            }
            Linguistics::Absent => false,
        }
    }

    /// Similarity function in [0, 1] for one batch of comparisons
    ///
    /// Without an analyzer this is `1 - lev(a, b) / max(|a|, |b|)` over
    /// characters, and 1.0 for two empty strings.
    pub fn similarity_fn(&self) -> SimilarityFn<'_> {
        match self {
            Linguistics::Present(analyzer) => {
                let mut similarity = analyzer.similarity_fn();
                Box::new(move |a: &str, b: &str| similarity(a, b).clamp(0.0, 1.0))
            }
            Linguistics::Absent => Box::new(strsim::normalized_levenshtein),
        }
    }
}

impl fmt::Debug for Linguistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Linguistics::Present(analyzer) => {
                f.debug_tuple("Present").field(&analyzer.name()).finish()
            }
            Linguistics::Absent => f.write_str("Absent"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use docket_nlp::MockAnalyzer;

    #[test]
    fn test_absent_contract() {
        let linguistics = Linguistics::Absent;
        assert!(!linguistics.is_available());
        assert!(linguistics.sentences("Write the report.").is_empty());
        assert!(!linguistics.first_token_is_verb("Write the report"));
        assert!(!linguistics.has_verb("Write the report"));
    }

    #[test]
    fn test_absent_similarity_is_edit_distance() {
        let linguistics = Linguistics::Absent;
        let mut similarity = linguistics.similarity_fn();
        assert_eq!(similarity("", ""), 1.0);
        assert_eq!(similarity("abc", "abc"), 1.0);
        assert_eq!(similarity("abc", ""), 0.0);

        let s = similarity("fix the login bug", "fix the login bugs");
        assert!((s - 17.0 / 18.0).abs() < 1e-9);

        // Dropping a word is not enough for a near-duplicate
        assert!(similarity("fix the login bug", "fix login bug") < 0.8);
    }

    #[test]
    fn test_present_delegates() {
        let mut mock = MockAnalyzer::new().with_verbs(["write"]);
        mock.add_similarity("a", "b", 0.42);
        let linguistics = Linguistics::Present(Arc::new(mock));

        assert!(linguistics.is_available());
        assert_eq!(linguistics.name(), "mock");
        assert!(linguistics.first_token_is_verb("Write the report"));
        assert!(!linguistics.first_token_is_verb("The report"));
        assert!(linguistics.has_verb("Please write it"));
        assert_eq!((linguistics.similarity_fn())("b", "a"), 0.42);
    }

    #[test]
    fn test_present_similarity_is_clamped() {
        let mut mock = MockAnalyzer::new();
        mock.add_similarity("a", "b", 1.7);
        let linguistics = Linguistics::Present(Arc::new(mock));
        assert_eq!((linguistics.similarity_fn())("a", "b"), 1.0);
    }
}
