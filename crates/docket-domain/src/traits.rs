//! Trait definitions for external interactions
//!
//! These traits define the boundaries between domain logic and infrastructure.
//! Infrastructure implementations live in other crates.

use crate::{Sentence, Token};

/// Pairwise similarity prepared for many comparisons within one call
pub type SimilarityFn<'a> = Box<dyn FnMut(&str, &str) -> f64 + 'a>;

/// Trait for linguistic analysis engines
///
/// Implemented by the infrastructure layer (docket-nlp). An analyzer is
/// loaded once per process and then shared read-only across concurrent
/// extraction calls, hence the `Send + Sync` bound.
pub trait LinguisticAnalyzer: Send + Sync {
    /// Human-readable engine name (for logs)
    fn name(&self) -> &str;

    /// Segment text into annotated sentences
    fn sentences(&self, text: &str) -> Vec<Sentence>;

    /// Tokenize and tag text as a flat token stream
    fn tokens(&self, text: &str) -> Vec<Token> {
        self.sentences(text)
            .into_iter()
            .flat_map(|s| s.tokens)
            .collect()
    }

    /// Semantic similarity of two texts in [0, 1]
    fn similarity(&self, a: &str, b: &str) -> f64;

    /// Similarity function for a batch of comparisons
    ///
    /// Analyzers that do per-text work should override this and reuse it
    /// across calls. Must agree with [`LinguisticAnalyzer::similarity`].
    fn similarity_fn(&self) -> SimilarityFn<'_> {
        Box::new(move |a: &str, b: &str| self.similarity(a, b))
    }
}
