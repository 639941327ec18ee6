//! Docket Linguistic Analyzers
//!
//! Pluggable implementations of the `LinguisticAnalyzer` trait from
//! `docket-domain`.
//!
//! # Analyzers
//!
//! - `LexiconAnalyzer`: Deterministic rule-based engine (sentence
//!   segmentation, lexicon POS tagging, shallow dependency labels,
//!   content-word cosine similarity)
//! - `MockAnalyzer`: Fully scripted analyzer for tests
//!
//! # Loading
//!
//! An analyzer is loaded once per process with [`load_analyzer`]. A load
//! failure is reported to the caller, which is expected to fall back to
//! degraded (pattern-only) extraction for the rest of the process lifetime.
//!
//! # Examples
//!
//! ```
//! use docket_nlp::LexiconAnalyzer;
//! use docket_domain::LinguisticAnalyzer;
//!
//! let analyzer = LexiconAnalyzer::new();
//! let sentences = analyzer.sentences("Write the report. Then review it.");
//! assert_eq!(sentences.len(), 2);
//! assert!(sentences[0].root_verb().is_some());
//! ```

#![warn(missing_docs)]

pub mod config;
mod error;
mod lexicon;
pub mod mock;
mod segment;
mod similarity;
mod tagger;

use docket_domain::{LinguisticAnalyzer, Sentence, SimilarityFn};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, info};

pub use config::NlpConfig;
pub use error::NlpError;
pub use lexicon::Lexicon;
pub use mock::MockAnalyzer;
pub use segment::{split_sentences, tokenize};
pub use similarity::{content_similarity, ContentBag};

/// Rule-based analyzer backed by a word lexicon
///
/// Deterministic and allocation-light; safe to share across threads.
#[derive(Debug, Clone)]
pub struct LexiconAnalyzer {
    lexicon: Lexicon,
}

impl LexiconAnalyzer {
    /// Create an analyzer with the built-in lexicon
    pub fn new() -> Self {
        Self {
            lexicon: Lexicon::builtin(),
        }
    }

    /// Create an analyzer with a custom lexicon
    pub fn with_lexicon(lexicon: Lexicon) -> Self {
        Self { lexicon }
    }
}

impl Default for LexiconAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl LinguisticAnalyzer for LexiconAnalyzer {
    fn name(&self) -> &str {
        "lexicon"
    }

    fn sentences(&self, text: &str) -> Vec<Sentence> {
        split_sentences(text)
            .into_iter()
            .map(|sentence| {
                let tokens = tagger::tag(&self.lexicon, &tokenize(&sentence));
                Sentence {
                    text: sentence,
                    tokens,
                }
            })
            .collect()
    }

    fn similarity(&self, a: &str, b: &str) -> f64 {
        content_similarity(&self.lexicon, a, b)
    }

    /// Tags each distinct text once per returned function
    fn similarity_fn(&self) -> SimilarityFn<'_> {
        let mut bags: HashMap<String, ContentBag> = HashMap::new();
        Box::new(move |a: &str, b: &str| {
            for text in [a, b] {
                if !bags.contains_key(text) {
                    bags.insert(text.to_string(), ContentBag::new(&self.lexicon, text));
                }
            }
            match (bags.get(a), bags.get(b)) {
                (Some(bag_a), Some(bag_b)) => bag_a.similarity(bag_b),
                _ => 0.0,
            }
        })
    }
}

/// Load the analyzer described by the configuration
///
/// Returns `Ok(None)` when analysis is disabled, and an error when a
/// configured lexicon cannot be loaded. Call once at startup.
pub fn load_analyzer(
    config: &NlpConfig,
) -> Result<Option<Arc<dyn LinguisticAnalyzer>>, NlpError> {
    if !config.enabled {
        info!("Linguistic analysis disabled by configuration");
        return Ok(None);
    }

    let mut lexicon = Lexicon::builtin();
    if let Some(path) = &config.lexicon_path {
        let added = lexicon.extend_from_file(path)?;
        debug!("Loaded {} extra verbs from {}", added, path.display());
    }

    info!(
        "Lexicon analyzer ready ({} verbs)",
        lexicon.verb_count()
    );
    Ok(Some(Arc::new(LexiconAnalyzer::with_lexicon(lexicon))))
}
