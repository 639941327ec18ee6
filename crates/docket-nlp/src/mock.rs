//! Scripted analyzer for deterministic testing

use crate::{split_sentences, tokenize};
use docket_domain::{Dependency, LinguisticAnalyzer, PartOfSpeech, Sentence, Token};
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};

/// Mock analyzer for deterministic testing
///
/// Words registered with [`MockAnalyzer::with_verbs`] are tagged as verbs,
/// every other word as a noun. Similarity scores can be scripted per pair;
/// unscripted pairs score 1.0 when equal (ignoring case) and 0.0 otherwise.
///
/// # Examples
///
/// ```
/// use docket_nlp::MockAnalyzer;
/// use docket_domain::LinguisticAnalyzer;
///
/// let mut analyzer = MockAnalyzer::new().with_verbs(["ship"]);
/// analyzer.add_similarity("ship it", "ship this", 0.9);
///
/// assert!(analyzer.tokens("ship it")[0].is_verb());
/// assert_eq!(analyzer.similarity("ship this", "ship it"), 0.9);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MockAnalyzer {
    verbs: HashSet<String>,
    similarities: HashMap<(String, String), f64>,
    call_count: Arc<Mutex<usize>>,
}

impl MockAnalyzer {
    /// Create a mock that knows no verbs
    pub fn new() -> Self {
        Self::default()
    }

    /// Register words to be tagged as verbs
    pub fn with_verbs<I, S>(mut self, verbs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.verbs
            .extend(verbs.into_iter().map(|v| v.as_ref().to_lowercase()));
        self
    }

    /// Script the similarity of a pair (order-insensitive)
    pub fn add_similarity(&mut self, a: &str, b: &str, score: f64) {
        self.similarities.insert(pair_key(a, b), score);
    }

    /// Number of analyzer calls made so far
    pub fn call_count(&self) -> usize {
        self.call_count.lock().map(|count| *count).unwrap_or(0)
    }

    fn record_call(&self) {
        if let Ok(mut count) = self.call_count.lock() {
            *count += 1;
        }
    }

    fn tag(&self, sentence: &str) -> Vec<Token> {
        let mut tokens: Vec<Token> = tokenize(sentence)
            .into_iter()
            .enumerate()
            .map(|(index, text)| {
                let lemma = text.to_lowercase();
                let pos = if !text.chars().any(char::is_alphanumeric) {
                    PartOfSpeech::Punctuation
                } else if self.verbs.contains(&lemma) {
                    PartOfSpeech::Verb
                } else {
                    PartOfSpeech::Noun
                };
                Token {
                    text,
                    lemma,
                    pos,
                    dep: Dependency::Other,
                    index,
                }
            })
            .collect();

        if let Some(root) = tokens.iter_mut().find(|t| t.is_verb()) {
            root.dep = Dependency::Root;
        }
        tokens
    }
}

fn pair_key(a: &str, b: &str) -> (String, String) {
    let (a, b) = (a.trim().to_lowercase(), b.trim().to_lowercase());
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

impl LinguisticAnalyzer for MockAnalyzer {
    fn name(&self) -> &str {
        "mock"
    }

    fn sentences(&self, text: &str) -> Vec<Sentence> {
        self.record_call();
        split_sentences(text)
            .into_iter()
            .map(|text| Sentence {
                tokens: self.tag(&text),
                text,
            })
            .collect()
    }

    fn similarity(&self, a: &str, b: &str) -> f64 {
        self.record_call();
        let key = pair_key(a, b);
        if let Some(score) = self.similarities.get(&key) {
            return *score;
        }
        if key.0 == key.1 {
            1.0
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbs_are_tagged() {
        let analyzer = MockAnalyzer::new().with_verbs(["Deploy"]);
        let tokens = analyzer.tokens("deploy the build");
        assert!(tokens[0].is_verb());
        assert_eq!(tokens[0].dep, Dependency::Root);
        assert_eq!(tokens[1].pos, PartOfSpeech::Noun);
    }

    #[test]
    fn test_unscripted_similarity() {
        let analyzer = MockAnalyzer::new();
        assert_eq!(analyzer.similarity("Same", "same "), 1.0);
        assert_eq!(analyzer.similarity("one", "two"), 0.0);
    }

    #[test]
    fn test_call_count() {
        let analyzer = MockAnalyzer::new();
        assert_eq!(analyzer.call_count(), 0);

        analyzer.sentences("One. Two.");
        analyzer.similarity("a", "b");
        assert_eq!(analyzer.call_count(), 2);

        // Clones share the counter
        let clone = analyzer.clone();
        clone.similarity("a", "b");
        assert_eq!(analyzer.call_count(), 3);
    }
}
