//! Content-word similarity
//!
//! Each text becomes a bag of content lemmas (nouns, verbs, adjectives,
//! adverbs, numerals); similarity is the cosine of the two count vectors.

use crate::{tagger, tokenize, Lexicon};
use docket_domain::PartOfSpeech;
use std::collections::BTreeMap;

/// Cosine similarity of the content lemmas of `a` and `b`, in [0, 1]
///
/// Texts without any content words are similar only when they are equal
/// ignoring case and surrounding whitespace.
pub fn content_similarity(lexicon: &Lexicon, a: &str, b: &str) -> f64 {
    ContentBag::new(lexicon, a).similarity(&ContentBag::new(lexicon, b))
}

/// Content lemmas of one text, ready for repeated comparison
#[derive(Debug, Clone)]
pub struct ContentBag {
    counts: BTreeMap<String, f64>,
    magnitude: f64,
    /// Trimmed, ASCII-lowercased text; kept only when there are no content words
    literal: Option<String>,
}

impl ContentBag {
    /// Tokenize, tag and count the content lemmas of `text`
    pub fn new(lexicon: &Lexicon, text: &str) -> Self {
        let mut counts = BTreeMap::new();
        for token in tagger::tag(lexicon, &tokenize(text)) {
            if is_content(token.pos) {
                *counts.entry(token.lemma).or_insert(0.0) += 1.0;
            }
        }

        let magnitude = counts.values().map(|x| x * x).sum::<f64>().sqrt();
        let literal = counts
            .is_empty()
            .then(|| text.trim().to_ascii_lowercase());

        Self {
            counts,
            magnitude,
            literal,
        }
    }

    /// Cosine similarity with another bag, in [0, 1]
    pub fn similarity(&self, other: &ContentBag) -> f64 {
        if let (Some(a), Some(b)) = (&self.literal, &other.literal) {
            return if a == b { 1.0 } else { 0.0 };
        }
        if self.magnitude == 0.0 || other.magnitude == 0.0 {
            return 0.0;
        }

        let dot_product: f64 = self
            .counts
            .iter()
            .filter_map(|(term, x)| other.counts.get(term).map(|y| x * y))
            .sum();

        (dot_product / (self.magnitude * other.magnitude)).clamp(0.0, 1.0)
    }
}

fn is_content(pos: PartOfSpeech) -> bool {
    matches!(
        pos,
        PartOfSpeech::Verb
            | PartOfSpeech::Noun
            | PartOfSpeech::ProperNoun
            | PartOfSpeech::Adjective
            | PartOfSpeech::Adverb
            | PartOfSpeech::Numeral
    )
}
