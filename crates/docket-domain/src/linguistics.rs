//! Linguistic annotation types produced by a [`crate::LinguisticAnalyzer`]

/// Coarse part-of-speech tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PartOfSpeech {
    /// Main verb
    Verb,
    /// Auxiliary or modal verb ("is", "should")
    Auxiliary,
    /// Common noun
    Noun,
    /// Proper noun
    ProperNoun,
    /// Pronoun
    Pronoun,
    /// Determiner ("the", "a")
    Determiner,
    /// Adjective
    Adjective,
    /// Adverb
    Adverb,
    /// Preposition / adposition
    Adposition,
    /// Coordinating or subordinating conjunction
    Conjunction,
    /// Number
    Numeral,
    /// Punctuation
    Punctuation,
    /// Anything else
    Other,
}

/// Syntactic role of a token within its sentence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dependency {
    /// Head of the sentence
    Root,
    /// Direct object of the root
    DirectObject,
    /// Nominal subject of the root
    Subject,
    /// Any other relation
    Other,
}

/// A single annotated token
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// Surface text
    pub text: String,
    /// Lower-cased base form
    pub lemma: String,
    /// Part-of-speech tag
    pub pos: PartOfSpeech,
    /// Dependency label
    pub dep: Dependency,
    /// Position within the sentence (0-based)
    pub index: usize,
}

impl Token {
    /// Whether the token is tagged as a main verb
    pub fn is_verb(&self) -> bool {
        self.pos == PartOfSpeech::Verb
    }
}

/// A segmented, annotated sentence
#[derive(Debug, Clone, PartialEq)]
pub struct Sentence {
    /// Sentence text, trimmed
    pub text: String,
    /// Tokens in order
    pub tokens: Vec<Token>,
}

impl Sentence {
    /// The root verb, if the sentence has one
    pub fn root_verb(&self) -> Option<&Token> {
        self.tokens
            .iter()
            .find(|t| t.is_verb() && t.dep == Dependency::Root)
    }

    /// The direct object, if one was labelled
    pub fn direct_object(&self) -> Option<&Token> {
        self.tokens.iter().find(|t| t.dep == Dependency::DirectObject)
    }
}
