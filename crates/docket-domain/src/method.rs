//! Extraction method module - provenance of a suggestion

/// The strategy that produced a suggestion
///
/// A closed set: scoring consults [`ExtractionMethod::is_linguistic`] and
/// [`ExtractionMethod::is_dependency_parsing`] rather than inspecting tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExtractionMethod {
    /// Numbered list item, gated with linguistic analysis available
    NlpNumberedList,

    /// Bulleted list item, gated with linguistic analysis available
    NlpBulletList,

    /// Sentence flagged by root-verb / dependency cues
    DependencyParsing,

    /// Explicit marker such as "Task 3:" or "Item #2"
    PatternMatching,

    /// Bulleted list item found without linguistic analysis
    BulletPattern,

    /// Numbered list item found without linguistic analysis
    NumberedList,
}

impl ExtractionMethod {
    /// Get the method tag as used on the wire
    pub fn as_str(&self) -> &'static str {
        match self {
            ExtractionMethod::NlpNumberedList => "NLP_NUMBERED_LIST",
            ExtractionMethod::NlpBulletList => "NLP_BULLET_LIST",
            ExtractionMethod::DependencyParsing => "NLP_DEPENDENCY_PARSING",
            ExtractionMethod::PatternMatching => "PATTERN_MATCHING",
            ExtractionMethod::BulletPattern => "BULLET_PATTERN",
            ExtractionMethod::NumberedList => "NUMBERED_LIST",
        }
    }

    /// Whether the strategy relied on the linguistic capability
    pub fn is_linguistic(&self) -> bool {
        matches!(
            self,
            ExtractionMethod::NlpNumberedList
                | ExtractionMethod::NlpBulletList
                | ExtractionMethod::DependencyParsing
        )
    }

    /// Whether this is the sentence-level dependency strategy
    pub fn is_dependency_parsing(&self) -> bool {
        matches!(self, ExtractionMethod::DependencyParsing)
    }
}

impl std::fmt::Display for ExtractionMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
