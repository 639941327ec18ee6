//! Result types for extraction

use docket_domain::TaskSuggestion;
use std::collections::BTreeMap;
use std::fmt;

/// Which pipeline ran for a call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractionMode {
    /// Blank input; nothing ran
    EmptyInput,
    /// Lists, sentences and patterns with analyzer bonuses
    Capable,
    /// Lists (fallback tags) and patterns only
    Degraded,
}

impl fmt::Display for ExtractionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ExtractionMode::EmptyInput => "empty",
            ExtractionMode::Capable => "capable",
            ExtractionMode::Degraded => "degraded",
        };
        f.write_str(name)
    }
}

/// Result of an extraction call
#[derive(Debug, Clone)]
pub struct ExtractionOutcome {
    /// Ranked, deduplicated suggestions
    pub suggestions: Vec<TaskSuggestion>,

    /// Metadata about the extraction
    pub metadata: ExtractionMetadata,
}

/// Metadata about an extraction call
#[derive(Debug, Clone)]
pub struct ExtractionMetadata {
    /// Pipeline that ran
    pub mode: ExtractionMode,

    /// Candidates produced before deduplication
    pub raw_candidates: usize,

    /// Candidates produced per method, before deduplication
    pub per_method: BTreeMap<&'static str, usize>,

    /// Candidates removed as near-duplicates
    pub duplicates_removed: usize,

    /// Processing time in milliseconds
    pub processing_time_ms: u64,
}

impl ExtractionMetadata {
    pub(crate) fn empty() -> Self {
        Self {
            mode: ExtractionMode::EmptyInput,
            raw_candidates: 0,
            per_method: BTreeMap::new(),
            duplicates_removed: 0,
            processing_time_ms: 0,
        }
    }

    pub(crate) fn count_methods(candidates: &[TaskSuggestion]) -> BTreeMap<&'static str, usize> {
        let mut counts = BTreeMap::new();
        for candidate in candidates {
            *counts.entry(candidate.method.as_str()).or_insert(0) += 1;
        }
        counts
    }
}

impl ExtractionOutcome {
    /// Number of suggestions returned
    pub fn len(&self) -> usize {
        self.suggestions.len()
    }

    /// Whether no suggestions were returned
    pub fn is_empty(&self) -> bool {
        self.suggestions.is_empty()
    }
}
