//! Core pipeline orchestration

use crate::config::ExtractorConfig;
use crate::error::ExtractorError;
use crate::types::{ExtractionMetadata, ExtractionMode, ExtractionOutcome};
use crate::{dedup, lists, patterns, scoring, sentences, Linguistics};
use std::time::Instant;
use tracing::{debug, info};

/// The TaskExtractor turns document text into ranked task suggestions
///
/// Holds no per-call state; one instance can serve concurrent calls.
#[derive(Debug, Clone)]
pub struct TaskExtractor {
    linguistics: Linguistics,
    config: ExtractorConfig,
}

impl TaskExtractor {
    /// Create a new TaskExtractor
    pub fn new(linguistics: Linguistics, config: ExtractorConfig) -> Result<Self, ExtractorError> {
        config.validate().map_err(ExtractorError::Config)?;
        Ok(Self {
            linguistics,
            config,
        })
    }

    /// The capability handle in use
    pub fn linguistics(&self) -> &Linguistics {
        &self.linguistics
    }

    /// Extract ranked suggestions from text
    pub fn extract(&self, text: &str) -> Result<ExtractionOutcome, ExtractorError> {
        self.run(text, None)
    }

    /// Extract, giving up with [`ExtractorError::DeadlineExceeded`] once
    /// `deadline` has passed
    ///
    /// The deadline is checked between stages and during deduplication.
    pub fn extract_before(
        &self,
        text: &str,
        deadline: Instant,
    ) -> Result<ExtractionOutcome, ExtractorError> {
        self.run(text, Some(deadline))
    }

    fn run(
        &self,
        text: &str,
        deadline: Option<Instant>,
    ) -> Result<ExtractionOutcome, ExtractorError> {
        let start_time = Instant::now();

        if text.trim().is_empty() {
            debug!("Blank input, nothing to extract");
            return Ok(ExtractionOutcome {
                suggestions: Vec::new(),
                metadata: ExtractionMetadata::empty(),
            });
        }

        let length = text.chars().count();
        if length > self.config.max_text_length {
            return Err(ExtractorError::TextTooLong(
                length,
                self.config.max_text_length,
            ));
        }

        let mode = if self.linguistics.is_available() {
            ExtractionMode::Capable
        } else {
            ExtractionMode::Degraded
        };

        debug!("Starting {} extraction, text length {}", mode, length);

        let min_length = self.config.min_task_length;
        let mut candidates = lists::extract(text, &self.linguistics, min_length);
        candidates.extend(sentences::extract(text, &self.linguistics, min_length));
        candidates.extend(patterns::extract(text));

        check_deadline(deadline)?;

        let raw_candidates = candidates.len();
        let per_method = ExtractionMetadata::count_methods(&candidates);

        scoring::score_all(&mut candidates, &self.linguistics);
        let mut suggestions = dedup::deduplicate(
            candidates,
            &self.linguistics,
            self.config.duplicate_threshold,
            deadline,
        )?;
        scoring::rank(&mut suggestions);

        let duplicates_removed = raw_candidates - suggestions.len();
        let processing_time_ms = start_time.elapsed().as_millis() as u64;

        info!(
            "Extraction complete ({}): {} candidates, {} duplicates removed, {} returned in {}ms",
            mode,
            raw_candidates,
            duplicates_removed,
            suggestions.len(),
            processing_time_ms
        );

        Ok(ExtractionOutcome {
            suggestions,
            metadata: ExtractionMetadata {
                mode,
                raw_candidates,
                per_method,
                duplicates_removed,
                processing_time_ms,
            },
        })
    }
}

fn check_deadline(deadline: Option<Instant>) -> Result<(), ExtractorError> {
    match deadline {
        Some(deadline) if Instant::now() >= deadline => Err(ExtractorError::DeadlineExceeded),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn degraded_extractor() -> TaskExtractor {
        TaskExtractor::new(Linguistics::Absent, ExtractorConfig::default()).unwrap()
    }

    #[test]
    fn test_extract_blank() {
        let extractor = degraded_extractor();
        for text in ["", "   ", "\n\t\n"] {
            let outcome = extractor.extract(text).unwrap();
            assert!(outcome.is_empty());
            assert_eq!(outcome.metadata.mode, ExtractionMode::EmptyInput);
        }
    }

    #[test]
    fn test_extract_text_too_long() {
        let extractor = degraded_extractor();
        let long_text = "a".repeat(100_001);
        let result = extractor.extract(&long_text);
        assert!(matches!(
            result,
            Err(ExtractorError::TextTooLong(100_001, 100_000))
        ));
    }

    #[test]
    fn test_extract_before_passed_deadline() {
        let extractor = degraded_extractor();
        let result = extractor.extract_before("1. Write the report", Instant::now());
        assert!(matches!(result, Err(ExtractorError::DeadlineExceeded)));

        // blank input never does any work
        assert!(extractor.extract_before("  ", Instant::now()).unwrap().is_empty());
    }

    #[test]
    fn test_extract_before_future_deadline() {
        let extractor = degraded_extractor();
        let deadline = Instant::now() + std::time::Duration::from_secs(60);
        let outcome = extractor.extract_before("1. Write the report", deadline).unwrap();
        assert_eq!(outcome.len(), 1);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = ExtractorConfig {
            duplicate_threshold: -1.0,
            ..Default::default()
        };
        assert!(matches!(
            TaskExtractor::new(Linguistics::Absent, config),
            Err(ExtractorError::Config(_))
        ));
    }

    #[test]
    fn test_metadata_counts() {
        let extractor = degraded_extractor();
        let text = "1. Fix the login bug\n2. Fix the login bugs\n\nTask 3: deploy the service";
        let outcome = extractor.extract(text).unwrap();

        assert_eq!(outcome.metadata.mode, ExtractionMode::Degraded);
        assert_eq!(outcome.metadata.raw_candidates, 3);
        assert_eq!(outcome.metadata.per_method.get("NUMBERED_LIST"), Some(&2));
        assert_eq!(outcome.metadata.per_method.get("PATTERN_MATCHING"), Some(&1));
        assert_eq!(outcome.metadata.duplicates_removed, 1);
        assert_eq!(outcome.len(), 2);
    }
}
