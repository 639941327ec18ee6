//! Docket Extractor
//!
//! Converts unstructured document text (typically OCR output) into ranked,
//! deduplicated task suggestions.
//!
//! # Architecture
//!
//! ```text
//! Text → lists ┐
//!      → sentences (analyzer only) ├→ score → dedup → rank → suggestions
//!      → patterns ┘
//! ```
//!
//! # Modes
//!
//! - **Capable**: a linguistic analyzer is loaded. List items are gated with
//!   a verb check, sentences are mined for root verbs and scores get verb
//!   and linguistic bonuses.
//! - **Degraded**: no analyzer. Lists and explicit task markers only, with
//!   edit-distance similarity for deduplication.
//!
//! # Example Usage
//!
//! ```
//! use docket_extractor::{ExtractorConfig, Linguistics, TaskExtractor};
//!
//! let extractor = TaskExtractor::new(Linguistics::Absent, ExtractorConfig::default()).unwrap();
//! let outcome = extractor
//!     .extract("1. Fix the login bug\n2. Deploy the hotfix by 12/01/2024")
//!     .unwrap();
//!
//! assert_eq!(outcome.suggestions.len(), 2);
//! assert_eq!(outcome.suggestions[0].title, "Deploy the hotfix by 12/01/2024");
//! ```

#![warn(missing_docs)]

mod config;
pub mod dedup;
mod error;
mod extractor;
pub mod keywords;
mod linguistics;
pub mod lists;
pub mod metadata;
pub mod patterns;
pub mod scoring;
pub mod sentences;
mod types;


pub use config::ExtractorConfig;
pub use error::ExtractorError;
pub use extractor::TaskExtractor;
pub use linguistics::Linguistics;
pub use types::{ExtractionMetadata, ExtractionMode, ExtractionOutcome};
