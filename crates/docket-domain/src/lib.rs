//! Docket Domain Layer
//!
//! This crate contains the domain model shared by every other Docket crate.
//! It has ZERO external dependencies and defines the value objects and trait
//! interfaces that the extraction pipeline and its collaborators depend upon.
//!
//! ## Key Concepts
//!
//! - **TaskSuggestion**: A candidate task inferred from document text
//! - **Priority**: Ordered urgency levels (critical → low)
//! - **ExtractionMethod**: Which strategy produced a suggestion
//! - **ConfidenceScore**: Bounded [0, 1] ranking heuristic
//! - **LinguisticAnalyzer**: Pluggable tokenization/tagging/similarity engine
//!
//! ## Architecture
//!
//! - No external crate dependencies
//! - Pure data and trait definitions only
//! - Analyzer implementations live in `docket-nlp`
//! - The pipeline lives in `docket-extractor`

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod confidence;
pub mod linguistics;
pub mod method;
pub mod priority;
pub mod suggestion;
pub mod traits;

// Re-exports for convenience
pub use confidence::ConfidenceScore;
pub use linguistics::{Dependency, PartOfSpeech, Sentence, Token};
pub use method::ExtractionMethod;
pub use priority::Priority;
pub use suggestion::{TaskSuggestion, MAX_SNIPPET_CHARS, MAX_TITLE_CHARS};
pub use traits::{LinguisticAnalyzer, SimilarityFn};
