//! Error types for the Extractor

use thiserror::Error;

/// Errors that can occur during extraction
#[derive(Error, Debug)]
pub enum ExtractorError {
    /// Text exceeds maximum length
    #[error("Text too long: {0} chars (max: {1})")]
    TextTooLong(usize, usize),

    /// The caller's deadline passed before extraction finished
    #[error("Extraction deadline exceeded")]
    DeadlineExceeded,

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
