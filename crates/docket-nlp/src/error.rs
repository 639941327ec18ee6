//! Error types for analyzer loading

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading an analyzer
#[derive(Error, Debug)]
pub enum NlpError {
    /// Lexicon file could not be read
    #[error("Failed to read lexicon {path}: {source}")]
    LexiconRead {
        /// Path that was requested
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Lexicon file contained no usable entries
    #[error("Lexicon {0} contains no entries")]
    EmptyLexicon(PathBuf),
}
