//! Configuration for analyzer loading

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Configuration for the linguistic analyzer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NlpConfig {
    /// Load an analyzer at startup (false forces degraded mode)
    #[serde(default = "default_enabled")]
    pub enabled: bool,

    /// Optional file of extra verbs, one per line (`#` starts a comment)
    #[serde(default)]
    pub lexicon_path: Option<PathBuf>,
}

fn default_enabled() -> bool {
    true
}

impl Default for NlpConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            lexicon_path: None,
        }
    }
}
