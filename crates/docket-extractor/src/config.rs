//! Configuration for the Extractor

use serde::{Deserialize, Serialize};

/// Configuration for the Extractor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractorConfig {
    /// Maximum input text length (characters)
    pub max_text_length: usize,

    /// Title similarity above which two suggestions are duplicates
    pub duplicate_threshold: f64,

    /// Minimum span length (characters) for the task-likeness gate
    pub min_task_length: usize,
}

impl ExtractorConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.max_text_length == 0 {
            return Err("max_text_length must be greater than 0".to_string());
        }
        if !(0.0..=1.0).contains(&self.duplicate_threshold) {
            return Err(format!(
                "duplicate_threshold {} out of range [0.0, 1.0]",
                self.duplicate_threshold
            ));
        }
        if self.min_task_length > self.max_text_length {
            return Err("min_task_length cannot exceed max_text_length".to_string());
        }
        Ok(())
    }
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            max_text_length: 100_000,
            duplicate_threshold: 0.8,
            min_task_length: 10,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = ExtractorConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.max_text_length, 100_000);
        assert_eq!(config.duplicate_threshold, 0.8);
        assert_eq!(config.min_task_length, 10);
    }

    #[test]
    fn test_invalid_max_text_length() {
        let config = ExtractorConfig {
            max_text_length: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_threshold() {
        let config = ExtractorConfig {
            duplicate_threshold: 1.5,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_min_length_above_max() {
        let config = ExtractorConfig {
            max_text_length: 8,
            min_task_length: 10,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
