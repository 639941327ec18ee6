//! Configuration file parsing for the server.
//!
//! Loads settings from TOML files including bind address, request timeout,
//! log level, CORS origins, and the analyzer and extractor sections.

use docket_extractor::ExtractorConfig;
use docket_nlp::NlpConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

/// Server configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read config file
    #[error("Failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    /// Failed to parse TOML
    #[error("Failed to parse config TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// A value is out of range
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Server configuration loaded from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Bind address (e.g., "0.0.0.0")
    pub bind_address: String,

    /// Bind port (default: 5000)
    pub bind_port: u16,

    /// Upper bound for one extraction request, in seconds
    pub request_timeout_secs: u64,

    /// Default log filter when `RUST_LOG` is unset
    pub log_level: String,

    /// Allowed CORS origins (empty allows any origin)
    pub cors_allowed_origins: Vec<String>,

    /// Analyzer loading
    pub nlp: NlpConfig,

    /// Pipeline settings
    pub extractor: ExtractorConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            bind_address: "0.0.0.0".to_string(),
            bind_port: 5000,
            request_timeout_secs: 30,
            log_level: "info".to_string(),
            cors_allowed_origins: Vec::new(),
            nlp: NlpConfig::default(),
            extractor: ExtractorConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }

    /// Parse and validate configuration from a TOML string
    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        let config: ServerConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.request_timeout_secs == 0 {
            return Err(ConfigError::Invalid(
                "request_timeout_secs must be greater than 0".to_string(),
            ));
        }
        self.extractor.validate().map_err(ConfigError::Invalid)
    }

    /// Get the full bind address (address:port)
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.bind_address, self.bind_port)
    }

    /// Get the request timeout as a Duration
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = ServerConfig::default();
        assert_eq!(config.bind_addr(), "0.0.0.0:5000");
        assert_eq!(config.request_timeout(), Duration::from_secs(30));
        assert!(config.nlp.enabled);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_toml() {
        let toml = r#"
            bind_address = "127.0.0.1"
            bind_port = 9000
            request_timeout_secs = 5
            log_level = "debug"
            cors_allowed_origins = ["http://localhost:8080"]

            [nlp]
            enabled = false

            [extractor]
            max_text_length = 5000
            duplicate_threshold = 0.9
        "#;

        let config = ServerConfig::from_toml(toml).unwrap();
        assert_eq!(config.bind_addr(), "127.0.0.1:9000");
        assert_eq!(config.request_timeout_secs, 5);
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.cors_allowed_origins, vec!["http://localhost:8080"]);
        assert!(!config.nlp.enabled);
        assert_eq!(config.extractor.max_text_length, 5000);
        assert_eq!(config.extractor.duplicate_threshold, 0.9);
        assert_eq!(config.extractor.min_task_length, 10);
    }

    #[test]
    fn test_empty_toml_is_default() {
        let config = ServerConfig::from_toml("").unwrap();
        assert_eq!(config.bind_port, 5000);
        assert!(config.cors_allowed_origins.is_empty());
    }

    #[test]
    fn test_invalid_values_rejected() {
        assert!(matches!(
            ServerConfig::from_toml("request_timeout_secs = 0"),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            ServerConfig::from_toml("[extractor]\nmax_text_length = 0"),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            ServerConfig::from_toml("bind_port = \"high\""),
            Err(ConfigError::TomlParse(_))
        ));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "bind_port = 6000").unwrap();

        let config = ServerConfig::from_file(file.path()).unwrap();
        assert_eq!(config.bind_port, 6000);

        assert!(matches!(
            ServerConfig::from_file("/nonexistent/docket.toml"),
            Err(ConfigError::FileRead(_))
        ));
    }
}
