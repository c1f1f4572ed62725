//! Configuration loading for the runner
//!
//! Supports JSON configuration files for:
//! - Framework settings (prompt, sampling parameters)
//! - The market data feed (file or inline snapshot)
//! - The text generation backend (canned or Ollama)
//! - Risk rules

use monetize_adapters::{DEFAULT_MODEL_ID, OllamaGenerator, RiskRules};
use monetize_core::MarketData;
use monetize_framework::FrameworkConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Root configuration for the runner
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RunnerConfig {
    /// Framework settings
    #[serde(default)]
    pub framework: FrameworkConfig,

    /// Market data source
    #[serde(default)]
    pub feed: FeedConfig,

    /// Text generation backend
    #[serde(default)]
    pub generator: GeneratorConfig,

    /// Rules for the risk assessor
    #[serde(default)]
    pub risk: RiskRules,
}

impl RunnerConfig {
    /// Load configuration from a JSON file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| ConfigError::Io {
            path: path.as_ref().display().to_string(),
            error: e.to_string(),
        })?;

        Self::from_json(&content)
    }

    /// Parse configuration from JSON string
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))
    }
}

/// Market data source
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FeedConfig {
    /// Re-read a JSON object from disk on every execution
    File { path: PathBuf },
    /// Fixed snapshot embedded in the configuration
    Inline { data: MarketData },
}

impl Default for FeedConfig {
    fn default() -> Self {
        FeedConfig::Inline {
            data: MarketData::with_trends([1.0, 2.0, 3.0]),
        }
    }
}

/// Text generation backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GeneratorConfig {
    /// Offline backend with a fixed continuation
    Canned {
        #[serde(default)]
        text: Option<String>,
        #[serde(default = "default_model")]
        model: String,
    },
    /// Ollama-compatible HTTP server
    Ollama {
        #[serde(default = "default_base_url")]
        base_url: String,
        #[serde(default = "default_model")]
        model: String,
        #[serde(default = "default_timeout_secs")]
        timeout_secs: u64,
    },
}

fn default_model() -> String {
    DEFAULT_MODEL_ID.to_string()
}

fn default_base_url() -> String {
    OllamaGenerator::DEFAULT_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    120
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig::Canned {
            text: None,
            model: default_model(),
        }
    }
}

/// Configuration errors
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {error}")]
    Io { path: String, error: String },

    #[error("Failed to parse config: {0}")]
    Parse(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_run_offline() {
        let config = RunnerConfig::default();
        assert!(matches!(config.generator, GeneratorConfig::Canned { .. }));
        assert!(matches!(config.feed, FeedConfig::Inline { .. }));
    }

    #[test]
    fn test_ollama_fields_default() {
        let config = RunnerConfig::from_json(r#"{"generator": {"type": "ollama"}}"#).unwrap();
        assert_eq!(
            config.generator,
            GeneratorConfig::Ollama {
                base_url: "http://localhost:11434".to_string(),
                model: "gpt2".to_string(),
                timeout_secs: 120,
            }
        );
    }

    #[test]
    fn test_unknown_generator_type_is_parse_error() {
        let err = RunnerConfig::from_json(r#"{"generator": {"type": "torch"}}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
