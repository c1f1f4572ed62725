//! Framework configuration

use monetize_core::GenerationParams;
use serde::{Deserialize, Serialize};

/// Prompt handed to the model on every generation run
pub const DEFAULT_PROMPT: &str = "Generate monetization strategies:";

/// Framework configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameworkConfig {
    /// Prompt for the text generator
    #[serde(default = "default_prompt")]
    pub prompt: String,

    /// Sampling parameters
    #[serde(default)]
    pub generation: GenerationParams,
}

fn default_prompt() -> String {
    DEFAULT_PROMPT.to_string()
}

impl Default for FrameworkConfig {
    fn default() -> Self {
        Self {
            prompt: default_prompt(),
            generation: GenerationParams::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_json_is_default() {
        let config: FrameworkConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, FrameworkConfig::default());
        assert_eq!(config.prompt, "Generate monetization strategies:");
    }
}
