use log::debug;
use monetize_core::{GenerationParams, ModelOutput};
use monetize_ports::{GenerationResult, TextGenerator};

use super::DEFAULT_MODEL_ID;

/// Offline generator with a fixed continuation
///
/// Output starts with the prompt, as a causal model's does, and is cut to
/// `max_length` whitespace-separated tokens.
#[derive(Debug, Clone)]
pub struct CannedGenerator {
    model_id: String,
    continuation: String,
    calls: usize,
}

impl CannedGenerator {
    pub fn new(continuation: impl Into<String>) -> Self {
        Self {
            model_id: DEFAULT_MODEL_ID.to_string(),
            continuation: continuation.into(),
            calls: 0,
        }
    }

    pub fn with_model_id(mut self, model_id: impl Into<String>) -> Self {
        self.model_id = model_id.into();
        self
    }

    /// Number of generate calls served
    pub fn calls(&self) -> usize {
        self.calls
    }
}

impl Default for CannedGenerator {
    fn default() -> Self {
        Self::new("raise prices when demand peaks, bundle features into tiers.")
    }
}

impl TextGenerator for CannedGenerator {
    fn model_id(&self) -> &str {
        &self.model_id
    }

    fn generate(
        &mut self,
        prompt: &str,
        params: &GenerationParams,
    ) -> GenerationResult<ModelOutput> {
        self.calls += 1;
        let text = format!("{} {}", prompt, self.continuation)
            .split_whitespace()
            .take(params.max_length)
            .collect::<Vec<_>>()
            .join(" ");
        debug!("CannedGenerator produced {} chars", text.len());
        Ok(ModelOutput::new(self.model_id.clone(), vec![text]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_starts_with_prompt() {
        let mut generator = CannedGenerator::new("try tiers");
        let output = generator
            .generate("Generate:", &GenerationParams::default())
            .unwrap();

        assert_eq!(output.first(), Some("Generate: try tiers"));
        assert_eq!(output.model, "gpt2");
        assert_eq!(generator.calls(), 1);
    }

    #[test]
    fn test_output_truncated_to_max_length() {
        let mut generator = CannedGenerator::new("one two three four");
        let params = GenerationParams {
            max_length: 3,
            ..Default::default()
        };

        let output = generator.generate("prompt", &params).unwrap();
        assert_eq!(output.first(), Some("prompt one two"));
    }
}
