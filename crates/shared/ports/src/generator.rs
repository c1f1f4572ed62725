use monetize_core::{GenerationParams, ModelOutput};

use crate::error::GenerationResult;

/// Port for pretrained text generation models
///
/// An implementation owns both the model and its tokenizer; callers hand in
/// a prompt and receive decoded sequences.
pub trait TextGenerator: Send {
    /// Identifier of the pretrained model (e.g. `gpt2`)
    fn model_id(&self) -> &str;

    /// Generate continuations of `prompt`
    fn generate(&mut self, prompt: &str, params: &GenerationParams)
    -> GenerationResult<ModelOutput>;
}
