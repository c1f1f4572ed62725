//! Text generation backends

mod canned;
mod ollama;

pub use canned::CannedGenerator;
pub use ollama::OllamaGenerator;

/// Model identifier the framework is built around
pub const DEFAULT_MODEL_ID: &str = "gpt2";
