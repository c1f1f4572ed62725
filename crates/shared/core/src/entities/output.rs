use serde::{Deserialize, Serialize};

/// Raw output of a text generator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelOutput {
    /// Identifier of the model that produced the output
    pub model: String,
    /// Generated sequences, prompt included when the backend echoes it
    pub sequences: Vec<String>,
}

impl ModelOutput {
    pub fn new(model: impl Into<String>, sequences: Vec<String>) -> Self {
        Self {
            model: model.into(),
            sequences,
        }
    }

    /// First generated sequence, if the model produced any
    pub fn first(&self) -> Option<&str> {
        self.sequences.first().map(String::as_str)
    }
}
