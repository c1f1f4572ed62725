use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Timestamp in UTC
pub type Timestamp = DateTime<Utc>;

/// Sampling parameters handed to a text generator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationParams {
    /// Maximum length of a generated sequence, prompt included
    pub max_length: usize,
    /// Sample from the distribution instead of greedy decoding
    pub do_sample: bool,
    /// Sampling temperature, ignored when `do_sample` is false
    pub temperature: f32,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            max_length: 500,
            do_sample: true,
            temperature: 1.0,
        }
    }
}

impl GenerationParams {
    /// Temperature actually used by a backend: zero for greedy decoding
    pub fn effective_temperature(&self) -> f32 {
        if self.do_sample { self.temperature } else { 0.0 }
    }
}
