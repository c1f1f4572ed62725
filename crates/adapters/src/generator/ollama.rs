use log::{debug, info};
use monetize_core::{GenerationParams, ModelOutput};
use monetize_ports::{GenerationError, GenerationResult, TextGenerator};
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Request body for `/api/generate`
#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    stream: bool,
    options: GenerateOptions,
}

#[derive(Debug, Serialize)]
struct GenerateOptions {
    num_predict: usize,
    temperature: f32,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    response: String,
    #[serde(default)]
    eval_count: Option<u64>,
}

/// Generator backed by an Ollama-compatible HTTP server
pub struct OllamaGenerator {
    client: Client,
    base_url: String,
    model: String,
}

impl OllamaGenerator {
    /// Default local server address
    pub const DEFAULT_BASE_URL: &'static str = "http://localhost:11434";

    pub fn new(base_url: impl Into<String>, model: impl Into<String>) -> GenerationResult<Self> {
        Self::with_timeout(base_url, model, Duration::from_secs(120))
    }

    pub fn with_timeout(
        base_url: impl Into<String>,
        model: impl Into<String>,
        timeout: Duration,
    ) -> GenerationResult<Self> {
        let model = model.into();
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| GenerationError::Load {
                model: model.clone(),
                reason: e.to_string(),
            })?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            model,
        })
    }

    pub fn endpoint_url(&self) -> String {
        format!("{}/api/generate", self.base_url)
    }

    fn request_body<'a>(&'a self, prompt: &'a str, params: &GenerationParams) -> GenerateRequest<'a> {
        GenerateRequest {
            model: &self.model,
            prompt,
            stream: false,
            options: GenerateOptions {
                num_predict: params.max_length,
                temperature: params.effective_temperature(),
            },
        }
    }
}

impl TextGenerator for OllamaGenerator {
    fn model_id(&self) -> &str {
        &self.model
    }

    fn generate(
        &mut self,
        prompt: &str,
        params: &GenerationParams,
    ) -> GenerationResult<ModelOutput> {
        debug!("Sending generate request to {}", self.endpoint_url());

        let response = self
            .client
            .post(self.endpoint_url())
            .json(&self.request_body(prompt, params))
            .send()
            .map_err(|e| GenerationError::Request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().unwrap_or_default();
            return Err(GenerationError::Request(format!(
                "{} returned {}: {}",
                self.base_url, status, error_text
            )));
        }

        let data: GenerateResponse = response
            .json()
            .map_err(|e| GenerationError::Response(e.to_string()))?;

        if let Some(tokens) = data.eval_count {
            info!("Model {} generated {} tokens", self.model, tokens);
        }

        Ok(ModelOutput::new(
            self.model.clone(),
            vec![format!("{}{}", prompt, data.response)],
        ))
    }
}
