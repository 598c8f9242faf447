//! Gemini `generateContent` backend over blocking `reqwest`.

use std::time::Duration;

use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};

use crate::{BackendError, GenError, GenResult, GenerationConfig, TextBackend};

// ── Wire types ────────────────────────────────────────────────────────────────

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest<'a> {
    contents:          Vec<Content<'a>>,
    generation_config: GenerationParams,
}

#[derive(Serialize)]
struct Content<'a> {
    parts: Vec<PartOut<'a>>,
}

#[derive(Serialize)]
struct PartOut<'a> {
    text: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationParams {
    temperature:        f32,
    max_output_tokens:  u32,
    response_mime_type: &'static str,
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct GenerateResponse {
    candidates: Vec<Candidate>,
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct CandidateContent {
    parts: Vec<PartIn>,
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct PartIn {
    text: String,
}

impl GenerateResponse {
    fn into_text(self) -> Option<String> {
        let candidate = self.candidates.into_iter().next()?;
        let text: String = candidate.content.parts.into_iter().map(|p| p.text).collect();
        (!text.is_empty()).then_some(text)
    }
}

// ── GeminiBackend ─────────────────────────────────────────────────────────────

pub struct GeminiBackend {
    http:              Client,
    url:               String,
    api_key:           String,
    model:             String,
    temperature:       f32,
    max_output_tokens: u32,
}

impl GeminiBackend {
    /// Fails with [`GenError::Config`] when the API key is missing.
    pub fn new(config: &GenerationConfig) -> GenResult<Self> {
        let api_key = config.require_api_key()?.to_owned();
        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| GenError::Config(format!("HTTP client: {e}")))?;
        let url = format!(
            "{}/models/{}:generateContent",
            config.base_url.trim_end_matches('/'),
            config.model,
        );
        tracing::info!(model = %config.model, "Gemini backend initialised");
        Ok(Self {
            http,
            url,
            api_key,
            model:             config.model.clone(),
            temperature:       config.temperature,
            max_output_tokens: config.max_output_tokens,
        })
    }
}

impl TextBackend for GeminiBackend {
    fn complete(&self, prompt: &str) -> Result<String, BackendError> {
        let body = GenerateRequest {
            contents: vec![Content { parts: vec![PartOut { text: prompt }] }],
            generation_config: GenerationParams {
                temperature:        self.temperature,
                max_output_tokens:  self.max_output_tokens,
                response_mime_type: "application/json",
            },
        };

        let resp = self
            .http
            .post(&self.url)
            .header("x-goog-api-key", self.api_key.as_str())
            .json(&body)
            .send()
            .map_err(|e| BackendError::new(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            let detail = resp.text().unwrap_or_default();
            return Err(BackendError::new(format!("HTTP {status}: {detail}")));
        }

        resp.json::<GenerateResponse>()
            .map_err(|e| BackendError::new(format!("undecodable response body: {e}")))?
            .into_text()
            .ok_or_else(|| BackendError::new("response contained no candidate text"))
    }

    fn name(&self) -> &str {
        &self.model
    }
}
