use std::fmt;
use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};

use crate::model::error::GenerationError;

pub const MODEL: &str = "gemini-1.0-pro";
pub const TEMPERATURE: f32 = 0.7;
pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com";

/// One call to the remote model.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRequest {
    pub model: String,
    pub temperature: f32,
    pub prompt: String,
}

impl GenerationRequest {
    /// Request with the fixed model and sampling temperature.
    pub fn new(prompt: String) -> Self {
        Self {
            model: MODEL.into(),
            temperature: TEMPERATURE,
            prompt,
        }
    }
}

/// Anything that can turn a prompt into text.
pub trait TextGenerator {
    fn generate(&self, credential: &str, request: &GenerationRequest)
        -> Result<String, GenerationError>;

    /// Cheap call that only proves the credential works.
    fn test_connection(&self, _credential: &str) -> Result<String, GenerationError> {
        Err(GenerationError::RemoteCallFailure(
            "Connection check is not supported by this backend.".into(),
        ))
    }
}

/* =========================
   Wire types
   ========================= */

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
    pub generation_config: GenerationConfig,
}

#[derive(Serialize)]
pub struct GenerationConfig {
    pub temperature: f32,
}

#[derive(Serialize, Deserialize)]
pub struct Content {
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub parts: Vec<Part>,
}

#[derive(Serialize, Deserialize)]
pub struct Part {
    #[serde(default)]
    pub text: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    #[serde(default)]
    pub prompt_feedback: Option<PromptFeedback>,
}

#[derive(Deserialize)]
pub struct Candidate {
    pub content: Option<Content>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptFeedback {
    pub block_reason: Option<String>,
}

#[derive(Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

#[derive(Deserialize)]
struct ModelList {
    #[serde(default)]
    models: Vec<serde_json::Value>,
}

impl GenerateContentRequest {
    pub fn from_request(request: &GenerationRequest) -> Self {
        Self {
            contents: vec![Content {
                role: "user".into(),
                parts: vec![Part {
                    text: request.prompt.clone(),
                }],
            }],
            generation_config: GenerationConfig {
                temperature: request.temperature,
            },
        }
    }
}

impl GenerateContentResponse {
    /// Text of the first candidate, parts joined in order.
    pub fn into_text(self) -> Result<String, GenerationError> {
        let text = self
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .map(|c| c.parts.into_iter().map(|p| p.text).collect::<String>())
            .unwrap_or_default();

        if !text.is_empty() {
            return Ok(text);
        }

        let reason = self
            .prompt_feedback
            .and_then(|f| f.block_reason)
            .map(|r| format!(" (blocked: {r})"))
            .unwrap_or_default();

        Err(GenerationError::RemoteCallFailure(format!(
            "The model returned no text{reason}."
        )))
    }
}

/// Error text for a non-success response: the service's own message when it
/// sends one, otherwise the status and raw body.
pub fn error_message(status: u16, body: &str) -> String {
    serde_json::from_str::<ErrorEnvelope>(body)
        .map(|e| e.error.message)
        .unwrap_or_else(|_| format!("HTTP {status}: {}", body.trim()))
}

/* =========================
   Gemini client
   ========================= */

#[derive(Clone)]
pub struct GeminiClient {
    http: Client,
    base_url: String,
}

impl fmt::Debug for GeminiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeminiClient")
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl GeminiClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .context("building HTTP client")?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn generate_url(&self, model: &str) -> String {
        format!("{}/v1beta/models/{}:generateContent", self.base_url, model)
    }
}

impl TextGenerator for GeminiClient {
    fn generate(
        &self,
        credential: &str,
        request: &GenerationRequest,
    ) -> Result<String, GenerationError> {
        let body = GenerateContentRequest::from_request(request);

        let resp = self
            .http
            .post(self.generate_url(&request.model))
            .header("x-goog-api-key", credential)
            .json(&body)
            .send()
            .map_err(remote)?;

        let status = resp.status();
        let text = resp.text().map_err(remote)?;
        if !status.is_success() {
            return Err(GenerationError::RemoteCallFailure(error_message(
                status.as_u16(),
                &text,
            )));
        }

        serde_json::from_str::<GenerateContentResponse>(&text)
            .map_err(remote)?
            .into_text()
    }

    /// Lists the models visible to `credential`. Used as a quick key check.
    fn test_connection(&self, credential: &str) -> Result<String, GenerationError> {
        if credential.is_empty() {
            return Err(GenerationError::MissingCredential);
        }

        let resp = self
            .http
            .get(format!("{}/v1beta/models", self.base_url))
            .header("x-goog-api-key", credential)
            .send()
            .map_err(remote)?;

        let status = resp.status();
        let body = resp.text().map_err(remote)?;
        if !status.is_success() {
            return Err(GenerationError::RemoteCallFailure(error_message(
                status.as_u16(),
                &body,
            )));
        }

        let list: ModelList = serde_json::from_str(&body).map_err(remote)?;
        Ok(format!("Connected ({} models available)", list.models.len()))
    }
}

fn remote(err: impl fmt::Display) -> GenerationError {
    GenerationError::RemoteCallFailure(err.to_string())
}
