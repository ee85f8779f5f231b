//! Gemini `generateContent` backend over HTTP.

use async_trait::async_trait;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use super::InferenceClient;
use super::prompt::render_prompt;
use crate::error::InferenceError;
use crate::types::{TaskRequest, TaskResult};

pub const DEFAULT_GEMINI_ENDPOINT: &str =
  "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.0-flash-exp:generateContent";

#[derive(Debug, Serialize)]
pub(crate) struct GenerateRequest {
  pub contents: Vec<Content>,
}

#[derive(Debug, Serialize)]
pub(crate) struct Content {
  pub parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub(crate) enum Part {
  Text { text: String },
  InlineData { inline_data: InlineData },
}

#[derive(Debug, Serialize)]
pub(crate) struct InlineData {
  pub mime_type: String,
  pub data: String,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct GenerateResponse {
  #[serde(default)]
  pub candidates: Vec<Candidate>,
  #[serde(default)]
  pub error: Option<ApiError>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Candidate {
  #[serde(default)]
  pub content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CandidateContent {
  #[serde(default)]
  pub parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ResponsePart {
  #[serde(default)]
  pub text: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ApiError {
  #[serde(default)]
  pub message: String,
}

/// Builds the request body: rendered prompt first, then each image inline.
pub(crate) fn build_body(request: &TaskRequest) -> GenerateRequest {
  let mut parts = vec![Part::Text {
    text: render_prompt(request),
  }];
  for img in &request.image_inputs {
    parts.push(Part::InlineData {
      inline_data: InlineData {
        mime_type: img.mime_type.clone(),
        data: STANDARD.encode(&img.bytes),
      },
    });
  }
  GenerateRequest {
    contents: vec![Content { parts }],
  }
}

/// Reads the answer text out of a successful response body.
pub(crate) fn answer_text(response: GenerateResponse) -> Result<String, InferenceError> {
  if let Some(err) = response.error {
    return Err(InferenceError::Api(err.message));
  }
  response
    .candidates
    .into_iter()
    .next()
    .and_then(|c| c.content)
    .and_then(|c| c.parts.into_iter().next())
    .and_then(|p| p.text)
    .ok_or(InferenceError::EmptyResponse)
}

/// Message for a non-2xx status: the body's `error.message` when present.
pub(crate) fn status_error(status: reqwest::StatusCode, body: &str) -> InferenceError {
  let from_body = serde_json::from_str::<GenerateResponse>(body)
    .ok()
    .and_then(|r| r.error)
    .map(|e| e.message)
    .filter(|m| !m.is_empty());
  InferenceError::Api(from_body.unwrap_or_else(|| {
    format!(
      "HTTP {}: {}",
      status.as_u16(),
      status.canonical_reason().unwrap_or("")
    )
  }))
}

/// Calls Gemini with the API key as a query parameter.
#[derive(Debug, Clone)]
pub struct GeminiClient {
  http: reqwest::Client,
  endpoint: String,
  api_key: String,
}

impl GeminiClient {
  pub fn new(api_key: impl Into<String>, endpoint: Option<String>) -> Self {
    Self {
      http: reqwest::Client::new(),
      endpoint: endpoint.unwrap_or_else(|| DEFAULT_GEMINI_ENDPOINT.to_string()),
      api_key: api_key.into(),
    }
  }

  pub fn endpoint(&self) -> &str {
    &self.endpoint
  }
}

#[async_trait]
impl InferenceClient for GeminiClient {
  fn name(&self) -> &str {
    "gemini"
  }

  #[instrument(level = "trace", skip(self, request), fields(images = request.image_inputs.len()))]
  async fn infer(&self, request: &TaskRequest) -> Result<TaskResult, InferenceError> {
    let body = build_body(request);
    let res = self
      .http
      .post(format!("{}?key={}", self.endpoint, self.api_key))
      .json(&body)
      .send()
      .await
      .map_err(|e| InferenceError::Http(e.without_url()))?;
    let status = res.status();
    debug!(status = status.as_u16(), "gemini responded");
    if !status.is_success() {
      let text = res.text().await.unwrap_or_default();
      return Err(status_error(status, &text));
    }
    let parsed: GenerateResponse = res
      .json()
      .await
      .map_err(|e| InferenceError::Http(e.without_url()))?;
    answer_text(parsed).map(TaskResult::new)
  }
}
