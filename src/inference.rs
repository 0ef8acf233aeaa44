//! Text-generation backends.
//!
//! `InferenceClient` is the seam the request handler talks to. `WorkersAi` is the
//! production implementation: a minimal client for the Cloudflare Workers AI REST
//! `ai/run` endpoint, always requesting raw (non chat-templated), non-streamed output.
//!
//! NOTE: We never log the API token; responses are logged by size, not content.

use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, USER_AGENT};
use serde::{Deserialize, Serialize};
use tracing::{error, info, instrument};

use crate::config::InferenceSettings;
use crate::error::InferenceError;

#[async_trait]
pub trait InferenceClient: Send + Sync {
  /// Run the model on `prompt` and return its generated text.
  async fn generate(&self, prompt: &str) -> Result<String, InferenceError>;
}

#[derive(Clone)]
pub struct WorkersAi {
  client: reqwest::Client,
  settings: InferenceSettings,
}

impl WorkersAi {
  pub fn new(settings: InferenceSettings) -> Result<Self, InferenceError> {
    let client = reqwest::Client::builder()
      .timeout(settings.timeout)
      .build()
      .map_err(InferenceError::Transport)?;
    Ok(Self { client, settings })
  }

  /// Construct the client if Workers AI credentials are present; otherwise return None.
  pub fn from_env() -> Option<Self> {
    let settings = InferenceSettings::from_env()?;
    match Self::new(settings) {
      Ok(client) => Some(client),
      Err(e) => {
        error!(target: "flashcards_backend", error = %e, "Failed to build Workers AI HTTP client");
        None
      }
    }
  }

  pub fn model(&self) -> &str {
    &self.settings.model
  }

  fn run_url(&self) -> String {
    format!(
      "{}/accounts/{}/ai/run/{}",
      self.settings.base_url.trim_end_matches('/'),
      self.settings.account_id,
      self.settings.model
    )
  }
}

#[async_trait]
impl InferenceClient for WorkersAi {
  #[instrument(level = "info", skip(self, prompt), fields(prompt_len = prompt.len()))]
  async fn generate(&self, prompt: &str) -> Result<String, InferenceError> {
    let req = RunRequest { prompt, raw: true, stream: false };
    let start = std::time::Instant::now();

    let res = self.client.post(self.run_url())
      .header(USER_AGENT, "flashcards-backend/0.1")
      .header(CONTENT_TYPE, "application/json")
      .header(AUTHORIZATION, format!("Bearer {}", self.settings.api_token))
      .json(&req).send().await.map_err(InferenceError::Transport)?;

    if !res.status().is_success() {
      let status = res.status();
      let body = res.text().await.unwrap_or_default();
      let message = extract_api_error(&body).unwrap_or(body);
      return Err(InferenceError::Status { status: status.as_u16(), message });
    }

    let envelope: RunEnvelope = res.json().await.map_err(InferenceError::Transport)?;
    if envelope.success == Some(false) {
      let message = envelope.errors.into_iter().next()
        .map(|e| e.message)
        .unwrap_or_else(|| "request was not successful".into());
      return Err(InferenceError::Rejected(message));
    }

    let text = envelope.result
      .and_then(|r| r.response)
      .ok_or(InferenceError::MissingResponse)?;
    info!(model = %self.settings.model, elapsed = ?start.elapsed(), response_len = text.len(), "Model response received");
    Ok(text)
  }
}

// --- Workers AI DTOs ---

#[derive(Serialize)]
struct RunRequest<'a> {
  prompt: &'a str,
  raw: bool,
  stream: bool,
}

#[derive(Deserialize)]
struct RunEnvelope {
  #[serde(default)] result: Option<RunResult>,
  #[serde(default)] success: Option<bool>,
  #[serde(default)] errors: Vec<ApiMessage>,
}
#[derive(Deserialize)]
struct RunResult { #[serde(default)] response: Option<String> }
#[derive(Deserialize)]
struct ApiMessage { message: String }

/// Try to extract a clean error message from a Cloudflare API error body.
fn extract_api_error(body: &str) -> Option<String> {
  #[derive(Deserialize)]
  struct EWrap { errors: Vec<ApiMessage> }
  serde_json::from_str::<EWrap>(body).ok()?.errors.into_iter().next().map(|e| e.message)
}
