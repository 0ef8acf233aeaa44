//! Service configuration: inference settings from env, prompt settings from optional TOML.
//!
//! TOML schema (all keys optional):
//!
//! ```toml
//! [prompts]
//! card_count = 6
//! flashcards_template = "Generate {count} flashcards for the topic \"{topic}\" ..."
//! ```

use std::time::Duration;

use serde::Deserialize;
use tracing::{error, info};

pub const DEFAULT_BASE_URL: &str = "https://api.cloudflare.com/client/v4";
pub const DEFAULT_MODEL: &str = "@cf/mistral/mistral-7b-instruct-v0.1";
const DEFAULT_TIMEOUT_SECS: u64 = 20;

#[derive(Clone, Debug, Deserialize, Default)]
pub struct FlashcardsConfig {
  #[serde(default)]
  pub prompts: Prompts,
}

/// Prompt settings. `{count}`, `{topic}` and `{example}` are filled per request.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct Prompts {
  pub card_count: u32,
  pub flashcards_template: String,
}

impl Default for Prompts {
  fn default() -> Self {
    Self {
      card_count: 6,
      flashcards_template: "Generate {count} flashcards for the topic \"{topic}\". Each flashcard should be in JSON format like:\n{example}\nPlease provide only the JSON data without any additional text or explanations.".into(),
    }
  }
}

/// Where and how to reach the Workers AI REST endpoint.
#[derive(Clone, Debug)]
pub struct InferenceSettings {
  pub account_id: String,
  pub api_token: String,
  pub base_url: String,
  pub model: String,
  pub timeout: Duration,
}

impl InferenceSettings {
  /// Requires CLOUDFLARE_ACCOUNT_ID and CLOUDFLARE_API_TOKEN; everything else has a default.
  pub fn from_env() -> Option<Self> {
    let account_id = std::env::var("CLOUDFLARE_ACCOUNT_ID").ok()?;
    let api_token = std::env::var("CLOUDFLARE_API_TOKEN").ok()?;
    let base_url = std::env::var("WORKERS_AI_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.into());
    let model = std::env::var("WORKERS_AI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.into());
    let timeout_secs = std::env::var("INFERENCE_TIMEOUT_SECS")
      .ok()
      .and_then(|v| v.parse::<u64>().ok())
      .unwrap_or(DEFAULT_TIMEOUT_SECS);

    Some(Self {
      account_id,
      api_token,
      base_url,
      model,
      timeout: Duration::from_secs(timeout_secs),
    })
  }
}

pub fn parse_config(raw: &str) -> Result<FlashcardsConfig, toml::de::Error> {
  toml::from_str::<FlashcardsConfig>(raw)
}

/// Attempt to load `FlashcardsConfig` from FLASHCARDS_CONFIG_PATH. On any parsing/IO error, returns None.
pub fn load_config_from_env() -> Option<FlashcardsConfig> {
  let path = std::env::var("FLASHCARDS_CONFIG_PATH").ok()?;
  match std::fs::read_to_string(&path) {
    Ok(s) => match parse_config(&s) {
      Ok(cfg) => {
        info!(target: "flashcards_backend", %path, "Loaded flashcards config (TOML)");
        Some(cfg)
      }
      Err(e) => {
        error!(target: "flashcards_backend", %path, error = %e, "Failed to parse TOML config");
        None
      }
    },
    Err(e) => {
      error!(target: "flashcards_backend", %path, error = %e, "Failed to read TOML config file");
      None
    }
  }
}
