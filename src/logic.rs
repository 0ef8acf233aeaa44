//! Core flashcard pipeline behind the POST handler:
//!   decode body → reject numeric-only topics → build prompt → call model → check output.

use serde_json::Value;
use tracing::{debug, instrument};

use crate::config::Prompts;
use crate::domain::{Flashcard, QuizRequest};
use crate::error::{FlashcardError, InferenceError, NOT_AN_ARRAY, NOT_JSON, NUMBER_ONLY_PROMPT};
use crate::state::AppState;
use crate::util::{fill_template, is_digits_only, trunc_for_log};

pub fn decode_request(body: &[u8]) -> Result<QuizRequest, FlashcardError> {
  serde_json::from_slice::<QuizRequest>(body).map_err(FlashcardError::RequestBody)
}

pub fn build_prompt(prompts: &Prompts, topic: &str) -> String {
  let example = serde_json::to_string_pretty(&Flashcard::example()).unwrap_or_default();
  let count = prompts.card_count.to_string();
  fill_template(
    &prompts.flashcards_template,
    &[("count", &count), ("topic", topic), ("example", &example)],
  )
}

/// Trim the model output and require it to be a JSON array. Elements are not inspected.
pub fn parse_flashcards(text: &str) -> Result<Vec<Value>, FlashcardError> {
  let parsed: Value = serde_json::from_str(text.trim())
    .map_err(|_| FlashcardError::ResponseFormat(NOT_JSON))?;
  match parsed {
    Value::Array(cards) => Ok(cards),
    _ => Err(FlashcardError::ResponseFormat(NOT_AN_ARRAY)),
  }
}

#[instrument(level = "info", skip(state, body), fields(body_len = body.len()))]
pub async fn generate_flashcards(state: &AppState, body: &[u8]) -> Result<Vec<Value>, FlashcardError> {
  let topic = decode_request(body)?.topic();
  if is_digits_only(&topic) {
    return Err(FlashcardError::Validation(NUMBER_ONLY_PROMPT));
  }

  let client = state.inference.as_ref().ok_or(InferenceError::NotConfigured)?;
  let prompt = build_prompt(&state.prompts, &topic);
  let text = client.generate(&prompt).await?;
  debug!(target: "flashcards_backend", response = %trunc_for_log(text.trim(), 2000), "AI response");

  parse_flashcards(&text)
}
