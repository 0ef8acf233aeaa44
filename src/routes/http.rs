//! The single request handler. It is mounted for every path and dispatches on method only.

use std::sync::Arc;

use axum::{
  body::{to_bytes, Body},
  extract::State,
  http::{
    header::{ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS, ACCESS_CONTROL_ALLOW_ORIGIN},
    Method, StatusCode,
  },
  response::{IntoResponse, Response},
  Json,
};
use tracing::{info, instrument};

use crate::error::FlashcardError;
use crate::logic::generate_flashcards;
use crate::state::AppState;

pub const INVALID_METHOD: &str = "Invalid request method.";

/// Upper bound on a POST body. Only POST bodies are read; other methods never touch theirs.
pub const MAX_BODY_BYTES: usize = 2 * 1024 * 1024;

#[instrument(level = "info", skip(state, method, body), fields(%method))]
pub async fn handle_request(
  State(state): State<Arc<AppState>>,
  method: Method,
  body: Body,
) -> Response {
  match method {
    Method::OPTIONS => preflight(),
    Method::POST => match post_flashcards(&state, body).await {
      Ok(resp) => resp,
      Err(e) => e.into_response(),
    },
    _ => (
      StatusCode::METHOD_NOT_ALLOWED,
      [(ACCESS_CONTROL_ALLOW_ORIGIN, "*")],
      INVALID_METHOD,
    )
      .into_response(),
  }
}

fn preflight() -> Response {
  (
    StatusCode::NO_CONTENT,
    [
      (ACCESS_CONTROL_ALLOW_ORIGIN, "*"),
      (ACCESS_CONTROL_ALLOW_METHODS, "GET, POST, OPTIONS"),
      (ACCESS_CONTROL_ALLOW_HEADERS, "Content-Type"),
    ],
  )
    .into_response()
}

async fn post_flashcards(state: &AppState, body: Body) -> Result<Response, FlashcardError> {
  let bytes = to_bytes(body, MAX_BODY_BYTES).await.map_err(FlashcardError::BodyRead)?;
  let cards = generate_flashcards(state, &bytes).await?;
  info!(target: "flashcards_backend", cards = cards.len(), "Flashcards served");
  Ok(([(ACCESS_CONTROL_ALLOW_ORIGIN, "*")], Json(cards)).into_response())
}
