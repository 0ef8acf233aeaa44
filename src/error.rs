//! Error kinds raised while serving a flashcard request, and how each maps to HTTP.
//!
//! Every kind carries the message that ends up in the `{"error": ...}` body verbatim.

use std::error::Error;
use std::fmt;

use axum::{
  http::{header::ACCESS_CONTROL_ALLOW_ORIGIN, StatusCode},
  response::{IntoResponse, Response},
  Json,
};
use serde::Serialize;
use tracing::error;

pub const NUMBER_ONLY_PROMPT: &str = "Prompt cannot be a number only.";
pub const NOT_JSON: &str = "Response does not contain valid JSON.";
pub const NOT_AN_ARRAY: &str = "Response JSON is not an array.";

#[derive(Debug)]
pub enum FlashcardError {
  /// The topic is user-correctable (numeric-only).
  Validation(&'static str),
  /// The POST body could not be read (too large, aborted).
  BodyRead(axum::Error),
  /// The POST body could not be decoded into a quiz request.
  RequestBody(serde_json::Error),
  /// The model answered, but not with a JSON array.
  ResponseFormat(&'static str),
  /// The inference call itself failed.
  Upstream(InferenceError),
}

/// Failure talking to the inference backend.
#[derive(Debug)]
pub enum InferenceError {
  NotConfigured,
  Transport(reqwest::Error),
  Status { status: u16, message: String },
  Rejected(String),
  MissingResponse,
}

#[derive(Serialize)]
struct ErrorBody {
  error: String,
}

impl FlashcardError {
  pub fn status(&self) -> StatusCode {
    match self {
      Self::Validation(_) => StatusCode::BAD_REQUEST,
      Self::BodyRead(_) | Self::RequestBody(_) | Self::ResponseFormat(_) | Self::Upstream(_) => {
        StatusCode::INTERNAL_SERVER_ERROR
      }
    }
  }
}

impl fmt::Display for FlashcardError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::Validation(msg) | Self::ResponseFormat(msg) => f.write_str(msg),
      Self::BodyRead(err) => write!(f, "Failed to read request body: {err}"),
      Self::RequestBody(err) => write!(f, "Invalid request body: {err}"),
      Self::Upstream(err) => write!(f, "{err}"),
    }
  }
}

impl Error for FlashcardError {
  fn source(&self) -> Option<&(dyn Error + 'static)> {
    match self {
      Self::BodyRead(err) => Some(err),
      Self::RequestBody(err) => Some(err),
      Self::Upstream(err) => Some(err),
      _ => None,
    }
  }
}

impl From<InferenceError> for FlashcardError {
  fn from(err: InferenceError) -> Self {
    Self::Upstream(err)
  }
}

impl fmt::Display for InferenceError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::NotConfigured => f.write_str("Inference backend is not configured."),
      Self::Transport(err) => write!(f, "Inference request failed: {err}"),
      Self::Status { status, message } => write!(f, "Inference HTTP {status}: {message}"),
      Self::Rejected(message) => write!(f, "Inference error: {message}"),
      Self::MissingResponse => f.write_str("Inference reply did not contain a response."),
    }
  }
}

impl Error for InferenceError {
  fn source(&self) -> Option<&(dyn Error + 'static)> {
    match self {
      Self::Transport(err) => Some(err),
      _ => None,
    }
  }
}

impl IntoResponse for FlashcardError {
  fn into_response(self) -> Response {
    let status = self.status();
    if status.is_server_error() {
      error!(target: "flashcards_backend", error = %self, "Request handling error");
    }
    (
      status,
      [(ACCESS_CONTROL_ALLOW_ORIGIN, "*")],
      Json(ErrorBody { error: self.to_string() }),
    )
      .into_response()
  }
}
