//! Flashcards backend
//!
//! - POST `{"quiz": "<topic>"}` on any path → six generated flashcards as a JSON array
//! - OPTIONS → CORS preflight; any other method → 405
//! - Flashcards come from a Cloudflare Workers AI text model
//!
//! Important env variables:
//!   PORT                   : u16 (default 3000)
//!   CLOUDFLARE_ACCOUNT_ID  : Workers AI account (required for generation)
//!   CLOUDFLARE_API_TOKEN   : Workers AI API token (required for generation)
//!   WORKERS_AI_BASE_URL    : default "https://api.cloudflare.com/client/v4"
//!   WORKERS_AI_MODEL       : default "@cf/mistral/mistral-7b-instruct-v0.1"
//!   INFERENCE_TIMEOUT_SECS : default 20
//!   FLASHCARDS_CONFIG_PATH : path to TOML config (prompt template, card count)
//!   LOG_LEVEL              : tracing filter, e.g. "debug" or full directives
//!   LOG_FORMAT             : "pretty" (default) or "json"

mod telemetry;
mod util;
mod domain;
mod error;
mod config;
mod inference;
mod state;
mod logic;
mod routes;

use std::{net::SocketAddr, sync::Arc};
use tokio::net::TcpListener;
use tracing::info;

use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
  telemetry::init_tracing();

  let state = Arc::new(AppState::from_env());
  let app = build_router(state);

  let addr: SocketAddr = std::env::var("PORT")
    .ok()
    .and_then(|p| p.parse::<u16>().ok())
    .map(|port| SocketAddr::from(([0, 0, 0, 0], port)))
    .unwrap_or_else(|| SocketAddr::from(([0, 0, 0, 0], 3000)));

  let listener = TcpListener::bind(addr).await?;
  info!(target: "flashcards_backend", %addr, "HTTP server listening");
  axum::serve(listener, app)
    .with_graceful_shutdown(shutdown_signal())
    .await?;
  info!(target: "flashcards_backend", "HTTP server stopped");
  Ok(())
}

async fn shutdown_signal() {
  if let Err(e) = tokio::signal::ctrl_c().await {
    tracing::error!(target: "flashcards_backend", error = %e, "Failed to listen for shutdown signal");
    std::future::pending::<()>().await;
  }
  info!(target: "flashcards_backend", "Shutdown signal received");
}
