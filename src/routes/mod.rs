//! Router assembly: one catch-all handler plus the HTTP trace layer.
//!
//! CORS headers are written by the handler itself; the preflight reply has a fixed
//! status and header set that callers rely on.

use std::sync::Arc;

use axum::Router;
use tower_http::trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::state::AppState;

pub mod http;

/// Every path and method goes to `http::handle_request`.
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .fallback(http::handle_request)
        .with_state(state)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
}
