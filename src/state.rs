//! Application state: prompt settings and the inference handle.
//!
//! Nothing here is mutated after startup; every request only reads it.

use std::sync::Arc;

use tracing::{info, instrument, warn};

use crate::config::{load_config_from_env, Prompts};
use crate::inference::{InferenceClient, WorkersAi};

#[derive(Clone)]
pub struct AppState {
    pub prompts: Prompts,
    pub inference: Option<Arc<dyn InferenceClient>>,
}

impl AppState {
    /// Build state from env: load prompt config, init the Workers AI client.
    #[instrument(level = "info", skip_all)]
    pub fn from_env() -> Self {
        let prompts = load_config_from_env()
            .map(|c| c.prompts)
            .unwrap_or_default();

        let inference: Option<Arc<dyn InferenceClient>> = match WorkersAi::from_env() {
            Some(client) => {
                info!(target: "flashcards_backend", model = %client.model(), "Workers AI client initialized");
                Some(Arc::new(client))
            }
            None => {
                warn!(target: "flashcards_backend", "CLOUDFLARE_ACCOUNT_ID/CLOUDFLARE_API_TOKEN not set; POST requests will fail");
                None
            }
        };

        Self { prompts, inference }
    }

    #[cfg(test)]
    pub fn with_client(prompts: Prompts, client: Arc<dyn InferenceClient>) -> Self {
        Self { prompts, inference: Some(client) }
    }
}
