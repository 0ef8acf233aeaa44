//! Log setup for the flashcards service.
//!
//! Request spans come from the tower-http trace layer (`tower_http` target); the
//! handler, pipeline and Workers AI client log under `flashcards_backend`, where
//! the trimmed model reply is emitted at debug level.
//!
//! `LOG_LEVEL` overrides the default directives, `LOG_FORMAT=json` switches to JSON lines.

use tracing_subscriber::EnvFilter;

const DEFAULT_DIRECTIVES: &str = "info,flashcards_backend=debug,tower_http=info,axum=info";

pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_env("LOG_LEVEL").unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVES));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(true)
        .with_line_number(true);

    match std::env::var("LOG_FORMAT").as_deref() {
        Ok("json") => builder.json().init(),
        _ => builder.init(),
    }
}
