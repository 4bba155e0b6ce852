use std::sync::Arc;

use beatboard_openai::OpenAIApi;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: beatboard_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Chat-completions client used by the suggestion endpoint.
    pub openai: Arc<OpenAIApi>,
}
