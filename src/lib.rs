pub mod api;
pub mod config;
pub mod llm;
pub mod prompt;

use std::sync::Arc;

use axum::Router;

use crate::config::AppConfig;
use crate::llm::{ChatModel, OpenAiChat};

/// Shared, read-only request state built once at startup.
pub struct AppState {
    pub model: Arc<dyn ChatModel>,
}

impl AppState {
    pub fn new(model: Arc<dyn ChatModel>) -> Self {
        Self { model }
    }

    pub fn from_config(cfg: &AppConfig) -> Self {
        Self::new(Arc::new(OpenAiChat::new(cfg.api_key.clone(), &cfg.base_url)))
    }
}

pub fn build_app(state: Arc<AppState>) -> Router {
    api::router(state)
}

pub async fn run_server(app: Router, addr: &str) -> std::io::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(addr = %listener.local_addr()?, "listening");

    axum::serve(listener, app).await
}
