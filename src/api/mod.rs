mod error;
mod handlers;
mod models;
mod validation;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::TraceLayer;

use crate::AppState;

pub use error::{ApiError, GENERIC_ERROR, INVALID_BODY};
pub use handlers::{ask, health, index, not_found};
pub use models::{AskRequest, AskResponse, ErrorResponse, HealthResponse};
pub use validation::{
    validate, Question, ValidationError, QUESTION_MAX_LENGTH, QUESTION_MIN_LENGTH,
    TEXT_MAX_LENGTH, TEXT_MIN_LENGTH,
};

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/ask", post(ask))
        .route("/health", get(health))
        .fallback(not_found)
        .layer(CatchPanicLayer::custom(handlers::panic_response))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
