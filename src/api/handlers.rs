use std::any::Any;
use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Json,
};

use crate::llm::DEFAULT_MAX_TOKENS;
use crate::prompt::course_prompt;
use crate::AppState;

use super::error::{ApiError, GENERIC_ERROR};
use super::models::{AskRequest, AskResponse, ErrorResponse, HealthResponse};
use super::validation::validate;

const INDEX_HTML: &str = include_str!("../../static/index.html");

pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

pub async fn ask(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<AskRequest>, JsonRejection>,
) -> Result<Json<AskResponse>, ApiError> {
    let Json(payload) = payload?;
    let input = validate(&payload)?;

    let prompt = course_prompt(input.text, input.question);
    let answer = state.model.complete(&prompt, DEFAULT_MAX_TOKENS).await?;

    Ok(Json(AskResponse { answer }))
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}

pub async fn not_found() -> Response {
    (StatusCode::NOT_FOUND, Json(ErrorResponse::new("Not found"))).into_response()
}

/// Turns a handler panic into the same opaque 500 an upstream failure gets.
pub fn panic_response(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = err
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| err.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic");
    tracing::error!(panic = detail, "handler panicked");

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse::new(GENERIC_ERROR)),
    )
        .into_response()
}
