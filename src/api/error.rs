use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::llm::ModelError;

use super::models::ErrorResponse;
use super::validation::ValidationError;

pub const GENERIC_ERROR: &str = "An error occurred. Please try again later.";
pub const INVALID_BODY: &str = "Invalid request body.";

pub enum ApiError {
    Validation(ValidationError),
    Body(JsonRejection),
    Upstream(ModelError),
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        Self::Validation(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(err: JsonRejection) -> Self {
        Self::Body(err)
    }
}

impl From<ModelError> for ApiError {
    fn from(err: ModelError) -> Self {
        Self::Upstream(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::Validation(err) => {
                tracing::debug!(error = %err, "rejected /ask input");
                (StatusCode::BAD_REQUEST, err.to_string())
            }
            Self::Body(rejection) => {
                tracing::debug!(error = %rejection.body_text(), "unreadable /ask body");
                (StatusCode::BAD_REQUEST, INVALID_BODY.to_string())
            }
            Self::Upstream(err) => {
                tracing::error!(error = %err, "error in /ask endpoint");
                (StatusCode::INTERNAL_SERVER_ERROR, GENERIC_ERROR.to_string())
            }
        };

        (status, Json(ErrorResponse::new(message))).into_response()
    }
}
