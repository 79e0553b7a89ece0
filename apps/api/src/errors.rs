use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::llm_client::LlmError;
use crate::store::StoreError;

/// User-safe text returned alongside every 5xx response.
pub const FALLBACK_MESSAGE: &str =
    "Oops! Something went wrong while analyzing your mood. Please try again.";
pub const CHAT_FALLBACK_MESSAGE: &str =
    "I'm having trouble responding right now. Please try again.";

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// 4xx bodies: `{"error": ..., "code": ...}`.
/// 5xx bodies additionally carry a user-safe `"message"`; the cause is only logged.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Chat completion failed: {0}")]
    Chat(#[source] LlmError),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Validation(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = match &self {
            AppError::Validation(msg) => {
                return (
                    StatusCode::BAD_REQUEST,
                    Json(json!({ "error": msg, "code": "VALIDATION_ERROR" })),
                )
                    .into_response();
            }
            AppError::Chat(e) => {
                tracing::error!("Chat completion error: {e}");
                json!({
                    "error": "Failed to process message",
                    "code": "LLM_ERROR",
                    "message": CHAT_FALLBACK_MESSAGE,
                })
            }
            AppError::Store(e) => {
                tracing::error!("Store error: {e}");
                json!({
                    "error": "Failed to save journal entry",
                    "code": "STORE_ERROR",
                    "message": FALLBACK_MESSAGE,
                })
            }
        };

        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}
