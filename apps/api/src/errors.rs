use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::llm_client::LlmError;

pub const MISSING_FIELDS_MESSAGE: &str = "Missing required fields.";
pub const INVALID_BODY_MESSAGE: &str = "Invalid request body.";
pub const BODY_TOO_LARGE_MESSAGE: &str = "Request body too large.";
pub const UNSUPPORTED_FIELD_MESSAGE: &str = "Unsupported field.";
pub const TIMEOUT_MESSAGE: &str = "The request timed out.";
pub const EMPTY_RESPONSE_MESSAGE: &str = "No suggestion received.";
pub const INTERNAL_FALLBACK_MESSAGE: &str = "Unexpected error generating suggestion.";

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    /// Client fault; the message is returned verbatim.
    #[error("Validation error: {0}")]
    Validation(&'static str),

    #[error("Request body exceeds size limit")]
    PayloadTooLarge,

    #[error("Provider call timed out")]
    Timeout,

    #[error("Provider error (status {status}): {message}")]
    Provider { status: u16, message: String },

    #[error("Provider returned no suggestion")]
    EmptyResponse,

    /// `message` goes to the caller; `detail` is logged only.
    #[error("Internal server error: {detail}")]
    Internal { message: String, detail: String },
}

impl AppError {
    pub fn internal(message: impl Into<String>) -> Self {
        let message = message.into();
        AppError::Internal {
            detail: message.clone(),
            message,
        }
    }
}

impl From<LlmError> for AppError {
    fn from(err: LlmError) -> Self {
        match err {
            LlmError::Timeout(_) => AppError::Timeout,
            LlmError::Api { status, message } => AppError::Provider { status, message },
            LlmError::EmptyContent => AppError::EmptyResponse,
            LlmError::Http(e) => {
                let detail = e.to_string();
                // reqwest's display embeds the provider URL
                let message = LlmError::Http(e.without_url()).to_string();
                AppError::Internal { message, detail }
            }
            other @ LlmError::Parse(_) => AppError::internal(other.to_string()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::Validation(msg) => {
                tracing::warn!("Rejected suggestion request: {msg}");
                (StatusCode::BAD_REQUEST, msg.to_string())
            }
            AppError::PayloadTooLarge => {
                tracing::warn!("Rejected oversized suggestion request");
                (
                    StatusCode::PAYLOAD_TOO_LARGE,
                    BODY_TOO_LARGE_MESSAGE.to_string(),
                )
            }
            AppError::Timeout => {
                tracing::warn!("Suggestion provider call timed out");
                (StatusCode::GATEWAY_TIMEOUT, TIMEOUT_MESSAGE.to_string())
            }
            AppError::Provider { status, message } => {
                tracing::warn!("Suggestion provider returned {status}: {message}");
                (
                    StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
                    message,
                )
            }
            AppError::EmptyResponse => {
                tracing::error!("Suggestion provider returned no content");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    EMPTY_RESPONSE_MESSAGE.to_string(),
                )
            }
            AppError::Internal { message, detail } => {
                tracing::error!("Internal error: {detail}");
                let message = if message.trim().is_empty() {
                    INTERNAL_FALLBACK_MESSAGE.to_string()
                } else {
                    message
                };
                (StatusCode::INTERNAL_SERVER_ERROR, message)
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}
