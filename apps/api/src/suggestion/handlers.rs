//! Axum route handlers for the Suggestion API.

use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, State},
    http::StatusCode,
    Json,
};
use tracing::{debug, info};

use crate::errors::{
    AppError, INVALID_BODY_MESSAGE, MISSING_FIELDS_MESSAGE, UNSUPPORTED_FIELD_MESSAGE,
};
use crate::state::AppState;
use crate::suggestion::builder::build_messages;
use crate::suggestion::models::{RequestProblem, SuggestionRequest, SuggestionResponse};

/// POST /suggestions
///
/// validate → build prompt → one provider call → translate result.
/// Nothing reaches the provider unless validation passes.
pub async fn handle_generate_suggestion(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<SuggestionResponse>, AppError> {
    let body = body.map_err(|rejection| {
        debug!("Unreadable suggestion body: {rejection}");
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            AppError::PayloadTooLarge
        } else {
            AppError::Validation(INVALID_BODY_MESSAGE)
        }
    })?;

    let request: SuggestionRequest = serde_json::from_slice(&body).map_err(|e| {
        debug!("Unparseable suggestion body: {e}");
        AppError::Validation(INVALID_BODY_MESSAGE)
    })?;

    let request = request.validate().map_err(|problem| match problem {
        RequestProblem::MissingRequired => AppError::Validation(MISSING_FIELDS_MESSAGE),
        RequestProblem::UnsupportedField(raw) => {
            debug!("Unsupported suggestion field: {raw:?}");
            AppError::Validation(UNSUPPORTED_FIELD_MESSAGE)
        }
    })?;

    let messages = build_messages(&request);
    let suggestion = state
        .llm
        .complete(&messages, state.config.request_timeout)
        .await?;

    info!(
        field = %request.field,
        language = ?request.language,
        "Suggestion generated"
    );

    Ok(Json(SuggestionResponse { suggestion }))
}

/// OPTIONS /suggestions
///
/// Cross-origin pre-flight. The CORS headers are added by the router layer.
pub async fn handle_suggestion_preflight() -> StatusCode {
    StatusCode::NO_CONTENT
}
