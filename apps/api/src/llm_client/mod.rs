//! LLM Client — the single point of entry for chat-completion calls.
//!
//! Every call is bounded by a caller-supplied deadline. Exceeding it resolves
//! into `LlmError::Timeout` rather than a generic transport error.
//! No retries: one inbound request produces at most one provider call.

use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

pub mod prompts;

/// Fixed sampling temperature for all suggestion calls.
pub const TEMPERATURE: f32 = 0.6;

/// Used when a failed provider response carries no readable message.
pub const FALLBACK_ERROR_MESSAGE: &str = "Unable to generate suggestion.";

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("LLM call exceeded deadline of {0:?}")]
    Timeout(Duration),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("LLM returned empty content")]
    EmptyContent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    temperature: f32,
}

/// Text of the first choice, trimmed. `None` when absent, null, non-string or blank.
///
/// Walks the untyped body so that shape surprises in a 2xx response (`"choices": null`,
/// `[null]`, a missing `message`) all read as "no text" rather than a parse failure.
pub fn completion_text(body: &Value) -> Option<&str> {
    body.pointer("/choices/0/message/content")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|t| !t.is_empty())
}

#[derive(Debug, Deserialize)]
struct ProviderErrorEnvelope {
    error: Option<ProviderErrorBody>,
}

#[derive(Debug, Deserialize)]
struct ProviderErrorBody {
    message: Option<String>,
}

/// Pulls `error.message` out of a failed provider response body.
fn provider_error_message(body: &str) -> String {
    serde_json::from_str::<ProviderErrorEnvelope>(body)
        .ok()
        .and_then(|e| e.error)
        .and_then(|e| e.message)
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| FALLBACK_ERROR_MESSAGE.to_string())
}

/// Chat-completion client shared by every request handler.
#[derive(Clone)]
pub struct LlmClient {
    client: Client,
    api_key: String,
    model: String,
    endpoint: String,
}

impl LlmClient {
    pub fn new(api_key: String, model: String, endpoint: String) -> Result<Self, LlmError> {
        Ok(Self {
            client: Client::builder().build()?,
            api_key,
            model,
            endpoint,
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Sends one chat-completion request and returns the trimmed text of the first choice.
    ///
    /// The whole exchange, including reading the response body, must finish within
    /// `deadline`; otherwise the in-flight request is dropped and `LlmError::Timeout`
    /// is returned.
    pub async fn complete(
        &self,
        messages: &[ChatMessage],
        deadline: Duration,
    ) -> Result<String, LlmError> {
        match tokio::time::timeout(deadline, self.send(messages)).await {
            Ok(result) => result,
            Err(_) => Err(LlmError::Timeout(deadline)),
        }
    }

    async fn send(&self, messages: &[ChatMessage]) -> Result<String, LlmError> {
        let request_body = ChatCompletionRequest {
            model: &self.model,
            messages,
            temperature: TEMPERATURE,
        };

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            // An unreadable error body still reports the provider's status.
            let body = response.text().await.unwrap_or_default();
            return Err(LlmError::Api {
                status: status.as_u16(),
                message: provider_error_message(&body),
            });
        }

        let body = response.text().await?;
        let completion: Value = serde_json::from_str(&body)?;
        let text = completion_text(&completion).ok_or(LlmError::EmptyContent)?;

        debug!(model = %self.model, chars = text.len(), "LLM call succeeded");

        Ok(text.to_string())
    }
}
