use crate::config::Config;
use crate::llm_client::LlmClient;

/// Shared application state injected into all route handlers via Axum extractors.
/// Read-only after startup.
#[derive(Clone)]
pub struct AppState {
    pub llm: LlmClient,
    pub config: Config,
}

impl AppState {
    pub fn from_config(config: Config) -> anyhow::Result<Self> {
        let llm = LlmClient::new(
            config.openai_api_key.clone(),
            config.openai_model.clone(),
            config.openai_api_url.clone(),
        )?;
        Ok(Self { llm, config })
    }
}
