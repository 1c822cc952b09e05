// Suggestion drafting: request validation, field-specific prompts, and the
// single provider round trip behind POST /suggestions.
// All LLM calls go through llm_client.

pub mod builder;
pub mod handlers;
pub mod models;
pub mod prompts;
