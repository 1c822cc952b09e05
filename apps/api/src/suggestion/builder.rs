//! Prompt builder: turns a validated request into the system and user messages.
//! Pure and deterministic: no I/O, no state.

use crate::llm_client::prompts::{FIRST_PERSON_RULES, LIVED_EXPERIENCE_INSTRUCTION};
use crate::llm_client::ChatMessage;
use crate::suggestion::models::{FormField, Language, ValidatedRequest};
use crate::suggestion::prompts::{
    prompt_spec, APPLICANT_CONTEXT_PREFIX, APPLICANT_NOTES_PREFIX, SYSTEM_PROMPT_TEMPLATE,
};

pub fn build_system_prompt(field: FormField) -> String {
    SYSTEM_PROMPT_TEMPLATE
        .replace("{focus}", prompt_spec(field).focus)
        .replace("{rules}", FIRST_PERSON_RULES)
}

pub fn build_user_prompt(request: &ValidatedRequest) -> String {
    let mut sections = vec![format!(
        "{} Write the paragraph in {}. {}",
        prompt_spec(request.field).style,
        language_instruction(request.language),
        LIVED_EXPERIENCE_INSTRUCTION
    )];

    if let Some(details) = &request.applicant_details {
        sections.push(format!("{APPLICANT_CONTEXT_PREFIX}{details}"));
    }
    if let Some(notes) = &request.existing_text {
        sections.push(format!("{APPLICANT_NOTES_PREFIX}{notes}"));
    }

    sections.join("\n\n")
}

fn language_instruction(language: Language) -> &'static str {
    match language {
        Language::English => "English",
        Language::Arabic => "Arabic (Modern Standard Arabic, right-to-left script)",
    }
}

/// One system message and one user message. No history is carried between calls.
pub fn build_messages(request: &ValidatedRequest) -> Vec<ChatMessage> {
    vec![
        ChatMessage::system(build_system_prompt(request.field)),
        ChatMessage::user(build_user_prompt(request)),
    ]
}
