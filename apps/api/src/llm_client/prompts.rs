// Cross-cutting prompt fragments shared by every drafting prompt.
// Field-specific wording lives in suggestion::prompts.

/// Voice and format rules appended to every system instruction.
/// Must stay free of salutation words: the model tends to echo them back.
pub const FIRST_PERSON_RULES: &str = "\
    Write as the applicant, in the first person (\"I\", \"my\", \"our household\"). \
    Start directly with the substance of the situation. \
    Do not introduce yourself, do not state who is writing, and do not address the reader. \
    Never mention that you are an AI, a model, or an assistant. \
    Keep the paragraph under 120 words. \
    Write one continuous paragraph: no bullet points, numbered lists, or headings. \
    Do not repeat personal identifiers such as names, ID numbers, or phone numbers, \
    even if they appear in the material provided.";

/// Closing instruction for every user message.
pub const LIVED_EXPERIENCE_INSTRUCTION: &str = "\
    Do not open with a greeting. \
    Make it sound like a real person describing their own lived experience, \
    plainly and honestly, without exaggeration.";
