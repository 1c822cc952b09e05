// Prompt wording for each form field.
// Reuses the cross-cutting voice rules from llm_client::prompts.

use crate::suggestion::models::FormField;

/// Fixed wording for one form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PromptSpec {
    /// What the paragraph must cover. Goes into the system instruction.
    pub focus: &'static str,
    /// Opening constraints and tone. Goes into the user instruction.
    pub style: &'static str,
}

const FINANCIAL_SITUATION: PromptSpec = PromptSpec {
    focus: "my current financial situation: household income, essential monthly expenses \
        such as rent, food, and utilities, any debts or arrears, and the gap between \
        what comes in and what is needed",
    style: "Open with the most pressing financial pressure I am facing rather than a general \
        summary. Keep the tone factual and calm. Mention amounts only if they appear in the \
        material below, and never invent figures. Avoid sounding dramatic or pleading.",
};

const EMPLOYMENT_CIRCUMSTANCES: PromptSpec = PromptSpec {
    focus: "my employment circumstances: whether I am working, unemployed, or in unstable \
        work, what changed recently, and what is preventing me from securing steady income",
    style: "Open with my current work status in plain terms. Describe the change or barrier \
        concretely and show what I am doing to find or keep work. Avoid blaming others and \
        avoid job-application language such as listing skills or qualifications.",
};

const REASON_FOR_APPLYING: PromptSpec = PromptSpec {
    focus: "why I am applying for social support now: the circumstances that led to this \
        request and how the assistance would help me and my household get back on our feet",
    style: "Open with the event or circumstance that made support necessary now. Connect it \
        to the specific difference the support would make. Keep it sincere and direct, and \
        avoid generic statements of gratitude or promises.",
};

/// Returns the fixed prompt wording for a form field.
pub fn prompt_spec(field: FormField) -> &'static PromptSpec {
    match field {
        FormField::CurrentFinancialSituation => &FINANCIAL_SITUATION,
        FormField::EmploymentCircumstances => &EMPLOYMENT_CIRCUMSTANCES,
        FormField::ReasonForApplying => &REASON_FOR_APPLYING,
    }
}

/// Opening of every system instruction. Replace `{focus}` before sending.
pub const SYSTEM_PROMPT_TEMPLATE: &str = "You are drafting one paragraph for a government \
    social support application form. The paragraph describes {focus}.\n\n{rules}";

/// Prefix for applicant-supplied background information.
pub const APPLICANT_CONTEXT_PREFIX: &str = "Applicant context: ";

/// Prefix for text the applicant already drafted for this field.
pub const APPLICANT_NOTES_PREFIX: &str = "Applicant notes: ";
