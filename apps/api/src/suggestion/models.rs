use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Application-form section the applicant wants help drafting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FormField {
    CurrentFinancialSituation,
    EmploymentCircumstances,
    ReasonForApplying,
}

impl FormField {
    pub const ALL: [FormField; 3] = [
        FormField::CurrentFinancialSituation,
        FormField::EmploymentCircumstances,
        FormField::ReasonForApplying,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FormField::CurrentFinancialSituation => "currentFinancialSituation",
            FormField::EmploymentCircumstances => "employmentCircumstances",
            FormField::ReasonForApplying => "reasonForApplying",
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownField(pub String);

impl FromStr for FormField {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FormField::ALL
            .into_iter()
            .find(|f| f.as_str() == s.trim())
            .ok_or_else(|| UnknownField(s.to_string()))
    }
}

/// Output language for the drafted paragraph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    English,
    Arabic,
}

impl Language {
    /// `"ar"` selects Arabic; every other code falls back to English.
    pub fn from_code(code: &str) -> Self {
        if code.trim().eq_ignore_ascii_case("ar") {
            Language::Arabic
        } else {
            Language::English
        }
    }
}

/// Raw request body. Everything is optional here so that presence is checked
/// by validation rather than by the JSON decoder.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestionRequest {
    pub field: Option<String>,
    pub language: Option<String>,
    pub existing_text: Option<String>,
    pub applicant_details: Option<String>,
}

/// A request that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedRequest {
    pub field: FormField,
    pub language: Language,
    pub existing_text: Option<String>,
    pub applicant_details: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestProblem {
    MissingRequired,
    UnsupportedField(String),
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

impl SuggestionRequest {
    pub fn validate(self) -> Result<ValidatedRequest, RequestProblem> {
        let (Some(field), Some(language)) = (non_blank(self.field), non_blank(self.language))
        else {
            return Err(RequestProblem::MissingRequired);
        };

        let field = field
            .parse::<FormField>()
            .map_err(|UnknownField(raw)| RequestProblem::UnsupportedField(raw))?;

        Ok(ValidatedRequest {
            field,
            language: Language::from_code(&language),
            existing_text: non_blank(self.existing_text),
            applicant_details: non_blank(self.applicant_details),
        })
    }
}

#[derive(Debug, Serialize)]
pub struct SuggestionResponse {
    pub suggestion: String,
}
