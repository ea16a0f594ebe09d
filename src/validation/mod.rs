pub mod rules;
pub mod submission;

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use validator::ValidationError;

pub use rules::{validate_description, validate_product_line, validate_project_code};
pub use submission::field_errors;

/// The three required fields of the submission form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FormField {
    ProjectCode,
    Description,
    ProductLine,
}

impl FormField {
    pub fn as_str(&self) -> &'static str {
        match self {
            FormField::ProjectCode => "projectCode",
            FormField::Description => "description",
            FormField::ProductLine => "productLine",
        }
    }

    /// Input normalization applied as the user types.
    pub fn normalize(&self, value: &str) -> String {
        match self {
            FormField::ProjectCode => value.to_uppercase(),
            FormField::Description | FormField::ProductLine => value.to_string(),
        }
    }

    pub fn validate(&self, value: &str) -> Result<(), ValidationError> {
        match self {
            FormField::ProjectCode => validate_project_code(value),
            FormField::Description => validate_description(value),
            FormField::ProductLine => validate_product_line(value),
        }
    }
}

impl FromStr for FormField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "projectCode" => Ok(FormField::ProjectCode),
            "description" => Ok(FormField::Description),
            "productLine" => Ok(FormField::ProductLine),
            other => Err(format!("Unknown form field: {}", other)),
        }
    }
}

/// Live-validation verdict for one field; `error` is empty when valid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldCheck {
    pub valid: bool,
    pub error: String,
}

impl From<Result<(), ValidationError>> for FieldCheck {
    fn from(result: Result<(), ValidationError>) -> Self {
        match result {
            Ok(()) => FieldCheck {
                valid: true,
                error: String::new(),
            },
            Err(e) => FieldCheck {
                valid: false,
                error: e
                    .message
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| e.code.to_string()),
            },
        }
    }
}

pub fn check_field(field: FormField, value: &str) -> FieldCheck {
    field.validate(value).into()
}
