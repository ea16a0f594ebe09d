use serde::{Deserialize, Serialize};

/// Per-field messages for the three required fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldErrors {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_line: Option<String>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.project_code.is_none() && self.description.is_none() && self.product_line.is_none()
    }

    pub fn project_code(message: impl Into<String>) -> Self {
        Self {
            project_code: Some(message.into()),
            ..Self::default()
        }
    }

    pub fn product_line(message: impl Into<String>) -> Self {
        Self {
            product_line: Some(message.into()),
            ..Self::default()
        }
    }
}

/// Exit state of a submission as seen by the form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormState {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<FieldErrors>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_code: Option<String>,
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            success: false,
            errors: Some(FieldErrors::default()),
            project_code: Some(String::new()),
        }
    }
}

impl FormState {
    pub fn accepted(project_code: impl Into<String>) -> Self {
        Self {
            success: true,
            errors: None,
            project_code: Some(project_code.into()),
        }
    }

    pub fn failed(errors: FieldErrors) -> Self {
        Self {
            success: false,
            errors: Some(errors),
            project_code: None,
        }
    }
}
