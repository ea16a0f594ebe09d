use validator::{Validate, ValidationErrors};

use super::FormField;
use crate::models::{FieldErrors, RawSubmission};

impl Validate for RawSubmission {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        let mut failed = false;

        let checks = [
            (FormField::ProjectCode, self.project_code()),
            (FormField::Description, self.description()),
            (FormField::ProductLine, self.product_line()),
        ];
        for (field, value) in checks {
            if let Err(e) = field.validate(value) {
                errors.add(field.as_str(), e);
                failed = true;
            }
        }

        if failed { Err(errors) } else { Ok(()) }
    }
}

/// First message reported for each required field.
pub fn field_errors(errors: &ValidationErrors) -> FieldErrors {
    let by_field = errors.field_errors();
    let first = |field: FormField| {
        by_field
            .get(field.as_str())
            .and_then(|list| list.first())
            .map(|e| {
                e.message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("Validation failed for field: {}", field.as_str()))
            })
    };

    FieldErrors {
        project_code: first(FormField::ProjectCode),
        description: first(FormField::Description),
        product_line: first(FormField::ProductLine),
    }
}
