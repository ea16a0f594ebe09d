use std::borrow::Cow;
use validator::ValidationError;

pub const PROJECT_CODE_REQUIRED: &str = "Project code is required";
pub const PROJECT_CODE_FORMAT: &str =
    "Project code must be 3 uppercase letters, a hyphen, and 3 numbers (e.g., ABC-123)";
pub const DESCRIPTION_REQUIRED: &str = "Project description is required";
pub const DESCRIPTION_TOO_SHORT: &str = "Description must be at least 10 characters";
pub const PRODUCT_LINE_REQUIRED: &str = "Product line is required";

pub const DESCRIPTION_MIN_CHARS: usize = 10;

fn rule_error(code: &'static str, message: &'static str) -> ValidationError {
    let mut error = ValidationError::new(code);
    error.message = Some(Cow::Borrowed(message));
    error
}

/// `^[A-Z]{3}-[0-9]{3}$`
pub fn is_project_code_format(value: &str) -> bool {
    let bytes = value.as_bytes();
    bytes.len() == 7
        && bytes[..3].iter().all(u8::is_ascii_uppercase)
        && bytes[3] == b'-'
        && bytes[4..].iter().all(u8::is_ascii_digit)
}

pub fn validate_project_code(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(rule_error("required", PROJECT_CODE_REQUIRED));
    }
    if !is_project_code_format(value) {
        return Err(rule_error("invalid_format", PROJECT_CODE_FORMAT));
    }
    Ok(())
}

pub fn validate_description(value: &str) -> Result<(), ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(rule_error("required", DESCRIPTION_REQUIRED));
    }
    if trimmed.chars().count() < DESCRIPTION_MIN_CHARS {
        return Err(rule_error("too_short", DESCRIPTION_TOO_SHORT));
    }
    Ok(())
}

/// Membership in [`ProductLine`](crate::models::ProductLine) is left to the selector.
pub fn validate_product_line(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(rule_error("required", PRODUCT_LINE_REQUIRED));
    }
    Ok(())
}
