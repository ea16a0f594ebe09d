use axum::{
    Json,
    extract::{
        Path,
        rejection::{JsonRejection, PathRejection},
    },
};
use serde::{Deserialize, Serialize};

use crate::{
    error::{AppError, AppResult},
    validation::{FormField, check_field},
};

#[derive(Deserialize)]
pub struct FieldValidationRequest {
    #[serde(default)]
    pub value: String,
}

#[derive(Serialize)]
pub struct FieldValidationResponse {
    pub field: FormField,
    pub value: String,
    pub valid: bool,
    pub error: String,
}

/// Live check of a single required field as the user types.
pub async fn validate_field(
    path: Result<Path<String>, PathRejection>,
    body: Result<Json<FieldValidationRequest>, JsonRejection>,
) -> AppResult<Json<FieldValidationResponse>> {
    let Path(field) = path.map_err(|e| AppError::validation(e.body_text()))?;
    let Json(payload) = body.map_err(|e| AppError::validation(e.body_text()))?;

    let field: FormField = field.parse().map_err(AppError::validation)?;
    let value = field.normalize(&payload.value);
    let check = check_field(field, &value);

    Ok(Json(FieldValidationResponse {
        field,
        value,
        valid: check.valid,
        error: check.error,
    }))
}
