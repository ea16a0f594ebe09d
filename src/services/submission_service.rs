use axum::http::StatusCode;
use std::sync::Arc;
use validator::Validate;

use crate::{
    models::{
        FieldErrors, FormState, NotificationPreference, NotificationType, ProductLine,
        ProjectSubmission, RawSubmission,
    },
    services::{context::RequestContext, projects_api::ProjectsApi},
    validation::field_errors,
};

pub const UNEXPECTED_ERROR: &str = "An unexpected error occurred";
pub const INVALID_PRODUCT_LINE: &str = "Invalid product line";

/// Terminal state of one submission attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    /// The projects API returned 2xx.
    Accepted { project_code: String },
    /// Local validation failed; nothing was sent.
    Rejected(FieldErrors),
    /// The projects API was unreachable or answered non-2xx.
    Failed(FieldErrors),
}

impl SubmissionOutcome {
    pub fn status_code(&self) -> StatusCode {
        match self {
            SubmissionOutcome::Accepted { .. } => StatusCode::OK,
            SubmissionOutcome::Rejected(_) => StatusCode::UNPROCESSABLE_ENTITY,
            SubmissionOutcome::Failed(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

impl From<SubmissionOutcome> for FormState {
    fn from(outcome: SubmissionOutcome) -> Self {
        match outcome {
            SubmissionOutcome::Accepted { project_code } => FormState::accepted(project_code),
            SubmissionOutcome::Rejected(errors) | SubmissionOutcome::Failed(errors) => {
                FormState::failed(errors)
            }
        }
    }
}

/// Turns rule-checked raw input into the typed API payload.
///
/// Only the product line can produce a field message here; a malformed
/// notification preference rejects the submission without one.
pub fn build_payload(raw: RawSubmission) -> Result<ProjectSubmission, FieldErrors> {
    let product_line: ProductLine = raw
        .product_line()
        .parse()
        .map_err(|_| FieldErrors::product_line(INVALID_PRODUCT_LINE))?;

    let wants_notifications = match raw.wants_notifications.as_deref() {
        None => NotificationPreference::default(),
        Some(value) => value.parse::<NotificationPreference>().map_err(|e: String| {
            tracing::warn!(error = %e, "Rejected notification preference");
            FieldErrors::default()
        })?,
    };

    let mut notification_type: Vec<NotificationType> = Vec::new();
    if wants_notifications == NotificationPreference::Yes {
        for value in &raw.notification_type {
            let kind: NotificationType = value.parse().map_err(|e: String| {
                tracing::warn!(error = %e, "Rejected notification type");
                FieldErrors::default()
            })?;
            if !notification_type.contains(&kind) {
                notification_type.push(kind);
            }
        }
    }

    Ok(ProjectSubmission {
        project_code: raw.project_code.unwrap_or_default(),
        description: raw.description.unwrap_or_default(),
        product_line,
        wants_notifications,
        notification_type,
    })
}

#[derive(Clone)]
pub struct SubmissionService {
    api: Arc<dyn ProjectsApi>,
}

impl SubmissionService {
    pub fn new(api: Arc<dyn ProjectsApi>) -> Self {
        Self { api }
    }

    pub async fn submit(&self, ctx: &RequestContext, raw: RawSubmission) -> SubmissionOutcome {
        if let Err(errors) = raw.validate() {
            let errors = field_errors(&errors);
            tracing::info!(request_id = %ctx.request_id, ?errors, "Submission failed validation");
            return SubmissionOutcome::Rejected(errors);
        }

        let payload = match build_payload(raw) {
            Ok(payload) => payload,
            Err(errors) => {
                tracing::info!(request_id = %ctx.request_id, ?errors, "Submission payload rejected");
                return SubmissionOutcome::Rejected(errors);
            }
        };

        match self.api.create_project(&payload).await {
            Ok(()) => {
                tracing::info!(
                    request_id = %ctx.request_id,
                    project_code = %payload.project_code,
                    product_line = %payload.product_line,
                    "Project submission accepted"
                );
                SubmissionOutcome::Accepted {
                    project_code: payload.project_code,
                }
            }
            Err(e) => {
                tracing::error!(
                    request_id = %ctx.request_id,
                    project_code = %payload.project_code,
                    remote = e.is_remote(),
                    error = %e,
                    "Project submission could not be saved"
                );
                SubmissionOutcome::Failed(FieldErrors::project_code(UNEXPECTED_ERROR))
            }
        }
    }
}
