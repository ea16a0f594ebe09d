use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
};
use axum_extra::extract::{Form, FormRejection};
use std::sync::Arc;

use crate::{
    AppState,
    middleware::extract_request_id,
    models::{FieldErrors, FormState, RawSubmission},
    services::RequestContext,
};

fn request_context(headers: &HeaderMap) -> RequestContext {
    RequestContext::new(extract_request_id(headers).unwrap_or_default())
}

async fn run_submission(
    state: &AppState,
    headers: &HeaderMap,
    raw: RawSubmission,
) -> (StatusCode, Json<FormState>) {
    let ctx = request_context(headers);
    let outcome = state.submissions.submit(&ctx, raw).await;
    let status = outcome.status_code();
    (status, Json(FormState::from(outcome)))
}

/// An undecodable body never reaches the rule set; no field carries a message.
fn unreadable_body(headers: &HeaderMap, detail: &str) -> (StatusCode, Json<FormState>) {
    let ctx = request_context(headers);
    tracing::info!(request_id = %ctx.request_id, detail = %detail, "Submission body rejected");
    (
        StatusCode::UNPROCESSABLE_ENTITY,
        Json(FormState::failed(FieldErrors::default())),
    )
}

/// Form-encoded submission; `notificationType` may repeat.
pub async fn submit_form(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    form: Result<Form<RawSubmission>, FormRejection>,
) -> impl IntoResponse {
    match form {
        Ok(Form(raw)) => run_submission(&state, &headers, raw).await,
        Err(rejection) => unreadable_body(&headers, &rejection.to_string()),
    }
}

pub async fn submit_json(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    body: Result<Json<RawSubmission>, JsonRejection>,
) -> impl IntoResponse {
    match body {
        Ok(Json(raw)) => run_submission(&state, &headers, raw).await,
        Err(rejection) => unreadable_body(&headers, &rejection.body_text()),
    }
}
