pub mod health;
pub mod submissions;
pub mod validation;

use crate::AppState;
use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route("/submit", post(submissions::submit_form))
        .route("/api/submissions", post(submissions::submit_json))
        .route("/api/validate/:field", post(validation::validate_field))
        .with_state(state)
}
