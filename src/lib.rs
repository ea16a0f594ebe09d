pub mod config;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod validation;

use crate::config::Config;
use crate::error::AppResult;
use crate::services::{HttpProjectsApi, ProjectsApi, SubmissionService};
use axum::{
    Router,
    http::{HeaderValue, Method},
    middleware::from_fn,
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tracing_subscriber::EnvFilter;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub submissions: SubmissionService,
}

impl AppState {
    pub fn new(config: Config) -> AppResult<Self> {
        let api = HttpProjectsApi::new(&config.api())?;
        Ok(Self::with_api(config, Arc::new(api)))
    }

    pub fn with_api(config: Config, api: Arc<dyn ProjectsApi>) -> Self {
        Self {
            config: Arc::new(config),
            submissions: SubmissionService::new(api),
        }
    }
}

/// Router with CORS and request tracking applied.
pub fn create_app(state: Arc<AppState>) -> Router {
    let cors = cors_layer(&state.config.server().cors_origins);

    routes::create_router(state)
        .layer(cors)
        .layer(from_fn(middleware::request_tracking_middleware))
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(Any);

    if origins.iter().any(|origin| origin == "*") {
        return cors.allow_origin(Any);
    }

    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();
    cors.allow_origin(allowed)
}

pub fn init_tracing(config: &Config) {
    let logging = config.logging();
    let level_filter = match logging.level.as_str() {
        "trace" => "trace",
        "debug" => "debug",
        "info" => "info",
        "warn" => "warn",
        "error" => "error",
        _ => "info",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level_filter));

    match logging.format.as_str() {
        "json" => {
            tracing_subscriber::fmt().json().with_env_filter(filter).init();
        }
        _ => {
            tracing_subscriber::fmt().with_env_filter(filter).init();
        }
    }
}
