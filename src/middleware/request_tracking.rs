use axum::{
    http::{HeaderMap, HeaderName, HeaderValue, Request},
    middleware::Next,
    response::Response,
};
use std::time::Instant;
use uuid::Uuid;

pub const REQUEST_ID_HEADER: &str = "x-request-id";

const SLOW_REQUEST_MS: u64 = 1000;

/// Tags the request with an id, echoes it on the response and logs one line
/// per round trip. Error statuses and slow requests log at warn.
pub async fn request_tracking_middleware<B>(mut request: Request<B>, next: Next<B>) -> Response {
    let started = Instant::now();
    let request_id = request_id_for(request.headers());
    let header = HeaderName::from_static(REQUEST_ID_HEADER);
    let value =
        HeaderValue::from_str(&request_id).unwrap_or_else(|_| HeaderValue::from_static("invalid"));
    request.headers_mut().insert(header.clone(), value.clone());

    let method = request.method().clone();
    let path = request.uri().path().to_string();

    let mut response = next.run(request).await;
    response.headers_mut().insert(header, value);

    let status = response.status();
    let duration_ms = started.elapsed().as_millis() as u64;
    let slow = duration_ms > SLOW_REQUEST_MS;

    if slow || status.is_client_error() || status.is_server_error() {
        tracing::warn!(%request_id, %method, %path, status = status.as_u16(), duration_ms, slow, "Request completed");
    } else {
        tracing::info!(%request_id, %method, %path, status = status.as_u16(), duration_ms, "Request completed");
    }

    response
}

/// Caller-supplied id when non-empty, otherwise a fresh v4 uuid.
fn request_id_for(headers: &HeaderMap) -> String {
    extract_request_id(headers)
        .filter(|id| !id.is_empty())
        .unwrap_or_else(|| Uuid::new_v4().to_string())
}

pub fn extract_request_id(headers: &HeaderMap) -> Option<String> {
    headers
        .get(REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
}
