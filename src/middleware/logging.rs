use axum::{
    extract::Request,
    http::{HeaderName, HeaderValue},
    middleware::Next,
    response::Response,
};
use std::time::Instant;
use uuid::Uuid;

pub static REQUEST_ID_HEADER: HeaderName = HeaderName::from_static("x-request-id");

tokio::task_local! {
    static CURRENT_REQUEST_ID: String;
}

fn new_request_id() -> String {
    Uuid::new_v4().to_string()[..8].to_string()
}

/// Id of the request being served, as assigned by [`logging_middleware`].
/// Outside the middleware a fresh short id is minted.
pub fn current_request_id() -> String {
    CURRENT_REQUEST_ID
        .try_with(|id| id.clone())
        .unwrap_or_else(|_| new_request_id())
}

pub async fn logging_middleware(mut request: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = request.method().clone();
    let uri = request.uri().clone();
    let version = request.version();

    // Keep a caller-supplied id so logs can be correlated across services.
    let request_id = match request.headers().get(&REQUEST_ID_HEADER) {
        Some(existing) => existing.clone(),
        None => {
            let value = HeaderValue::from_str(&new_request_id())
                .unwrap_or_else(|_| HeaderValue::from_static("unknown"));
            request.headers_mut().insert(REQUEST_ID_HEADER.clone(), value.clone());
            value
        }
    };
    let request_id_str = request_id.to_str().unwrap_or("invalid").to_string();

    tracing::info!(
        request_id = %request_id_str,
        method = %method,
        uri = %uri,
        version = ?version,
        "Request started"
    );

    // Handlers and error responses read the id back through `current_request_id`.
    let mut response = CURRENT_REQUEST_ID
        .scope(request_id_str.clone(), next.run(request))
        .await;

    let duration = start.elapsed();
    let status = response.status();

    tracing::info!(
        request_id = %request_id_str,
        method = %method,
        uri = %uri,
        status = %status,
        duration_ms = %duration.as_millis(),
        "Request completed"
    );

    response.headers_mut().insert(REQUEST_ID_HEADER.clone(), request_id);
    response
}
