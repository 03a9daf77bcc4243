pub mod health;
pub mod upload;

pub use health::*;
pub use upload::*;

use anyhow::Result;
use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{
    cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

use crate::middleware::logging::logging_middleware;
use crate::state::AppState;

/// Builds the full application router.
pub fn create_router(state: AppState) -> Result<Router> {
    let origin = state.config.cors_origin()?;
    let body_limit = state.config.max_file_size_bytes();

    // Credentials rule out wildcard methods/headers, so mirror the preflight instead.
    // Requests from any other origin get no allow-origin header.
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::list([origin]))
        .allow_credentials(true)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request());

    let router = Router::new()
        .route("/health", get(health_handler))
        .route("/upload", post(upload_handler))
        .route("/upload/", post(upload_handler))
        .route("/upload/health", get(upload_health_handler))
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(axum::middleware::from_fn(logging_middleware))
                .layer(cors)
                .layer(DefaultBodyLimit::max(body_limit)),
        );

    Ok(router)
}
