use axum::{extract::State, response::Json};
use tracing::debug;

use crate::models::{HealthResponse, UploadHealthResponse};
use crate::state::AppState;

/// Liveness check.
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    debug!("Health check requested");

    Json(HealthResponse {
        ok: true,
        env: state.config.environment.clone(),
    })
}

/// Upload service health, including whether OCR can run.
pub async fn upload_health_handler(State(state): State<AppState>) -> Json<UploadHealthResponse> {
    let ocr_available = state.ocr_available();
    debug!(ocr_available = ocr_available, "Upload health check requested");

    Json(UploadHealthResponse {
        ok: true,
        service: "upload".to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
        ocr_available,
    })
}
