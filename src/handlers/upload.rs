use axum::{
    extract::{Multipart, State},
    response::Json,
};
use std::time::Instant;
use tracing::{debug, error, info};

use crate::error::{AppError, AppResult};
use crate::middleware::logging::current_request_id;
use crate::models::{UploadResponse, UploadedFile, FALLBACK_FILE_NAME};
use crate::services::{image_check, ocr_service};
use crate::state::AppState;

/// Multipart field the client puts the schedule file in.
pub const FILE_FIELD: &str = "file";

pub async fn upload_handler(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> AppResult<Json<UploadResponse>> {
    let start = Instant::now();
    let request_id = current_request_id();

    info!(request_id = %request_id, "Starting schedule upload request");

    let file = extract_file_from_multipart(&mut multipart)
        .await
        .map_err(|e| e.with_size_limit(state.config.max_file_size_mb))?;

    info!(
        request_id = %request_id,
        file_name = %file.name,
        file_size = file.size,
        "File extracted from multipart form"
    );

    let is_image = image_check::classify(file.content.clone()).await;
    debug!(request_id = %request_id, is_image = is_image, "Upload classified");

    let saved_path = match state.store.save(&file).await {
        Ok(path) => path,
        Err(e) => {
            error!(request_id = %request_id, error = %e, "Failed to persist upload");
            return Err(e);
        }
    };

    let outcome = ocr_service::run_ocr(state.extractor.as_deref(), is_image, &file.content).await;
    let raw_text = outcome.into_text();
    let parsed = state.parser.parse(&raw_text);

    let response = UploadResponse::new(
        saved_path.display().to_string(),
        is_image,
        ocr_service::preview(&raw_text),
        parsed,
    );

    info!(
        request_id = %request_id,
        saved_as = %response.saved_as,
        is_image = is_image,
        text_length = raw_text.len(),
        total_time_ms = start.elapsed().as_millis() as u64,
        "Upload request completed"
    );

    Ok(Json(response))
}

async fn extract_file_from_multipart(multipart: &mut Multipart) -> AppResult<UploadedFile> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }

        let file_name = field
            .file_name()
            .unwrap_or(FALLBACK_FILE_NAME)
            .to_string();
        let content_type = field.content_type().map(|ct| ct.to_string());

        let data = field.bytes().await?;
        if data.is_empty() {
            return Err(AppError::EmptyUpload);
        }

        let mut file = UploadedFile::new(file_name, data);
        if let Some(mime_type) = content_type {
            file = file.with_mime_type(mime_type);
        }

        debug!(
            "Extracted file: {} ({} bytes, type: {:?})",
            file.name,
            file.size,
            file.mime_type
        );

        return Ok(file);
    }

    Err(AppError::MissingFile)
}
