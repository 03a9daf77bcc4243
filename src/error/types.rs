use axum::{
    extract::multipart::MultipartError,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::middleware::logging::current_request_id;

pub type AppResult<T> = Result<T, AppError>;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("empty file upload")]
    EmptyUpload,

    #[error("Missing file in request")]
    MissingFile,

    #[error("File too large: upload exceeds limit of {limit_mb}MB")]
    FileTooLarge { limit_mb: usize },

    #[error("Invalid multipart body: {message}")]
    InvalidMultipart { message: String },

    #[error("OCR processing failed: {message}")]
    OcrError { message: String },

    #[error("Internal server error: {message}")]
    Internal { message: String },
}

impl AppError {
    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::EmptyUpload => "EMPTY_UPLOAD",
            AppError::MissingFile => "MISSING_FILE",
            AppError::FileTooLarge { .. } => "FILE_TOO_LARGE",
            AppError::InvalidMultipart { .. } => "INVALID_MULTIPART",
            AppError::OcrError { .. } => "OCR_ERROR",
            AppError::Internal { .. } => "INTERNAL_ERROR",
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::EmptyUpload => StatusCode::BAD_REQUEST,
            AppError::MissingFile => StatusCode::BAD_REQUEST,
            AppError::FileTooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
            AppError::InvalidMultipart { .. } => StatusCode::BAD_REQUEST,
            AppError::OcrError { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let error_code = self.error_code();
        let message = self.to_string();
        let request_id = current_request_id();
        let timestamp = chrono::Utc::now().to_rfc3339();

        if status.is_server_error() {
            tracing::error!(
                error_code = error_code,
                status_code = %status,
                request_id = %request_id,
                error_message = %message,
                "API error occurred"
            );
        } else {
            tracing::warn!(
                error_code = error_code,
                status_code = %status,
                request_id = %request_id,
                error_message = %message,
                "Request rejected"
            );
        }

        let body = Json(json!({
            "ok": false,
            "detail": message,
            "error": {
                "code": error_code,
                "message": message,
                "request_id": request_id,
                "timestamp": timestamp
            }
        }));

        (status, body).into_response()
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::Internal {
            message: err.to_string(),
        }
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Internal {
            message: format!("IO error: {}", err),
        }
    }
}

impl From<MultipartError> for AppError {
    fn from(err: MultipartError) -> Self {
        match err.status() {
            StatusCode::PAYLOAD_TOO_LARGE => AppError::FileTooLarge { limit_mb: 0 },
            _ => AppError::InvalidMultipart {
                message: err.body_text(),
            },
        }
    }
}

impl AppError {
    pub fn ocr(message: impl Into<String>) -> Self {
        AppError::OcrError {
            message: message.into(),
        }
    }

    /// Fills in the configured limit on a size rejection that came from the
    /// body-limit layer, which does not know it.
    pub fn with_size_limit(self, limit_mb: usize) -> Self {
        match self {
            AppError::FileTooLarge { .. } => AppError::FileTooLarge { limit_mb },
            other => other,
        }
    }
}
