use async_trait::async_trait;
use std::io::Write;
use std::process::Stdio;
use std::time::Instant;
use tempfile::NamedTempFile;
use tokio::process::Command;
use tracing::{debug, info, warn};

use crate::error::{AppError, AppResult};
use crate::services::image_check;

pub const TESSERACT_MISSING: &str = "(tesseract not installed; run `brew install tesseract`)";
pub const NOT_A_RASTER_IMAGE: &str = "(not a raster image; skipping OCR)";

/// Longest prefix of the extracted text echoed back to the client, in characters.
pub const RAW_TEXT_PREVIEW_CHARS: usize = 300;

/// Something that can turn image bytes into text.
#[async_trait]
pub trait TextExtractor: Send + Sync {
    fn name(&self) -> &'static str;

    async fn extract_text(&self, image_data: &[u8]) -> AppResult<String>;
}

/// What happened when we tried to read text off an upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OcrOutcome {
    Text(String),
    Unavailable,
    NotAnImage,
    Failed(String),
}

impl OcrOutcome {
    pub fn into_text(self) -> String {
        match self {
            OcrOutcome::Text(text) => text,
            OcrOutcome::Unavailable => TESSERACT_MISSING.to_string(),
            OcrOutcome::NotAnImage => NOT_A_RASTER_IMAGE.to_string(),
            OcrOutcome::Failed(message) => format!("(ocr failed: {})", message),
        }
    }
}

/// Runs the extractor if there is one and the upload is an image. Never fails:
/// every problem is folded into the outcome.
pub async fn run_ocr(
    extractor: Option<&dyn TextExtractor>,
    is_image: bool,
    data: &[u8],
) -> OcrOutcome {
    let Some(extractor) = extractor else {
        return OcrOutcome::Unavailable;
    };
    if !is_image {
        return OcrOutcome::NotAnImage;
    }

    match extractor.extract_text(data).await {
        Ok(text) => OcrOutcome::Text(text),
        Err(AppError::OcrError { message }) => {
            warn!(extractor = extractor.name(), error = %message, "OCR failed");
            OcrOutcome::Failed(message)
        }
        Err(e) => {
            warn!(extractor = extractor.name(), error = %e, "OCR failed");
            OcrOutcome::Failed(e.to_string())
        }
    }
}

pub fn preview(text: &str) -> String {
    text.chars().take(RAW_TEXT_PREVIEW_CHARS).collect()
}

/// Shells out to the `tesseract` CLI.
pub struct TesseractOcr {
    command: String,
}

impl TesseractOcr {
    /// Returns the extractor only if `<command> --version` runs successfully.
    pub async fn detect(command: &str) -> Option<Self> {
        if Self::is_tesseract_available(command).await {
            info!(command = command, "Tesseract OCR available");
            Some(Self {
                command: command.to_string(),
            })
        } else {
            warn!(command = command, "Tesseract OCR not available; uploads will skip text extraction");
            None
        }
    }

    pub async fn is_tesseract_available(command: &str) -> bool {
        Command::new(command)
            .arg("--version")
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .await
            .map(|status| status.success())
            .unwrap_or(false)
    }
}

#[async_trait]
impl TextExtractor for TesseractOcr {
    fn name(&self) -> &'static str {
        "tesseract"
    }

    async fn extract_text(&self, image_data: &[u8]) -> AppResult<String> {
        let start = Instant::now();
        debug!("Starting OCR extraction from image ({} bytes)", image_data.len());

        // Leptonica cannot read every format we accept (TGA, ICO, QOI, EXR...),
        // so hand tesseract a PNG of the decoded pixels.
        let owned = image_data.to_vec();
        let png = tokio::task::spawn_blocking(move || image_check::to_png(&owned))
            .await
            .map_err(|e| AppError::ocr(format!("Image conversion task failed: {}", e)))??;

        // tesseract wants a path, so stage the PNG in a temp file that is
        // removed when `staged` drops.
        let mut staged = NamedTempFile::new()
            .map_err(|e| AppError::ocr(format!("Failed to create temporary file: {}", e)))?;
        staged
            .write_all(&png)
            .map_err(|e| AppError::ocr(format!("Failed to write image to temporary file: {}", e)))?;

        let output = Command::new(&self.command)
            .arg(staged.path())
            .arg("stdout")
            .stdin(Stdio::null())
            .output()
            .await
            .map_err(|e| AppError::ocr(format!("Failed to run {}: {}", self.command, e)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(AppError::ocr(format!(
                "{} exited with {}: {}",
                self.command,
                output.status,
                stderr.trim()
            )));
        }

        let text = String::from_utf8_lossy(&output.stdout).into_owned();
        info!(
            "OCR extraction completed in {}ms, extracted {} characters",
            start.elapsed().as_millis(),
            text.len()
        );
        Ok(text)
    }
}
