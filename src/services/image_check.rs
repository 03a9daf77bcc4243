use bytes::Bytes;
use image::{DynamicImage, ImageOutputFormat};
use std::io::Cursor;
use tracing::debug;

use crate::error::{AppError, AppResult};

/// Decodes the bytes as an image purely to classify the upload. Any decode
/// error (PDFs, SVGs, truncated files) just means "not an image".
pub fn is_raster_image(data: &[u8]) -> bool {
    match image::load_from_memory(data) {
        Ok(img) => {
            debug!(width = img.width(), height = img.height(), "Upload decoded as raster image");
            true
        }
        Err(e) => {
            debug!(error = %e, "Upload is not a decodable raster image");
            false
        }
    }
}

/// [`is_raster_image`] on the blocking pool; decoding a large image is CPU-bound.
pub async fn classify(data: Bytes) -> bool {
    tokio::task::spawn_blocking(move || is_raster_image(&data))
        .await
        .unwrap_or(false)
}

/// Decodes any format `image` understands and re-encodes it as PNG, which
/// every tesseract build can read.
pub fn to_png(data: &[u8]) -> AppResult<Vec<u8>> {
    let img = image::load_from_memory(data)
        .map_err(|e| AppError::ocr(format!("Failed to decode image: {}", e)))?;

    // Float formats (HDR, EXR) have no PNG encoding; 8-bit is plenty for OCR.
    let img = DynamicImage::ImageRgba8(img.to_rgba8());

    let mut png = Cursor::new(Vec::new());
    img.write_to(&mut png, ImageOutputFormat::Png)
        .map_err(|e| AppError::ocr(format!("Failed to re-encode image as PNG: {}", e)))?;
    Ok(png.into_inner())
}
