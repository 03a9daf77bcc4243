use std::sync::Arc;
use tracing::info;

use crate::config::Config;
use crate::error::AppResult;
use crate::services::{ScheduleParser, TesseractOcr, TextExtractor, UploadStore};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub store: UploadStore,
    /// `None` when no OCR capability is installed.
    pub extractor: Option<Arc<dyn TextExtractor>>,
    pub parser: ScheduleParser,
}

impl AppState {
    /// Prepares the upload directory and checks for tesseract when OCR is enabled.
    pub async fn new(config: Config) -> AppResult<Self> {
        let store = UploadStore::new(config.upload_dir.clone()).await?;

        let extractor: Option<Arc<dyn TextExtractor>> = if config.ocr_enabled {
            TesseractOcr::detect(&config.tesseract_cmd)
                .await
                .map(|ocr| Arc::new(ocr) as Arc<dyn TextExtractor>)
        } else {
            info!("OCR disabled by configuration");
            None
        };

        Ok(Self {
            config: Arc::new(config),
            store,
            extractor,
            parser: ScheduleParser::new(),
        })
    }

    /// Replaces whatever OCR capability was detected.
    pub fn with_extractor(mut self, extractor: Option<Arc<dyn TextExtractor>>) -> Self {
        self.extractor = extractor;
        self
    }

    pub fn ocr_available(&self) -> bool {
        self.extractor.is_some()
    }
}
