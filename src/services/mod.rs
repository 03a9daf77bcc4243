pub mod image_check;
pub mod ocr_service;
pub mod schedule_parser;
pub mod upload_store;

pub use ocr_service::{OcrOutcome, TesseractOcr, TextExtractor};
pub use schedule_parser::ScheduleParser;
pub use upload_store::UploadStore;
