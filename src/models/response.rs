use serde::{Deserialize, Serialize};

pub const UPLOAD_MESSAGE: &str = "File saved and OCR attempted";

#[derive(Debug, Serialize, Deserialize)]
pub struct UploadResponse {
    pub ok: bool,
    pub saved_as: String,
    pub is_image: bool,
    pub raw_text_preview: String,
    pub parsed: ParsedSchedule,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedSchedule {
    pub term: String,
    pub events: Vec<ScheduleEvent>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleEvent {
    pub title: String,
    /// 1 = Monday ... 5 = Friday
    pub day_of_week: u8,
    pub start_time: String,
    pub end_time: String,
    pub location: String,
    pub color: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub ok: bool,
    pub env: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct UploadHealthResponse {
    pub ok: bool,
    pub service: String,
    pub timestamp: String,
    pub ocr_available: bool,
}

impl UploadResponse {
    pub fn new(saved_as: String, is_image: bool, raw_text_preview: String, parsed: ParsedSchedule) -> Self {
        Self {
            ok: true,
            saved_as,
            is_image,
            raw_text_preview,
            parsed,
            message: UPLOAD_MESSAGE.to_string(),
        }
    }
}

impl ScheduleEvent {
    pub fn new(
        title: &str,
        day_of_week: u8,
        start_time: &str,
        end_time: &str,
        location: &str,
        color: &str,
    ) -> Self {
        Self {
            title: title.to_string(),
            day_of_week,
            start_time: start_time.to_string(),
            end_time: end_time.to_string(),
            location: location.to_string(),
            color: color.to_string(),
        }
    }
}
