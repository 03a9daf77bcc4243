use once_cell::sync::Lazy;

use crate::models::{ParsedSchedule, ScheduleEvent};

static MOCK_SCHEDULE: Lazy<ParsedSchedule> = Lazy::new(|| ParsedSchedule {
    term: "Fall 2025".to_string(),
    events: vec![
        ScheduleEvent::new("MATH 101", 1, "09:00", "10:15", "ENG-201", "#A6E3E9"),
        ScheduleEvent::new("CS 160", 2, "11:00", "12:15", "CS-105", "#FFADAD"),
        ScheduleEvent::new("HIST 210", 3, "13:30", "14:45", "HUM-12", "#FFD6A5"),
    ],
});

/// Turns OCR text into a schedule.
///
/// Placeholder: always returns the same three-class mock so clients have
/// something to render. The OCR text is accepted so a real parser can slot in
/// without touching the upload handler.
#[derive(Debug, Clone, Default)]
pub struct ScheduleParser;

impl ScheduleParser {
    pub fn new() -> Self {
        Self
    }

    pub fn parse(&self, _raw_text: &str) -> ParsedSchedule {
        MOCK_SCHEDULE.clone()
    }
}
