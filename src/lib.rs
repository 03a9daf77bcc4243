//! RateMySchedule upload API
//!
//! Accepts a schedule screenshot, stores it on disk, runs best-effort OCR on
//! raster images and answers with a parsed schedule (currently a fixed mock).

pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;
pub mod state;

pub use config::Config;
pub use error::{AppError, AppResult};
pub use handlers::create_router;
pub use state::AppState;
