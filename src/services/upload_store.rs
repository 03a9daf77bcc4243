use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::info;

use crate::error::AppResult;
use crate::models::UploadedFile;

/// Flat directory of saved uploads, named `<epoch-seconds>_<sanitized-name>`.
///
/// Nothing is ever read back or cleaned up. Two uploads with the same name in
/// the same second land on the same path and the later one wins.
#[derive(Debug, Clone)]
pub struct UploadStore {
    base_path: PathBuf,
}

impl UploadStore {
    /// Creates the directory if needed and resolves it to an absolute path so
    /// that `saved_as` is meaningful to whoever reads it.
    pub async fn new(base_path: impl Into<PathBuf>) -> AppResult<Self> {
        let base_path = base_path.into();
        if !base_path.exists() {
            fs::create_dir_all(&base_path).await?;
        }
        let base_path = fs::canonicalize(&base_path).await?;
        info!(upload_dir = %base_path.display(), "Upload directory ready");
        Ok(Self { base_path })
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    pub fn file_name_for(file: &UploadedFile, timestamp: i64) -> String {
        format!("{}_{}", timestamp, file.sanitized_name())
    }

    pub async fn save(&self, file: &UploadedFile) -> AppResult<PathBuf> {
        self.save_at(file, chrono::Utc::now().timestamp()).await
    }

    pub async fn save_at(&self, file: &UploadedFile, timestamp: i64) -> AppResult<PathBuf> {
        let path = self.base_path.join(Self::file_name_for(file, timestamp));
        fs::write(&path, &file.content).await?;
        info!(path = %path.display(), bytes = file.size, "Upload persisted");
        Ok(path)
    }
}
