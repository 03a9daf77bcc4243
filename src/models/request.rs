use bytes::Bytes;

/// Filename used when the client sends none, or one that sanitizes to nothing.
pub const FALLBACK_FILE_NAME: &str = "upload";

#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub name: String,
    pub size: usize,
    pub content: Bytes,
    pub mime_type: Option<String>,
}

impl UploadedFile {
    pub fn new(name: impl Into<String>, content: impl Into<Bytes>) -> Self {
        let content = content.into();
        let size = content.len();
        Self {
            name: name.into(),
            size,
            content,
            mime_type: None,
        }
    }

    pub fn with_mime_type(mut self, mime_type: String) -> Self {
        self.mime_type = Some(mime_type);
        self
    }

    /// The name this file is stored under, minus the timestamp prefix.
    pub fn sanitized_name(&self) -> String {
        sanitize_file_name(&self.name)
    }
}

/// Keeps only the last path component of a client-supplied name and swaps
/// spaces for underscores, so the result can never leave the upload directory.
pub fn sanitize_file_name(name: &str) -> String {
    let base = name.rsplit(['/', '\\']).next().unwrap_or("");

    match base {
        "" | "." | ".." => FALLBACK_FILE_NAME.to_string(),
        base => base.replace(' ', "_"),
    }
}
