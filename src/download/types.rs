//! Download request and result types

use std::fmt;
use std::path::PathBuf;

/// Files endpoint of the Drive v3 API; the file id is appended to it
pub const DEFAULT_BASE_URL: &str = "https://www.googleapis.com/drive/v3/files/";

/// Copy buffer size (4 KB) used between the response stream and the file
pub const DEFAULT_BUFFER_SIZE: usize = 4096;

/// Maximum number of error body bytes kept in a status error
pub const MAX_ERROR_BODY_BYTES: usize = 512;

/// Everything that determines the outgoing request
#[derive(Clone, PartialEq, Eq)]
pub struct DownloadRequest {
    pub base_url: String,
    pub file_id: String,
    pub access_token: String,
}

impl DownloadRequest {
    pub fn new(
        base_url: impl Into<String>,
        file_id: impl Into<String>,
        access_token: impl Into<String>,
    ) -> Self {
        Self {
            base_url: base_url.into(),
            file_id: file_id.into(),
            access_token: access_token.into(),
        }
    }

    /// `Authorization` header value sent with the request
    pub fn authorization(&self) -> String {
        format!("Bearer {}", self.access_token)
    }
}

// Keep the bearer token out of logs and panic messages
impl fmt::Debug for DownloadRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DownloadRequest")
            .field("base_url", &self.base_url)
            .field("file_id", &self.file_id)
            .field("access_token", &"<redacted>")
            .finish()
    }
}

/// Result of a completed download
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Downloaded {
    pub path: PathBuf,
    pub bytes: u64,
}
