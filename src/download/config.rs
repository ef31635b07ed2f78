use serde::{Deserialize, Serialize};

use super::types::{DEFAULT_BASE_URL, DEFAULT_BUFFER_SIZE};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DownloaderConfig {
    /// Endpoint the file id is appended to
    pub base_url: String,
    /// Size of the intermediate copy buffer in bytes
    pub buffer_size: usize,
}

impl Default for DownloaderConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            buffer_size: DEFAULT_BUFFER_SIZE,
        }
    }
}

impl DownloaderConfig {
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_buffer_size(mut self, buffer_size: usize) -> Self {
        self.buffer_size = buffer_size;
        self
    }

    /// Buffer size actually used for copying (never zero)
    pub(crate) fn effective_buffer_size(&self) -> usize {
        self.buffer_size.max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::DownloaderConfig;
    use crate::download::types::{DEFAULT_BASE_URL, DEFAULT_BUFFER_SIZE};

    #[test]
    fn default_targets_drive_files_endpoint() {
        let config = DownloaderConfig::default();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.buffer_size, DEFAULT_BUFFER_SIZE);
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let config: DownloaderConfig =
            serde_json::from_str(r#"{"base_url":"http://localhost:9000/files/"}"#).unwrap();
        assert_eq!(config.base_url, "http://localhost:9000/files/");
        assert_eq!(config.buffer_size, DEFAULT_BUFFER_SIZE);
    }

    #[test]
    fn zero_buffer_size_is_clamped() {
        let config = DownloaderConfig::default().with_buffer_size(0);
        assert_eq!(config.effective_buffer_size(), 1);
    }
}
