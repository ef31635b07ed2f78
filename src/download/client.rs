//! Public download entry points

use reqwest::Client;
use std::path::Path;

use super::config::DownloaderConfig;
use super::error::{DownloadError, DownloadResult};
use super::types::{DownloadRequest, Downloaded};
use super::worker::download_file_internal;

/// Reusable download handle
///
/// Holds one HTTP client so repeated downloads share its connection pool.
/// Cloning is cheap.
#[derive(Debug, Clone)]
pub struct Downloader {
    client: Client,
    config: DownloaderConfig,
}

impl Downloader {
    /// Build a handle with a fresh HTTP client
    pub fn new(config: DownloaderConfig) -> DownloadResult<Self> {
        let client = Client::builder()
            .build()
            .map_err(DownloadError::transport)?;
        Ok(Self::with_client(client, config))
    }

    /// Use an already configured HTTP client
    pub fn with_client(client: Client, config: DownloaderConfig) -> Self {
        Self { client, config }
    }

    /// Settings this handle was built with
    pub fn config(&self) -> &DownloaderConfig {
        &self.config
    }

    /// Describe the request that `download` would send for this file
    pub fn request(&self, file_id: &str, access_token: &str) -> DownloadRequest {
        DownloadRequest::new(self.config.base_url.clone(), file_id, access_token)
    }

    /// Download `file_id` into `output_path`, replacing any existing file
    pub async fn download(
        &self,
        file_id: &str,
        output_path: impl AsRef<Path>,
        access_token: &str,
    ) -> DownloadResult<Downloaded> {
        let request = self.request(file_id, access_token);
        self.download_request(&request, output_path).await
    }

    /// Like `download`, for a prepared request descriptor
    pub async fn download_request(
        &self,
        request: &DownloadRequest,
        output_path: impl AsRef<Path>,
    ) -> DownloadResult<Downloaded> {
        download_file_internal(
            &self.client,
            request,
            output_path.as_ref(),
            self.config.effective_buffer_size(),
        )
        .await
    }
}

/// Download a file from the default endpoint with a one-off client
pub async fn download_file(
    file_id: &str,
    output_path: impl AsRef<Path>,
    access_token: &str,
) -> DownloadResult<Downloaded> {
    Downloader::new(DownloaderConfig::default())?
        .download(file_id, output_path, access_token)
        .await
}

#[cfg(test)]
mod tests {
    use super::Downloader;
    use crate::download::config::DownloaderConfig;

    #[test]
    fn request_uses_configured_base_url() {
        let config = DownloaderConfig::default().with_base_url("http://127.0.0.1:1/files/");
        let downloader = Downloader::new(config).unwrap();

        let request = downloader.request("abc", "token");
        assert_eq!(request.base_url, "http://127.0.0.1:1/files/");
        assert_eq!(request.file_id, "abc");
        assert_eq!(request.access_token, "token");
    }
}
