//! Blocking download entry points
//!
//! The calling thread blocks for the whole request and copy. These must not be
//! called from within an async runtime.

use std::io;
use std::path::Path;
use tokio::runtime::{Builder, Runtime};

use crate::download::{self, DownloadResult, Downloaded, DownloaderConfig};

/// Blocking counterpart of [`crate::Downloader`]
///
/// Owns a current-thread runtime that drives every download, so pooled
/// connections stay valid between calls.
#[derive(Debug)]
pub struct Downloader {
    inner: download::Downloader,
    runtime: Runtime,
}

impl Downloader {
    /// Start the private runtime and build the HTTP client
    pub fn new(config: DownloaderConfig) -> DownloadResult<Self> {
        let runtime = Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| io::Error::new(e.kind(), format!("Failed to start runtime: {}", e)))?;
        let inner = download::Downloader::new(config)?;
        Ok(Self { inner, runtime })
    }

    /// Settings this handle was built with
    pub fn config(&self) -> &DownloaderConfig {
        self.inner.config()
    }

    /// Download `file_id` into `output_path`, replacing any existing file
    pub fn download(
        &self,
        file_id: &str,
        output_path: impl AsRef<Path>,
        access_token: &str,
    ) -> DownloadResult<Downloaded> {
        self.runtime
            .block_on(self.inner.download(file_id, output_path, access_token))
    }
}

/// Blocking [`crate::download_file`]
pub fn download_file(
    file_id: &str,
    output_path: impl AsRef<Path>,
    access_token: &str,
) -> DownloadResult<Downloaded> {
    Downloader::new(DownloaderConfig::default())?.download(file_id, output_path, access_token)
}
