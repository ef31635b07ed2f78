//! File download module
//!
//! Fetches one file from a storage files endpoint with a bearer token:
//! - Request URL is the configured base endpoint joined with the file id
//! - Response body is streamed to disk through a fixed-size buffer
//! - Destination is replaced atomically, never left half written
//! - Failures are reported as a single `DownloadError`

mod client;
mod config;
mod error;
mod types;
mod worker;

pub use client::{download_file, Downloader};
pub use config::DownloaderConfig;
pub use error::{DownloadError, DownloadResult};
pub use types::{
    DownloadRequest, Downloaded, DEFAULT_BASE_URL, DEFAULT_BUFFER_SIZE, MAX_ERROR_BODY_BYTES,
};
