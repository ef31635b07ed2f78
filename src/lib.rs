//! Bearer-authorized single-file downloads from a storage files endpoint.
//!
//! ```no_run
//! # async fn run() -> Result<(), drive_dl::DownloadError> {
//! let downloaded = drive_dl::download_file("1AbCdEf", "report.pdf", "ya29.token").await?;
//! println!("{} bytes", downloaded.bytes);
//! # Ok(())
//! # }
//! ```

pub mod blocking;
mod download;

pub use download::{
    download_file, DownloadError, DownloadRequest, DownloadResult, Downloaded, Downloader,
    DownloaderConfig, DEFAULT_BASE_URL, DEFAULT_BUFFER_SIZE, MAX_ERROR_BODY_BYTES,
};
