//! Download failure kinds

use std::io;
use thiserror::Error;

pub type DownloadResult<T> = Result<T, DownloadError>;

/// Why a download failed
///
/// Any failure means the destination must not be trusted to hold the file.
#[derive(Debug, Error)]
pub enum DownloadError {
    /// Server answered with a non-2xx status
    #[error("Failed to download file: {status}{}", format_message(.message))]
    Status {
        status: u16,
        /// Leading part of the error body, may be empty
        message: String,
    },

    /// Server answered 2xx without any payload
    #[error("Response body is null")]
    MissingBody,

    /// Network or filesystem fault
    #[error("I/O error")]
    Io(#[from] io::Error),
}

fn format_message(message: &str) -> String {
    if message.is_empty() {
        String::new()
    } else {
        format!(" - {}", message)
    }
}

impl DownloadError {
    pub fn status_code(&self) -> Option<u16> {
        match self {
            DownloadError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_missing_body(&self) -> bool {
        matches!(self, DownloadError::MissingBody)
    }

    /// Wrap an HTTP client error as an I/O failure, keeping it as the source
    pub(crate) fn transport(err: reqwest::Error) -> Self {
        let kind = if err.is_builder() {
            io::ErrorKind::InvalidInput
        } else {
            io::ErrorKind::Other
        };
        DownloadError::Io(io::Error::new(kind, err))
    }
}

#[cfg(test)]
mod tests {
    use super::DownloadError;
    use std::error::Error as _;
    use std::io;

    #[test]
    fn status_display_includes_code_and_message() {
        let err = DownloadError::Status {
            status: 404,
            message: "File not found".to_string(),
        };
        assert_eq!(err.to_string(), "Failed to download file: 404 - File not found");
        assert_eq!(err.status_code(), Some(404));
    }

    #[test]
    fn status_display_without_message() {
        let err = DownloadError::Status {
            status: 500,
            message: String::new(),
        };
        assert_eq!(err.to_string(), "Failed to download file: 500");
    }

    #[test]
    fn missing_body_has_no_status() {
        let err = DownloadError::MissingBody;
        assert!(err.is_missing_body());
        assert_eq!(err.status_code(), None);
        assert_eq!(err.to_string(), "Response body is null");
    }

    #[test]
    fn io_error_keeps_source() {
        let err: DownloadError = io::Error::new(io::ErrorKind::PermissionDenied, "denied").into();
        assert_eq!(err.to_string(), "I/O error");
        assert_eq!(err.source().unwrap().to_string(), "denied");
    }
}
