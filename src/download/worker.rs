//! Download worker - URL construction and streaming copy to disk

use futures_util::TryStreamExt;
use log::{debug, info, warn};
use reqwest::{Client, Url};
use std::fs::Permissions;
use std::io;
use std::path::{Path, PathBuf};
use tokio::fs::File;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio_util::io::StreamReader;

use super::error::{DownloadError, DownloadResult};
use super::types::{DownloadRequest, Downloaded, MAX_ERROR_BODY_BYTES};

/// Join the base endpoint and the file id with exactly one `/`
pub(crate) fn build_file_url(base_url: &str, file_id: &str) -> DownloadResult<Url> {
    let base = base_url.trim_end_matches('/');
    let segment = urlencoding::encode(file_id.trim_start_matches('/'));
    let raw = format!("{}/{}", base, segment);

    Url::parse(&raw).map_err(|e| {
        DownloadError::Io(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("Invalid download URL {}: {}", raw, e),
        ))
    })
}

fn truncate_error_body(text: &str) -> String {
    let trimmed = text.trim();
    if trimmed.len() <= MAX_ERROR_BODY_BYTES {
        return trimmed.to_string();
    }
    let mut end = MAX_ERROR_BODY_BYTES;
    while !trimmed.is_char_boundary(end) {
        end -= 1;
    }
    trimmed[..end].to_string()
}

/// Temp files live next to the destination so the final rename stays on one filesystem
fn staging_dir(destination: &Path) -> &Path {
    match destination.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    }
}

/// Path the bytes finally land at; a symlinked destination is written through
async fn resolve_target(destination: &Path) -> io::Result<PathBuf> {
    match tokio::fs::symlink_metadata(destination).await {
        Ok(meta) if meta.file_type().is_symlink() => {
            match tokio::fs::canonicalize(destination).await {
                Ok(target) => Ok(target),
                // Dangling link: create the file it points at
                Err(_) => {
                    let link = tokio::fs::read_link(destination).await?;
                    Ok(staging_dir(destination).join(link))
                }
            }
        }
        _ => Ok(destination.to_path_buf()),
    }
}

/// Mode for a freshly created file, before the umask applies
#[cfg(unix)]
fn new_file_permissions() -> Option<Permissions> {
    use std::os::unix::fs::PermissionsExt;
    Some(Permissions::from_mode(0o666))
}

#[cfg(not(unix))]
fn new_file_permissions() -> Option<Permissions> {
    None
}

/// Stage a temp file next to `target` carrying the mode `target` will end up with
async fn create_staging_file(target: &Path) -> io::Result<tempfile::NamedTempFile> {
    let existing = tokio::fs::metadata(target)
        .await
        .ok()
        .map(|meta| meta.permissions());

    let mut builder = tempfile::Builder::new();
    builder.prefix(".drive-dl-").suffix(".part");
    if let Some(permissions) = new_file_permissions() {
        builder.permissions(permissions);
    }
    let temp = builder.tempfile_in(staging_dir(target))?;

    // Overwriting keeps the previous mode exactly, unaffected by the umask
    if cfg!(unix) {
        if let Some(permissions) = existing {
            temp.as_file().set_permissions(permissions)?;
        }
    }
    Ok(temp)
}

/// Fetch one file and write it to `destination` (internal)
///
/// The body is copied into a temporary file which replaces `destination` only once
/// every byte has been written. On any failure the temporary file is removed when
/// it goes out of scope and `destination` is left as it was. A new file gets the
/// umask default mode, an overwritten one keeps its mode, and a symlink is followed
/// so the link stays in place and its target receives the bytes.
pub(crate) async fn download_file_internal(
    client: &Client,
    request: &DownloadRequest,
    destination: &Path,
    buffer_size: usize,
) -> DownloadResult<Downloaded> {
    let url = build_file_url(&request.base_url, &request.file_id)?;
    debug!(
        "Downloading file {} from {} to {}",
        request.file_id,
        url,
        destination.display()
    );

    let response = client
        .get(url)
        .bearer_auth(&request.access_token)
        .send()
        .await
        .map_err(DownloadError::transport)?;

    let status = response.status();
    if !status.is_success() {
        let text = match response.text().await {
            Ok(text) => text,
            Err(e) => {
                debug!("Failed to read error body for file {}: {}", request.file_id, e);
                String::new()
            }
        };
        warn!("Download of file {} failed: {}", request.file_id, status);
        return Err(DownloadError::Status {
            status: status.as_u16(),
            message: truncate_error_body(&text),
        });
    }

    if response.content_length() == Some(0) {
        return Err(DownloadError::MissingBody);
    }

    let target = resolve_target(destination).await?;
    let temp = create_staging_file(&target).await?;
    let (std_file, temp_path) = temp.into_parts();
    let mut file = File::from_std(std_file);

    let stream = response.bytes_stream().map_err(io::Error::other);
    let mut reader = std::pin::pin!(StreamReader::new(stream));

    let mut buffer = vec![0u8; buffer_size];
    let mut written: u64 = 0;
    loop {
        let read = reader.read(&mut buffer).await?;
        if read == 0 {
            break;
        }
        file.write_all(&buffer[..read]).await?;
        written += read as u64;
    }

    if written == 0 {
        return Err(DownloadError::MissingBody);
    }

    file.flush().await?;
    file.sync_all().await?;
    drop(file);

    temp_path
        .persist(&target)
        .map_err(|e| DownloadError::Io(e.error))?;

    info!(
        "Downloaded file {} ({} bytes) to {}",
        request.file_id,
        written,
        destination.display()
    );

    Ok(Downloaded {
        path: destination.to_path_buf(),
        bytes: written,
    })
}
