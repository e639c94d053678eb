//! Writing .torrent downloads to disk.

use reqwest::Response;
use std::path::{Path, PathBuf};
use tokio::fs::File;
use tokio::io::AsyncWriteExt;
use tracing::warn;

use crate::torznab::{DOWNLOAD_NAME_MARKER, DOWNLOAD_NAME_SUFFIX};
use crate::JackettError;

/// File name for a download link: the text after the last `file=`, plus `.torrent`.
pub fn torrent_file_name(download_link: &str) -> Result<String, JackettError> {
    let start = download_link
        .rfind(DOWNLOAD_NAME_MARKER)
        .map(|idx| idx + DOWNLOAD_NAME_MARKER.len())
        .ok_or_else(|| {
            JackettError::parse(format!(
                "download link has no '{}' parameter",
                DOWNLOAD_NAME_MARKER
            ))
        })?;
    let name = &download_link[start..];

    if name.is_empty() || name == "." || name == ".." || name.contains(['/', '\\']) {
        return Err(JackettError::parse(format!(
            "download link yields an unusable file name '{}'",
            name
        )));
    }

    Ok(format!("{}{}", name, DOWNLOAD_NAME_SUFFIX))
}

/// Full path the download of `download_link` is written to.
pub fn torrent_path(destination: &Path, download_link: &str) -> Result<PathBuf, JackettError> {
    Ok(destination.join(torrent_file_name(download_link)?))
}

/// Stream the body of `response` into a new file at `path`.
///
/// A partially written file is removed when the body stream fails.
pub(crate) async fn write_body(mut response: Response, path: &Path) -> Result<u64, JackettError> {
    let mut file = File::create(path).await?;

    let copied = async {
        let mut written = 0u64;
        while let Some(chunk) = response.chunk().await? {
            file.write_all(&chunk).await?;
            written += chunk.len() as u64;
        }
        file.flush().await?;
        Ok::<_, JackettError>(written)
    }
    .await;

    if copied.is_err() {
        drop(file);
        if let Err(e) = tokio::fs::remove_file(path).await {
            warn!(path = %path.display(), error = %e, "Failed to remove partial download");
        }
    }
    copied
}
