//! Video selection and encoding
//!
//! Turns a video file on disk into the base64 payload the model consumes.
//! MIME types are resolved from the file extension at selection time, so no
//! file content is read before the size limit has been checked.

use std::path::{Path, PathBuf};

use crate::{Error, Result};

/// Base64 video payload and its declared MIME type.
///
/// Built per attempt and consumed by the single request that carries it.
#[derive(Debug, Clone)]
pub struct EncodedMedia {
    pub data: String,
    pub mime_type: String,
}

/// A video the user picked, before any content is read.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectedVideo {
    pub path: PathBuf,
    pub mime_type: String,
    pub size_bytes: u64,
}

impl SelectedVideo {
    /// Inspect a path and record its MIME type and size.
    ///
    /// Size comes from filesystem metadata, so selection stays cheap even
    /// for files that will later be rejected as too large.
    pub fn from_path(path: &Path) -> Result<Self> {
        let mime_type = video_mime_for_path(path)
            .ok_or_else(|| Error::UnsupportedMedia(path.display().to_string()))?;

        let metadata = std::fs::metadata(path)?;

        Ok(Self {
            path: path.to_path_buf(),
            mime_type: mime_type.to_string(),
            size_bytes: metadata.len(),
        })
    }
}

/// Map a file extension to its video MIME type.
///
/// Returns `None` for anything that is not a recognized video container,
/// which callers treat as "not a video".
pub fn video_mime_for_path(path: &Path) -> Option<&'static str> {
    let extension = path.extension()?.to_str()?.to_ascii_lowercase();

    let mime = match extension.as_str() {
        "mp4" => "video/mp4",
        "m4v" => "video/x-m4v",
        "mov" => "video/quicktime",
        "webm" => "video/webm",
        "mkv" => "video/x-matroska",
        "avi" => "video/x-msvideo",
        "mpg" | "mpeg" => "video/mpeg",
        "3gp" => "video/3gpp",
        "wmv" => "video/x-ms-wmv",
        _ => return None,
    };

    Some(mime)
}

/// Read the video and encode it for transport.
///
/// This is the first point at which file content is touched. Read failures
/// surface as encode errors and are never retried.
pub async fn encode_video(path: &Path, mime_type: &str) -> Result<EncodedMedia> {
    use base64::Engine as _;

    let bytes = tokio::fs::read(path).await.map_err(Error::Encode)?;

    tracing::debug!("Encoded {} bytes from {}", bytes.len(), path.display());

    Ok(EncodedMedia {
        data: base64::engine::general_purpose::STANDARD.encode(&bytes),
        mime_type: mime_type.to_string(),
    })
}
