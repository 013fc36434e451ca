// SPDX-FileCopyrightText: 2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Upload gates.
//!
//! Files are checked before any network traffic: images against a size
//! cap, audio against a size cap and a MIME prefix. A rejected file never
//! enters the draft.

use std::path::{Path, PathBuf};

/// Largest accepted image upload, in bytes.
pub const MAX_IMAGE_BYTES: u64 = 15 * 1024 * 1024;

/// Largest accepted audio upload, in bytes.
pub const MAX_AUDIO_BYTES: u64 = 50 * 1024 * 1024;

/// A local file staged for upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingUpload {
    /// Path to the local file.
    pub path: PathBuf,

    /// File size in bytes.
    pub len: u64,

    /// MIME type, guessed from the extension.
    pub mime: String,
}

impl PendingUpload {
    /// Stats `path` and guesses its MIME type.
    ///
    /// # Errors
    ///
    /// Returns [`UploadError::Unreadable`] if the file cannot be stat'd.
    pub async fn probe(path: impl Into<PathBuf>) -> Result<Self, UploadError> {
        let path = path.into();
        let metadata =
            tokio::fs::metadata(&path)
                .await
                .map_err(|e| UploadError::Unreadable {
                    path: path.clone(),
                    reason: e.to_string(),
                })?;
        let mime = mime_for(&path).to_string();
        Ok(Self {
            len: metadata.len(),
            mime,
            path,
        })
    }

    /// Builds a pending upload from already-known facts. Used by tests and
    /// by callers that stat files themselves.
    #[must_use]
    pub fn from_parts(path: impl Into<PathBuf>, len: u64, mime: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            len,
            mime: mime.into(),
        }
    }
}

/// Rejection from an upload gate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UploadError {
    /// The file could not be read.
    #[error("cannot read {}: {reason}", path.display())]
    Unreadable {
        /// Path that failed.
        path: PathBuf,
        /// OS error text.
        reason: String,
    },

    /// An image exceeded the size cap.
    #[error("file size must be less than 15MB")]
    ImageTooLarge,

    /// An audio file exceeded the size cap.
    #[error("file size must be less than 50MB")]
    AudioTooLarge,

    /// The file does not look like audio.
    #[error("please select an audio file")]
    NotAudio,
}

/// Checks an image upload against the size cap.
///
/// # Errors
///
/// Returns [`UploadError::ImageTooLarge`] when the file is over the cap.
pub fn check_image(upload: &PendingUpload) -> Result<(), UploadError> {
    if upload.len > MAX_IMAGE_BYTES {
        return Err(UploadError::ImageTooLarge);
    }
    Ok(())
}

/// Checks an audio upload against the size cap and the MIME gate.
///
/// # Errors
///
/// Returns [`UploadError::NotAudio`] for non-audio MIME types and
/// [`UploadError::AudioTooLarge`] when the file is over the cap.
pub fn check_audio(upload: &PendingUpload) -> Result<(), UploadError> {
    if !upload.mime.starts_with("audio/") {
        return Err(UploadError::NotAudio);
    }
    if upload.len > MAX_AUDIO_BYTES {
        return Err(UploadError::AudioTooLarge);
    }
    Ok(())
}

fn mime_for(path: &Path) -> &'static str {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);
    match extension.as_deref() {
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("png") => "image/png",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("svg") => "image/svg+xml",
        Some("mp3") => "audio/mpeg",
        Some("m4a") => "audio/mp4",
        Some("aac") => "audio/aac",
        Some("ogg" | "oga") => "audio/ogg",
        Some("wav") => "audio/wav",
        Some("flac") => "audio/flac",
        _ => "application/octet-stream",
    }
}
