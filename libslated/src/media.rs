//! Media references attached to draft posts
//!
//! A draft carries a reference to the content file (and optionally a
//! thumbnail), not the file bytes themselves. Upload transport is owned by
//! the surrounding shell; the reference only records path, kind, size and a
//! content fingerprint.

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::error::{Result, SlatedError};

/// Kind of content file a draft can carry
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum MediaKind {
    Video,
    Image,
}

impl MediaKind {
    /// Detect the media kind from a file extension
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "mp4" | "mov" | "webm" | "mkv" | "avi" => Some(Self::Video),
            "jpg" | "jpeg" | "png" | "gif" | "webp" => Some(Self::Image),
            _ => None,
        }
    }
}

impl fmt::Display for MediaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Video => write!(f, "video"),
            Self::Image => write!(f, "image"),
        }
    }
}

/// Reference to the media file attached to a draft
///
/// The file_hash provides integrity verification for the downstream
/// publisher.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MediaRef {
    /// Path to the content file on disk
    pub path: String,
    /// Video or image
    pub kind: MediaKind,
    /// File size in bytes
    pub file_size: u64,
    /// SHA-256 hash of the file content (hex encoded)
    pub file_hash: String,
    /// Optional thumbnail image path (used by video platforms)
    pub thumbnail: Option<String>,
}

impl MediaRef {
    /// Build a media reference by inspecting a file on disk
    ///
    /// Detects the kind from the extension, records the size, and hashes
    /// the content.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or has an unsupported
    /// extension.
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default();

        let kind = MediaKind::from_extension(ext).ok_or_else(|| {
            SlatedError::InvalidInput(format!(
                "Unsupported media file extension '{}': expected a video or image file",
                ext
            ))
        })?;

        let bytes = std::fs::read(path).map_err(|e| {
            SlatedError::InvalidInput(format!(
                "Failed to read media file {}: {}",
                path.display(),
                e
            ))
        })?;

        let file_hash = format!("{:x}", Sha256::digest(&bytes));

        Ok(Self {
            path: path.display().to_string(),
            kind,
            file_size: bytes.len() as u64,
            file_hash,
            thumbnail: None,
        })
    }

    /// Attach a thumbnail path
    pub fn with_thumbnail(mut self, path: impl Into<String>) -> Self {
        self.thumbnail = Some(path.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_media_kind_from_extension_video() {
        assert_eq!(MediaKind::from_extension("mp4"), Some(MediaKind::Video));
        assert_eq!(MediaKind::from_extension("MOV"), Some(MediaKind::Video));
        assert_eq!(MediaKind::from_extension("webm"), Some(MediaKind::Video));
    }

    #[test]
    fn test_media_kind_from_extension_image() {
        assert_eq!(MediaKind::from_extension("jpg"), Some(MediaKind::Image));
        assert_eq!(MediaKind::from_extension("PNG"), Some(MediaKind::Image));
        assert_eq!(MediaKind::from_extension("webp"), Some(MediaKind::Image));
    }

    #[test]
    fn test_media_kind_from_extension_unsupported() {
        assert_eq!(MediaKind::from_extension("pdf"), None);
        assert_eq!(MediaKind::from_extension("txt"), None);
        assert_eq!(MediaKind::from_extension(""), None);
    }

    #[test]
    fn test_from_path_hashes_content() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("clip.mp4");
        std::fs::write(&file_path, b"not really a video").unwrap();

        let media = MediaRef::from_path(&file_path).unwrap();

        assert_eq!(media.kind, MediaKind::Video);
        assert_eq!(media.file_size, 18);
        assert_eq!(media.file_hash.len(), 64); // hex-encoded SHA-256
        assert!(media.thumbnail.is_none());
    }

    #[test]
    fn test_from_path_same_content_same_hash() {
        let temp_dir = TempDir::new().unwrap();
        let a = temp_dir.path().join("a.png");
        let b = temp_dir.path().join("b.png");
        std::fs::write(&a, b"pixels").unwrap();
        std::fs::write(&b, b"pixels").unwrap();

        let media_a = MediaRef::from_path(&a).unwrap();
        let media_b = MediaRef::from_path(&b).unwrap();
        assert_eq!(media_a.file_hash, media_b.file_hash);
    }

    #[test]
    fn test_from_path_unsupported_extension() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("notes.txt");
        std::fs::write(&file_path, b"text").unwrap();

        let result = MediaRef::from_path(&file_path);
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("Unsupported media file extension"));
    }

    #[test]
    fn test_from_path_missing_file() {
        let result = MediaRef::from_path(Path::new("/does/not/exist.mp4"));
        assert!(result.is_err());
    }

    #[test]
    fn test_with_thumbnail() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("clip.mp4");
        std::fs::write(&file_path, b"video").unwrap();

        let media = MediaRef::from_path(&file_path)
            .unwrap()
            .with_thumbnail("/thumbs/clip.jpg");
        assert_eq!(media.thumbnail.as_deref(), Some("/thumbs/clip.jpg"));
    }
}
