//! Image upload checks and `data:` URI conversion.
//!
//! Thumbnails and profile pictures are stored inline on the record, so the
//! upload is capped and restricted to formats every browser renders.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use thiserror::Error;

pub const MAX_IMAGE_BYTES: usize = 1024 * 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageKind {
    Jpeg,
    Png,
    Gif,
}

impl ImageKind {
    pub fn mime(self) -> &'static str {
        match self {
            Self::Jpeg => "image/jpeg",
            Self::Png => "image/png",
            Self::Gif => "image/gif",
        }
    }

    /// Parse a Content-Type value, ignoring parameters and case.
    pub fn from_mime(mime: &str) -> Option<Self> {
        let essence = mime.split(';').next().unwrap_or_default().trim();
        match essence.to_ascii_lowercase().as_str() {
            "image/jpeg" | "image/jpg" => Some(Self::Jpeg),
            "image/png" => Some(Self::Png),
            "image/gif" => Some(Self::Gif),
            _ => None,
        }
    }

    /// Detect the format from the file's magic bytes.
    pub fn sniff(bytes: &[u8]) -> Option<Self> {
        if bytes.starts_with(&[0xFF, 0xD8, 0xFF]) {
            Some(Self::Jpeg)
        } else if bytes.starts_with(b"\x89PNG\r\n\x1a\n") {
            Some(Self::Png)
        } else if bytes.starts_with(b"GIF87a") || bytes.starts_with(b"GIF89a") {
            Some(Self::Gif)
        } else {
            None
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ImageError {
    #[error("image is empty")]
    Empty,

    #[error("unsupported image type '{0}' (expected JPEG, PNG, or GIF)")]
    UnsupportedType(String),

    #[error("image is {size} bytes, larger than the {max} byte limit")]
    TooLarge { size: usize, max: usize },

    #[error("file content does not match declared type {declared}")]
    ContentMismatch { declared: &'static str },
}

/// Validate an uploaded image and encode it as a `data:` URI.
pub fn to_data_uri(bytes: &[u8], declared_mime: &str) -> Result<String, ImageError> {
    let kind = ImageKind::from_mime(declared_mime)
        .ok_or_else(|| ImageError::UnsupportedType(declared_mime.to_string()))?;

    if bytes.is_empty() {
        return Err(ImageError::Empty);
    }
    if bytes.len() > MAX_IMAGE_BYTES {
        return Err(ImageError::TooLarge {
            size: bytes.len(),
            max: MAX_IMAGE_BYTES,
        });
    }
    if ImageKind::sniff(bytes) != Some(kind) {
        return Err(ImageError::ContentMismatch {
            declared: kind.mime(),
        });
    }

    Ok(format!("data:{};base64,{}", kind.mime(), STANDARD.encode(bytes)))
}
