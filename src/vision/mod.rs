//! Image loading for the Gemini vision request.
//!
//! Reads a downloaded image from disk, detects its MIME type from magic
//! bytes, validates it against the Gemini size limit, and base64-encodes it
//! into the `InlineData` wire format.
//!
//! Author: kelexine (<https://github.com/kelexine>)

use crate::error::{CompareError, Result};
use crate::models::gemini::InlineData;
use base64::Engine;
use std::path::Path;

/// Supported image formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Jpeg,
    Png,
    Gif,
    WebP,
}

impl ImageFormat {
    /// Get MIME type for this format
    pub fn mime_type(&self) -> &'static str {
        match self {
            ImageFormat::Jpeg => "image/jpeg",
            ImageFormat::Png => "image/png",
            ImageFormat::Gif => "image/gif",
            ImageFormat::WebP => "image/webp",
        }
    }
}

/// Validation limits
pub const MAX_IMAGE_SIZE_BYTES: usize = 20 * 1024 * 1024; // 20MB (Gemini limit)

/// Validate image data size
pub fn validate_image_size(data_len: usize) -> std::result::Result<(), String> {
    if data_len > MAX_IMAGE_SIZE_BYTES {
        return Err(format!(
            "Image size {} bytes exceeds maximum of {} bytes (20MB)",
            data_len, MAX_IMAGE_SIZE_BYTES
        ));
    }
    Ok(())
}

/// Load an image file into Gemini `InlineData`.
///
/// The MIME type is detected from the file content, not the filename, since
/// downloads are validated by extension only.
pub fn load_image(path: &Path) -> Result<InlineData> {
    let data = std::fs::read(path)?;

    let format = detect_format(&data).ok_or_else(|| {
        CompareError::InvalidImage(format!(
            "Could not detect image format of {}",
            path.display()
        ))
    })?;

    validate_image_size(data.len()).map_err(CompareError::InvalidImage)?;

    Ok(InlineData {
        mime_type: format.mime_type().to_string(),
        data: base64::engine::general_purpose::STANDARD.encode(&data),
    })
}

/// Detect image format from magic bytes at start of image data
fn detect_format(data: &[u8]) -> Option<ImageFormat> {
    if data.len() < 12 {
        return None;
    }

    if data.starts_with(b"\xFF\xD8\xFF") {
        Some(ImageFormat::Jpeg)
    } else if data.starts_with(b"\x89PNG\r\n\x1a\n") {
        Some(ImageFormat::Png)
    } else if data.starts_with(b"GIF87a") || data.starts_with(b"GIF89a") {
        Some(ImageFormat::Gif)
    } else if data.starts_with(b"RIFF") && data[8..12] == *b"WEBP" {
        Some(ImageFormat::WebP)
    } else {
        None
    }
}
