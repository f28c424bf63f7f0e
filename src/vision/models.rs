// Vision models and upload validation
// Author: kelexine (https://github.com/kelexine)

use crate::error::{DescribeError, Result};

/// Supported image formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Jpeg,
    Png,
}

impl ImageFormat {
    /// Get MIME type for this format
    pub fn mime_type(&self) -> &'static str {
        match self {
            ImageFormat::Jpeg => "image/jpeg",
            ImageFormat::Png => "image/png",
        }
    }

    /// Try to detect format from MIME type
    pub fn from_mime_type(mime: &str) -> Option<Self> {
        match mime.to_lowercase().as_str() {
            "image/jpeg" | "image/jpg" => Some(ImageFormat::Jpeg),
            "image/png" => Some(ImageFormat::Png),
            _ => None,
        }
    }

    /// Try to detect format from a file extension (`jpg`, `jpeg`, `png`)
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "jpg" | "jpeg" => Some(ImageFormat::Jpeg),
            "png" => Some(ImageFormat::Png),
            _ => None,
        }
    }
}

/// Validation limits
pub const MAX_IMAGE_SIZE_BYTES: usize = 20 * 1024 * 1024; // 20MB (OpenAI per-image limit)

/// Detect format from magic bytes at start of image data
pub fn detect_format(data: &[u8]) -> Option<ImageFormat> {
    if data.starts_with(b"\xFF\xD8\xFF") {
        Some(ImageFormat::Jpeg)
    } else if data.starts_with(b"\x89PNG\r\n\x1a\n") {
        Some(ImageFormat::Png)
    } else {
        None
    }
}

/// Validate an uploaded image before it is handed to the describer.
///
/// Empty uploads are reported as [`DescribeError::InvalidInput`] so callers see
/// the same error the requester itself would raise.
pub fn check_upload(data: &[u8], max_bytes: usize) -> Result<ImageFormat> {
    if data.is_empty() {
        return Err(DescribeError::InvalidInput("image is empty".to_string()));
    }

    if data.len() > max_bytes {
        return Err(DescribeError::InvalidInput(format!(
            "Image size {} bytes exceeds maximum of {} bytes",
            data.len(),
            max_bytes
        )));
    }

    detect_format(data).ok_or_else(|| {
        DescribeError::UnsupportedMediaType("only JPEG and PNG images are accepted".to_string())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const PNG_HEADER: &[u8] = b"\x89PNG\r\n\x1a\n\0\0\0\rIHDR";
    const JPEG_HEADER: &[u8] = b"\xFF\xD8\xFF\xE0\0\x10JFIF\0";

    #[test]
    fn test_detect_png_and_jpeg() {
        assert_eq!(detect_format(PNG_HEADER), Some(ImageFormat::Png));
        assert_eq!(detect_format(JPEG_HEADER), Some(ImageFormat::Jpeg));
    }

    #[test]
    fn test_reject_gif() {
        assert_eq!(detect_format(b"GIF89a\x01\0\x01\0"), None);
        let err = check_upload(b"GIF89a\x01\0\x01\0", MAX_IMAGE_SIZE_BYTES).unwrap_err();
        assert!(matches!(err, DescribeError::UnsupportedMediaType(_)));
    }

    #[test]
    fn test_empty_upload() {
        let err = check_upload(b"", MAX_IMAGE_SIZE_BYTES).unwrap_err();
        assert!(matches!(err, DescribeError::InvalidInput(_)));
    }

    #[test]
    fn test_oversized_upload() {
        let err = check_upload(PNG_HEADER, 4).unwrap_err();
        assert!(matches!(err, DescribeError::InvalidInput(_)));
    }

    #[test]
    fn test_mime_and_extension_lookup() {
        assert_eq!(ImageFormat::from_mime_type("IMAGE/JPG"), Some(ImageFormat::Jpeg));
        assert_eq!(ImageFormat::from_mime_type("image/webp"), None);
        assert_eq!(ImageFormat::from_extension("JPEG"), Some(ImageFormat::Jpeg));
        assert_eq!(ImageFormat::from_extension("png"), Some(ImageFormat::Png));
        assert_eq!(ImageFormat::Png.mime_type(), "image/png");
    }
}
