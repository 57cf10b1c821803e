//! Export format selection and encoding errors.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Quality used when JPEG is requested by name.
pub const DEFAULT_JPEG_QUALITY: u8 = 90;

/// Errors that can occur during encoding.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// The requested format name is not one we can write
    #[error("Unsupported export format: {0}")]
    UnsupportedFormat(String),

    /// The underlying encoder failed
    #[error("Encoding failed: {0}")]
    EncodingFailed(String),
}

/// Output format for encoded images.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "format", rename_all = "lowercase")]
pub enum ExportFormat {
    /// Lossless PNG with alpha.
    #[default]
    Png,
    /// Lossy JPEG; alpha is discarded.
    Jpeg {
        /// 1-100, values outside are clamped.
        quality: u8,
    },
}

impl ExportFormat {
    /// File extension without the leading dot.
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Png => "png",
            ExportFormat::Jpeg { .. } => "jpg",
        }
    }

    /// MIME type for download links.
    pub fn mime_type(self) -> &'static str {
        match self {
            ExportFormat::Png => "image/png",
            ExportFormat::Jpeg { .. } => "image/jpeg",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for ExportFormat {
    type Err = EncodeError;

    /// Accepts a format name, an extension (with or without dot) or a MIME type.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().trim_start_matches('.').to_ascii_lowercase();
        match name.as_str() {
            "png" | "image/png" => Ok(ExportFormat::Png),
            "jpg" | "jpeg" | "image/jpeg" => Ok(ExportFormat::Jpeg {
                quality: DEFAULT_JPEG_QUALITY,
            }),
            _ => Err(EncodeError::UnsupportedFormat(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_png() {
        assert_eq!("png".parse::<ExportFormat>().unwrap(), ExportFormat::Png);
        assert_eq!(".PNG".parse::<ExportFormat>().unwrap(), ExportFormat::Png);
        assert_eq!(
            "image/png".parse::<ExportFormat>().unwrap(),
            ExportFormat::Png
        );
    }

    #[test]
    fn test_parse_jpeg_uses_default_quality() {
        for name in ["jpg", "jpeg", "image/jpeg", " JPG "] {
            assert_eq!(
                name.parse::<ExportFormat>().unwrap(),
                ExportFormat::Jpeg {
                    quality: DEFAULT_JPEG_QUALITY
                },
                "{name}"
            );
        }
    }

    #[test]
    fn test_parse_unsupported() {
        let err = "bmp".parse::<ExportFormat>().unwrap_err();
        assert!(matches!(err, EncodeError::UnsupportedFormat(ref n) if n == "bmp"));
        assert_eq!(err.to_string(), "Unsupported export format: bmp");
    }

    #[test]
    fn test_extension_and_mime() {
        assert_eq!(ExportFormat::Png.extension(), "png");
        assert_eq!(ExportFormat::Png.mime_type(), "image/png");

        let jpeg = ExportFormat::Jpeg { quality: 80 };
        assert_eq!(jpeg.extension(), "jpg");
        assert_eq!(jpeg.mime_type(), "image/jpeg");
        assert_eq!(jpeg.to_string(), "jpg");
    }

    #[test]
    fn test_default_is_png() {
        assert_eq!(ExportFormat::default(), ExportFormat::Png);
    }

    #[test]
    fn test_serde_representation() {
        let json = serde_json::to_string(&ExportFormat::Jpeg { quality: 75 }).unwrap();
        assert_eq!(json, r#"{"format":"jpeg","quality":75}"#);

        let png: ExportFormat = serde_json::from_str(r#"{"format":"png"}"#).unwrap();
        assert_eq!(png, ExportFormat::Png);
    }
}
