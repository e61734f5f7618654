//! Image scaling and encoding.
//!
//! Everything here is CPU-bound and is expected to run on a blocking thread.

use std::io::Cursor;

use bytes::Bytes;
use image::codecs::jpeg::JpegEncoder;
use image::imageops::FilterType;
use image::{DynamicImage, ImageFormat};

use mediahub_core::config::media::{FormatConfig, FormatMode};
use mediahub_core::error::ImageProxyError;

/// Output encoding for an original named `file_name`.
///
/// PNG, GIF and WebP originals keep their format; everything else becomes
/// JPEG.
pub fn output_format(file_name: &str) -> ImageFormat {
    match ImageFormat::from_path(file_name) {
        Ok(format @ (ImageFormat::Png | ImageFormat::Gif | ImageFormat::WebP)) => format,
        _ => ImageFormat::Jpeg,
    }
}

/// Decodes `data`, scales it per `format` and encodes it as `output`.
pub fn render(
    data: &[u8],
    format: &FormatConfig,
    output: ImageFormat,
) -> Result<Bytes, ImageProxyError> {
    let (width, height) = match (format.width, format.height) {
        (Some(0), _) | (_, Some(0)) | (None, None) => {
            return Err(ImageProxyError::InvalidFormatOptions(format!(
                "format \"{}\" needs a non-zero width or height",
                format.key
            )));
        }
        dimensions => dimensions,
    };

    let original = image::load_from_memory(data)
        .map_err(|e| ImageProxyError::InvalidImageFormat(e.to_string()))?;

    let scaled = match (format.mode, width, height) {
        (FormatMode::Outbound, Some(w), Some(h)) => {
            original.resize_to_fill(w, h, FilterType::Lanczos3)
        }
        _ => {
            let max_w = width.unwrap_or(u32::MAX);
            let max_h = height.unwrap_or(u32::MAX);
            if original.width() <= max_w && original.height() <= max_h {
                original
            } else {
                original.resize(max_w, max_h, FilterType::Lanczos3)
            }
        }
    };

    let mut buf = Vec::new();
    match output {
        ImageFormat::Jpeg => {
            let encoder = JpegEncoder::new_with_quality(&mut buf, format.quality.clamp(1, 100));
            DynamicImage::ImageRgb8(scaled.to_rgb8()).write_with_encoder(encoder)
        }
        other => DynamicImage::ImageRgba8(scaled.to_rgba8())
            .write_to(&mut Cursor::new(&mut buf), other),
    }
    .map_err(|e| ImageProxyError::InvalidImageFormat(e.to_string()))?;

    Ok(Bytes::from(buf))
}
