//! Media delivery configuration: locales, download disposition, image formats.

use serde::{Deserialize, Serialize};

use crate::types::DispositionType;

/// Top-level media delivery configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MediaConfig {
    /// Locale used for filename cleaning when the request carries none.
    #[serde(default = "default_locale")]
    pub default_locale: String,
    /// Path prefix under which formatted images are served.
    #[serde(default = "default_image_url_prefix")]
    pub image_url_prefix: String,
    /// Download disposition rules.
    #[serde(default)]
    pub download: DownloadConfig,
    /// Image format definitions, addressed by `key` in image URLs.
    #[serde(default)]
    pub formats: Vec<FormatConfig>,
    /// Rendered image cache settings.
    #[serde(default)]
    pub image_cache: ImageCacheConfig,
}

impl Default for MediaConfig {
    fn default() -> Self {
        Self {
            default_locale: default_locale(),
            image_url_prefix: default_image_url_prefix(),
            download: DownloadConfig::default(),
            formats: Vec::new(),
            image_cache: ImageCacheConfig::default(),
        }
    }
}

/// MIME-type based `Content-Disposition` selection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DownloadConfig {
    /// Disposition for MIME types listed in neither list.
    #[serde(default = "default_disposition")]
    pub default_disposition: DispositionType,
    /// MIME types always served inline.
    #[serde(default)]
    pub inline_mime_types: Vec<String>,
    /// MIME types always served as attachment.
    #[serde(default)]
    pub attachment_mime_types: Vec<String>,
}

impl Default for DownloadConfig {
    fn default() -> Self {
        Self {
            default_disposition: default_disposition(),
            inline_mime_types: Vec::new(),
            attachment_mime_types: Vec::new(),
        }
    }
}

/// How a format fits the original into its box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormatMode {
    /// Scale to fit entirely inside the box, keeping the aspect ratio.
    Inset,
    /// Scale to cover the box and crop the overflow.
    Outbound,
}

/// A single image format definition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormatConfig {
    /// Format key used in image URLs, e.g. `"300x"` or `"50x50"`.
    pub key: String,
    /// Target width in pixels.
    #[serde(default)]
    pub width: Option<u32>,
    /// Target height in pixels.
    #[serde(default)]
    pub height: Option<u32>,
    /// Scaling mode.
    #[serde(default = "default_mode")]
    pub mode: FormatMode,
    /// JPEG quality (1-100).
    #[serde(default = "default_quality")]
    pub quality: u8,
}

/// Rendered image cache configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageCacheConfig {
    /// Total bytes of rendered images kept in memory.
    #[serde(default = "default_max_capacity_bytes")]
    pub max_capacity_bytes: u64,
    /// TTL for cached renderings in seconds.
    #[serde(default = "default_time_to_live")]
    pub time_to_live_seconds: u64,
    /// `Cache-Control: max-age` sent with image responses.
    #[serde(default = "default_max_age")]
    pub max_age_seconds: u64,
}

impl Default for ImageCacheConfig {
    fn default() -> Self {
        Self {
            max_capacity_bytes: default_max_capacity_bytes(),
            time_to_live_seconds: default_time_to_live(),
            max_age_seconds: default_max_age(),
        }
    }
}

fn default_locale() -> String {
    "en".to_string()
}

fn default_image_url_prefix() -> String {
    "/uploads/media".to_string()
}

fn default_disposition() -> DispositionType {
    DispositionType::Attachment
}

fn default_mode() -> FormatMode {
    FormatMode::Inset
}

fn default_quality() -> u8 {
    80
}

fn default_max_capacity_bytes() -> u64 {
    268_435_456 // 256 MB
}

fn default_time_to_live() -> u64 {
    3600
}

fn default_max_age() -> u64 {
    2_592_000 // 30 days
}
