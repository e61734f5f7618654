//! Image path value types.

use bytes::Bytes;

/// Media id and format key extracted from an image URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaProperties {
    /// Media identifier.
    pub id: i64,
    /// Format key, e.g. `"50x50"`.
    pub format: String,
}

/// A rendered image ready to be sent.
#[derive(Debug, Clone)]
pub struct ImageResponse {
    /// Encoded image bytes.
    pub data: Bytes,
    /// MIME type of `data`.
    pub content_type: String,
    /// `Cache-Control: max-age` in seconds.
    pub max_age_seconds: u64,
}
