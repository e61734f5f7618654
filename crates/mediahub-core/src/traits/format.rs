//! Image format manager trait.

use async_trait::async_trait;

use crate::error::ImageProxyError;
use crate::types::image::{ImageResponse, MediaProperties};

/// Resolves image URLs and produces formatted images.
#[async_trait]
pub trait FormatManager: Send + Sync + 'static {
    /// Extract media id and format key from an image URL path.
    fn get_media_properties(&self, url: &str) -> Result<MediaProperties, ImageProxyError>;

    /// Render (or fetch from cache) media `id` in `format`.
    async fn return_image(&self, id: i64, format: &str) -> Result<ImageResponse, ImageProxyError>;
}
