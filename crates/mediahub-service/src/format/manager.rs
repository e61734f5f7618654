//! Cached image format manager.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;
use moka::future::Cache;
use tracing::{debug, warn};

use mediahub_core::config::media::{FormatConfig, MediaConfig};
use mediahub_core::error::{ImageProxyError, MediaError};
use mediahub_core::traits::{FormatManager, MediaStorage, Repository};
use mediahub_core::types::{ImageResponse, MediaProperties};
use mediahub_entity::media::{FileVersion, MediaAsset};

use super::transform;
use super::url::parse_image_url;
use crate::media::resolver::{FileVersionLookup, lookup};

/// Cache key: media id, file version number, format key.
type RenderKey = (i64, i32, String);

#[derive(Debug, Clone)]
struct RenderedImage {
    data: Bytes,
    content_type: String,
}

/// Renders the configured formats of image media and caches the results.
#[derive(Clone)]
pub struct ImageFormatManager {
    /// Media lookup.
    media_repo: Arc<dyn Repository<MediaAsset, i64>>,
    /// Original bytes.
    storage: Arc<dyn MediaStorage>,
    /// Format definitions keyed by format key.
    formats: Arc<HashMap<String, FormatConfig>>,
    /// Path prefix of image URLs.
    url_prefix: String,
    /// `Cache-Control: max-age` for image responses.
    max_age_seconds: u64,
    /// Rendered images, weighted by encoded size.
    cache: Cache<RenderKey, RenderedImage>,
}

impl std::fmt::Debug for ImageFormatManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImageFormatManager")
            .field("formats", &self.formats.keys().collect::<Vec<_>>())
            .field("url_prefix", &self.url_prefix)
            .finish()
    }
}

impl ImageFormatManager {
    /// Creates a format manager from the media configuration.
    pub fn new(
        media_repo: Arc<dyn Repository<MediaAsset, i64>>,
        storage: Arc<dyn MediaStorage>,
        config: &MediaConfig,
    ) -> Self {
        let cache = Cache::builder()
            .weigher(|_key: &RenderKey, value: &RenderedImage| {
                u32::try_from(value.data.len()).unwrap_or(u32::MAX)
            })
            .max_capacity(config.image_cache.max_capacity_bytes)
            .time_to_live(Duration::from_secs(config.image_cache.time_to_live_seconds))
            .build();

        let formats = config
            .formats
            .iter()
            .map(|f| (f.key.clone(), f.clone()))
            .collect();

        Self {
            media_repo,
            storage,
            formats: Arc::new(formats),
            url_prefix: config.image_url_prefix.clone(),
            max_age_seconds: config.image_cache.max_age_seconds,
            cache,
        }
    }

    /// Loads the original of `version` and renders it in `format`.
    async fn render(
        &self,
        version: FileVersion,
        format: FormatConfig,
    ) -> Result<RenderedImage, ImageProxyError> {
        let resource = self
            .storage
            .load(&version.name, version.version, &version.storage_options)
            .await
            .map_err(into_proxy_error)?;
        let data = resource.read_all().await.map_err(into_proxy_error)?;

        let output = transform::output_format(&version.name);
        let key = format.key.clone();
        let rendered = tokio::task::spawn_blocking(move || transform::render(&data, &format, output))
            .await
            .map_err(|e| ImageProxyError::InvalidFormatOptions(format!("render task failed: {e}")))??;

        debug!(
            file_version_id = version.id,
            format = %key,
            bytes = rendered.len(),
            "Rendered image format"
        );

        Ok(RenderedImage {
            data: rendered,
            content_type: output.to_mime_type().to_string(),
        })
    }
}

fn into_proxy_error(err: MediaError) -> ImageProxyError {
    match err {
        MediaError::ImageProxy(e) => e,
        other => ImageProxyError::OriginalNotFound(other.to_string()),
    }
}

#[async_trait]
impl FormatManager for ImageFormatManager {
    fn get_media_properties(&self, url: &str) -> Result<MediaProperties, ImageProxyError> {
        parse_image_url(url, &self.url_prefix)
    }

    async fn return_image(&self, id: i64, format: &str) -> Result<ImageResponse, ImageProxyError> {
        let format_config = self
            .formats
            .get(format)
            .cloned()
            .ok_or_else(|| ImageProxyError::InvalidImageFormat(format.to_string()))?;

        let asset = self
            .media_repo
            .find_by_id(&id)
            .await
            .map_err(|e| {
                warn!(media_id = id, error = %e, "Failed to load media for image");
                ImageProxyError::MediaNotFound(id)
            })?
            .ok_or(ImageProxyError::MediaNotFound(id))?;

        let FileVersionLookup::Found(version) = lookup(&asset, None) else {
            return Err(ImageProxyError::MediaNotFound(id));
        };

        let mime_type = version.mime_type().unwrap_or_default();
        if !mime_type.starts_with("image/") {
            return Err(ImageProxyError::InvalidImageFormat(mime_type.to_string()));
        }

        let key = (id, version.version, format_config.key.clone());
        let rendered = self
            .cache
            .try_get_with(key, self.render(version, format_config))
            .await
            .map_err(|e| (*e).clone())?;

        Ok(ImageResponse {
            data: rendered.data,
            content_type: rendered.content_type,
            max_age_seconds: self.max_age_seconds,
        })
    }
}
