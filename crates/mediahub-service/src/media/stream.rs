//! Media stream service: dispatches image and download requests.

use std::sync::Arc;

use tracing::{error, info, warn};

use mediahub_core::error::{ImageProxyError, MediaError};
use mediahub_core::traits::{
    DispositionResolver, FormatManager, MediaManager, MediaStorage, PathCleaner, Repository,
};
use mediahub_core::types::{DispositionType, ImageResponse};
use mediahub_entity::media::MediaAsset;

use super::resolver::FileVersionResolver;
use super::response::{FileResponse, FileResponseBuilder};

/// Parameters of a download request.
#[derive(Debug, Clone)]
pub struct DownloadRequest {
    /// Media identifier.
    pub id: i64,
    /// Explicit version; `None` selects the current one.
    pub version: Option<i32>,
    /// Skip the download counter.
    pub no_count: bool,
    /// Forced disposition; `None` lets the MIME type decide.
    pub inline: Option<bool>,
    /// Locale used to clean the filename.
    pub locale: String,
}

/// Result of a download dispatch.
#[derive(Debug)]
pub enum DownloadOutcome {
    /// A streamable file.
    File(FileResponse),
    /// No media with this id; answered with an empty 404.
    NotFound,
}

/// Entry point for media delivery.
#[derive(Clone)]
pub struct MediaStreamService {
    /// Version lookup.
    resolver: FileVersionResolver,
    /// Header and location building.
    response_builder: FileResponseBuilder,
    /// Inline/attachment selection.
    disposition_resolver: Arc<dyn DispositionResolver>,
    /// Download counter.
    media_manager: Arc<dyn MediaManager>,
    /// Formatted image delivery.
    format_manager: Arc<dyn FormatManager>,
}

impl std::fmt::Debug for MediaStreamService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MediaStreamService").finish()
    }
}

impl MediaStreamService {
    /// Creates a new media stream service.
    pub fn new(
        media_repo: Arc<dyn Repository<MediaAsset, i64>>,
        storage: Arc<dyn MediaStorage>,
        cleaner: Arc<dyn PathCleaner>,
        disposition_resolver: Arc<dyn DispositionResolver>,
        media_manager: Arc<dyn MediaManager>,
        format_manager: Arc<dyn FormatManager>,
    ) -> Self {
        Self {
            resolver: FileVersionResolver::new(media_repo),
            response_builder: FileResponseBuilder::new(storage, cleaner),
            disposition_resolver,
            media_manager,
            format_manager,
        }
    }

    /// Produces the formatted image addressed by `url`.
    pub async fn image(&self, url: &str) -> Result<ImageResponse, ImageProxyError> {
        let properties = self.format_manager.get_media_properties(url)?;
        self.format_manager
            .return_image(properties.id, &properties.format)
            .await
    }

    /// Resolves, counts and describes a file download.
    pub async fn download(&self, request: &DownloadRequest) -> Result<DownloadOutcome, MediaError> {
        let lookup = self
            .resolver
            .resolve(request.id, request.version)
            .await
            .map_err(|e| {
                error!(media_id = request.id, error = %e, "Failed to load media");
                MediaError::from(e)
            })?;

        let Some(file_version) = lookup.into_result()? else {
            return Ok(DownloadOutcome::NotFound);
        };

        let disposition = match request.inline {
            Some(true) => DispositionType::Inline,
            Some(false) => DispositionType::Attachment,
            None => self
                .disposition_resolver
                .get_by_mime_type(file_version.mime_type().unwrap_or_default()),
        };

        if !request.no_count {
            if let Err(e) = self
                .media_manager
                .increase_download_counter(file_version.id)
                .await
            {
                warn!(
                    file_version_id = file_version.id,
                    error = %e,
                    "Failed to increase download counter"
                );
            }
        }

        let response = self
            .response_builder
            .build(&file_version, &request.locale, disposition)
            .await?;

        info!(
            media_id = request.id,
            version = file_version.version,
            disposition = %disposition,
            "File download"
        );

        Ok(DownloadOutcome::File(response))
    }
}
