//! File version resolution.

use std::sync::Arc;

use tracing::debug;

use mediahub_core::error::MediaError;
use mediahub_core::result::AppResult;
use mediahub_core::traits::Repository;
use mediahub_entity::media::{FileVersion, MediaAsset};

/// Outcome of resolving a media id and optional version.
#[derive(Debug, Clone)]
pub enum FileVersionLookup {
    /// The requested revision.
    Found(FileVersion),
    /// No media (or no file) exists for the id.
    AssetMissing,
    /// The media exists but has no revision with this number.
    VersionMissing {
        /// Media identifier.
        id: i64,
        /// The version that was looked for.
        version: i32,
    },
}

impl FileVersionLookup {
    /// Collapse into `Ok(None)` for a missing asset and an error for a
    /// missing version.
    pub fn into_result(self) -> Result<Option<FileVersion>, MediaError> {
        match self {
            Self::Found(version) => Ok(Some(version)),
            Self::AssetMissing => Ok(None),
            Self::VersionMissing { id, version } => {
                Err(MediaError::FileVersionNotFound { id, version })
            }
        }
    }
}

/// Locates the stored revision for a download or image request.
#[derive(Clone)]
pub struct FileVersionResolver {
    media_repo: Arc<dyn Repository<MediaAsset, i64>>,
}

impl std::fmt::Debug for FileVersionResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileVersionResolver").finish()
    }
}

impl FileVersionResolver {
    /// Creates a new resolver.
    pub fn new(media_repo: Arc<dyn Repository<MediaAsset, i64>>) -> Self {
        Self { media_repo }
    }

    /// Resolves `version` of media `id`, defaulting to the primary file's
    /// current version.
    pub async fn resolve(&self, id: i64, version: Option<i32>) -> AppResult<FileVersionLookup> {
        let Some(asset) = self.media_repo.find_by_id(&id).await? else {
            debug!(media_id = id, "Media not found");
            return Ok(FileVersionLookup::AssetMissing);
        };

        Ok(lookup(&asset, version))
    }
}

/// Picks the revision from a loaded asset. The first match wins.
pub fn lookup(asset: &MediaAsset, version: Option<i32>) -> FileVersionLookup {
    let Some(file) = asset.primary_file() else {
        return FileVersionLookup::AssetMissing;
    };

    let target = version.unwrap_or(file.version);

    match file.find_version(target) {
        Some(found) => FileVersionLookup::Found(found.clone()),
        None => FileVersionLookup::VersionMissing {
            id: asset.id,
            version: target,
        },
    }
}
