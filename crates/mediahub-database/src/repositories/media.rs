//! Media aggregate repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

use mediahub_core::error::{AppError, ErrorKind};
use mediahub_core::result::AppResult;
use mediahub_core::traits::Repository;
use mediahub_entity::media::{File, FileVersion, MediaAsset};

#[derive(Debug, FromRow)]
struct MediaRow {
    id: i64,
    created_at: DateTime<Utc>,
}

#[derive(Debug, FromRow)]
struct FileRow {
    id: i64,
    media_id: i64,
    version: i32,
}

/// Loads media assets together with their files and versions.
#[derive(Debug, Clone)]
pub struct MediaRepository {
    pool: PgPool,
}

impl MediaRepository {
    /// Create a new media repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn find_files(&self, media_id: i64) -> AppResult<Vec<FileRow>> {
        sqlx::query_as::<_, FileRow>(
            "SELECT id, media_id, version FROM media_files \
             WHERE media_id = $1 ORDER BY position ASC, id ASC",
        )
        .bind(media_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to load media files", e))
    }

    async fn find_versions(&self, file_ids: &[i64]) -> AppResult<Vec<FileVersion>> {
        sqlx::query_as::<_, FileVersion>(
            "SELECT id, file_id, version, name, size, mime_type, storage_options, \
             download_counter, created_at FROM media_file_versions \
             WHERE file_id = ANY($1) ORDER BY file_id ASC, id ASC",
        )
        .bind(file_ids)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to load file versions", e)
        })
    }
}

#[async_trait]
impl Repository<MediaAsset, i64> for MediaRepository {
    async fn find_by_id(&self, id: &i64) -> AppResult<Option<MediaAsset>> {
        let media = sqlx::query_as::<_, MediaRow>("SELECT id, created_at FROM media WHERE id = $1")
            .bind(*id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find media", e))?;

        let Some(media) = media else {
            return Ok(None);
        };

        let file_rows = self.find_files(media.id).await?;
        let file_ids: Vec<i64> = file_rows.iter().map(|f| f.id).collect();
        let versions = if file_ids.is_empty() {
            Vec::new()
        } else {
            self.find_versions(&file_ids).await?
        };

        Ok(Some(assemble(media, file_rows, versions)))
    }
}

fn assemble(media: MediaRow, file_rows: Vec<FileRow>, versions: Vec<FileVersion>) -> MediaAsset {
    let mut files: Vec<File> = file_rows
        .into_iter()
        .map(|row| File {
            id: row.id,
            media_id: row.media_id,
            version: row.version,
            file_versions: Vec::new(),
        })
        .collect();

    for version in versions {
        if let Some(file) = files.iter_mut().find(|f| f.id == version.file_id) {
            file.file_versions.push(version);
        }
    }

    MediaAsset {
        id: media.id,
        files,
        created_at: media.created_at,
    }
}
