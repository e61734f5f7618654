//! File version repository: download bookkeeping.

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::debug;

use mediahub_core::error::{AppError, ErrorKind};
use mediahub_core::result::AppResult;
use mediahub_core::traits::MediaManager;

/// Write access to file version counters.
#[derive(Debug, Clone)]
pub struct FileVersionRepository {
    pool: PgPool,
}

impl FileVersionRepository {
    /// Create a new file version repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MediaManager for FileVersionRepository {
    async fn increase_download_counter(&self, file_version_id: i64) -> AppResult<()> {
        let result = sqlx::query(
            "UPDATE media_file_versions SET download_counter = download_counter + 1 WHERE id = $1",
        )
        .bind(file_version_id)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to increase download counter", e)
        })?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(format!(
                "File version {file_version_id} not found"
            )));
        }

        debug!(file_version_id, "Download counter increased");
        Ok(())
    }
}
