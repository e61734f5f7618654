//! Media write-side side effects used by the streaming path.

use async_trait::async_trait;

use crate::result::AppResult;

/// Media bookkeeping triggered by downloads.
#[async_trait]
pub trait MediaManager: Send + Sync + 'static {
    /// Increment the download counter of a file version.
    async fn increase_download_counter(&self, file_version_id: i64) -> AppResult<()>;
}
