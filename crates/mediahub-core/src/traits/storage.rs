//! Storage backend trait for media originals.

use async_trait::async_trait;

use crate::error::MediaError;
use crate::types::storage::{StorageOptions, StorageResource};

/// Locates the stored bytes of a file version.
#[async_trait]
pub trait MediaStorage: Send + Sync + std::fmt::Debug + 'static {
    /// Locate the original for `file_name` at `version`.
    ///
    /// No bytes are read; the returned resource is streamed later.
    async fn load(
        &self,
        file_name: &str,
        version: i32,
        options: &StorageOptions,
    ) -> Result<StorageResource, MediaError>;
}
