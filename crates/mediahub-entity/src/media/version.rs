//! File version entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use sqlx::types::Json;

use mediahub_core::types::StorageOptions;

/// An immutable revision of a file.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct FileVersion {
    /// Unique version identifier.
    pub id: i64,
    /// The file this version belongs to.
    pub file_id: i64,
    /// Version number, unique per file.
    pub version: i32,
    /// Display name including extension.
    pub name: String,
    /// Stored size in bytes.
    pub size: i64,
    /// MIME type, if known.
    pub mime_type: Option<String>,
    /// Backend-specific location of the bytes.
    pub storage_options: Json<StorageOptions>,
    /// Number of counted downloads.
    pub download_counter: i64,
    /// When this version was uploaded.
    pub created_at: DateTime<Utc>,
}

impl FileVersion {
    /// MIME type, or `None` when absent or blank.
    pub fn mime_type(&self) -> Option<&str> {
        self.mime_type.as_deref().filter(|m| !m.trim().is_empty())
    }
}
