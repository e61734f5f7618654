//! Media asset aggregate root.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::file::File;

/// A logical media item grouping its uploaded files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MediaAsset {
    /// Media identifier.
    pub id: i64,
    /// Files in position order. The first one is the primary file.
    pub files: Vec<File>,
    /// When the media was created.
    pub created_at: DateTime<Utc>,
}

impl MediaAsset {
    /// The primary (first) file, if the asset has any.
    pub fn primary_file(&self) -> Option<&File> {
        self.files.first()
    }
}
