//! Upload slot entity.

use serde::{Deserialize, Serialize};

use super::version::FileVersion;

/// A named upload slot holding the revisions of one file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct File {
    /// File identifier.
    pub id: i64,
    /// Owning media.
    pub media_id: i64,
    /// Version number of the current revision.
    ///
    /// This pointer, not the highest number, defines "latest".
    pub version: i32,
    /// Revisions in storage order.
    pub file_versions: Vec<FileVersion>,
}

impl File {
    /// The first revision carrying `version`.
    pub fn find_version(&self, version: i32) -> Option<&FileVersion> {
        self.file_versions.iter().find(|v| v.version == version)
    }
}
