//! Media storage configuration.

use serde::{Deserialize, Serialize};

/// Local media storage configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Root directory holding the `{segment}/{fileName}` tree of originals.
    #[serde(default = "default_upload_path")]
    pub upload_path: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            upload_path: default_upload_path(),
        }
    }
}

fn default_upload_path() -> String {
    "./data/uploads/media".to_string()
}
