//! Local filesystem storage for media originals.
//!
//! Originals live at `{upload_path}/{segment}/{fileName}`, where `segment`
//! and `fileName` come from the file version's storage options.

use std::path::PathBuf;

use async_trait::async_trait;
use tokio::fs;
use tracing::debug;

use mediahub_core::error::{AppError, ErrorKind, ImageProxyError, MediaError};
use mediahub_core::result::AppResult;
use mediahub_core::traits::MediaStorage;
use mediahub_core::types::{StorageOptions, StorageResource};

const SEGMENT_KEY: &str = "segment";
const FILE_NAME_KEY: &str = "fileName";

/// Local filesystem media storage.
#[derive(Debug, Clone)]
pub struct LocalMediaStorage {
    /// Root directory for all stored originals.
    root: PathBuf,
}

impl LocalMediaStorage {
    /// Create a new local storage rooted at the given path.
    pub async fn new(upload_path: &str) -> AppResult<Self> {
        let root = PathBuf::from(upload_path);
        fs::create_dir_all(&root).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to create upload path: {}", root.display()),
                e,
            )
        })?;
        Ok(Self { root })
    }

    /// Resolve the on-disk path described by `options`.
    fn resolve(&self, options: &StorageOptions) -> Result<StorageResource, ImageProxyError> {
        let segment = options.get_str(SEGMENT_KEY).filter(|s| is_plain_component(s));
        let file_name = options.get_str(FILE_NAME_KEY).filter(|s| is_plain_component(s));

        match (segment, file_name) {
            (Some(segment), Some(file_name)) => Ok(StorageResource::new(
                self.root.join(segment).join(file_name),
                format!("{segment}/{file_name}"),
            )),
            _ => Err(ImageProxyError::OriginalNotFound(format!(
                "invalid storage options {}",
                option_keys(options)
            ))),
        }
    }
}

/// A single path component: non-empty, no separators, not `.`/`..`.
fn is_plain_component(s: &str) -> bool {
    !s.is_empty() && s != "." && s != ".." && !s.contains(['/', '\\', '\0'])
}

fn option_keys(options: &StorageOptions) -> String {
    let keys: Vec<&str> = options.0.keys().map(String::as_str).collect();
    format!("[{}]", keys.join(", "))
}

#[async_trait]
impl MediaStorage for LocalMediaStorage {
    async fn load(
        &self,
        file_name: &str,
        version: i32,
        options: &StorageOptions,
    ) -> Result<StorageResource, MediaError> {
        let resource = self.resolve(options)?;

        let exists = fs::try_exists(resource.path()).await.unwrap_or(false);
        if !exists {
            debug!(file_name, version, path = %resource.path().display(), "Original missing");
            return Err(ImageProxyError::OriginalNotFound(resource.location().to_string()).into());
        }

        debug!(file_name, version, path = %resource.path().display(), "Located original");
        Ok(resource)
    }
}
