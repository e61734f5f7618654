//! Storage location types shared between storage backends and the
//! response builders.

use std::path::{Path, PathBuf};
use std::pin::Pin;

use bytes::Bytes;
use futures::{Stream, StreamExt};
use serde::{Deserialize, Serialize};
use tokio_util::io::ReaderStream;

use crate::error::{ImageProxyError, MediaError};

/// A byte stream type used for streaming file contents.
pub type ByteStream = Pin<Box<dyn Stream<Item = Result<Bytes, std::io::Error>> + Send>>;

/// Opaque storage location bag attached to every file version.
///
/// Only the storage backend interprets the keys.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StorageOptions(pub serde_json::Map<String, serde_json::Value>);

impl StorageOptions {
    /// Options for the local segment layout.
    pub fn local(segment: impl Into<String>, file_name: impl Into<String>) -> Self {
        let mut map = serde_json::Map::new();
        map.insert("segment".into(), serde_json::Value::String(segment.into()));
        map.insert("fileName".into(), serde_json::Value::String(file_name.into()));
        Self(map)
    }

    /// Read a string option.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(|v| v.as_str())
    }
}

/// A located original, streamed by the transport layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageResource {
    path: PathBuf,
    /// Storage-relative name reported to clients instead of `path`.
    location: String,
}

impl StorageResource {
    /// Wrap a filesystem path known to clients as `location`.
    pub fn new(path: impl Into<PathBuf>, location: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            location: location.into(),
        }
    }

    /// Filesystem path of the resource.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Storage-relative location, e.g. `01/report.pdf`.
    pub fn location(&self) -> &str {
        &self.location
    }

    /// Open the resource as a byte stream.
    pub async fn open(&self) -> Result<ByteStream, MediaError> {
        let file = tokio::fs::File::open(&self.path)
            .await
            .map_err(|_| self.not_found())?;
        Ok(Box::pin(ReaderStream::new(file).map(|r| r.map(Bytes::from))))
    }

    /// Read the whole resource into memory.
    pub async fn read_all(&self) -> Result<Bytes, MediaError> {
        let data = tokio::fs::read(&self.path)
            .await
            .map_err(|_| self.not_found())?;
        Ok(Bytes::from(data))
    }

    fn not_found(&self) -> MediaError {
        ImageProxyError::OriginalNotFound(self.location.clone()).into()
    }
}
