//! In-memory collaborators shared by the unit tests.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use chrono::Utc;
use sqlx::types::Json;

use mediahub_core::error::{AppError, ImageProxyError, MediaError};
use mediahub_core::result::AppResult;
use mediahub_core::traits::{MediaManager, MediaStorage, Repository};
use mediahub_core::types::{StorageOptions, StorageResource};
use mediahub_entity::media::{File, FileVersion, MediaAsset};

#[derive(Default)]
pub struct InMemoryMediaRepository {
    pub assets: HashMap<i64, MediaAsset>,
    pub fail: bool,
}

impl InMemoryMediaRepository {
    pub fn with(assets: Vec<MediaAsset>) -> Self {
        Self {
            assets: assets.into_iter().map(|a| (a.id, a)).collect(),
            fail: false,
        }
    }
}

#[async_trait]
impl Repository<MediaAsset, i64> for InMemoryMediaRepository {
    async fn find_by_id(&self, id: &i64) -> AppResult<Option<MediaAsset>> {
        if self.fail {
            return Err(AppError::database("connection refused"));
        }
        Ok(self.assets.get(id).cloned())
    }
}

#[derive(Default)]
pub struct RecordingMediaManager {
    pub calls: Mutex<Vec<i64>>,
    pub fail: AtomicBool,
}

impl RecordingMediaManager {
    pub fn calls(&self) -> Vec<i64> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl MediaManager for RecordingMediaManager {
    async fn increase_download_counter(&self, file_version_id: i64) -> AppResult<()> {
        self.calls.lock().unwrap().push(file_version_id);
        if self.fail.load(Ordering::SeqCst) {
            return Err(AppError::database("counter table locked"));
        }
        Ok(())
    }
}

/// Storage resolving `{root}/{segment}/{fileName}` without touching disk.
#[derive(Debug)]
pub struct FakeStorage {
    pub root: PathBuf,
}

#[async_trait]
impl MediaStorage for FakeStorage {
    async fn load(
        &self,
        _file_name: &str,
        _version: i32,
        options: &StorageOptions,
    ) -> Result<StorageResource, MediaError> {
        match (options.get_str("segment"), options.get_str("fileName")) {
            (Some(segment), Some(name)) => {
                Ok(StorageResource::new(
                self.root.join(segment).join(name),
                format!("{segment}/{name}"),
            ))
            }
            _ => Err(ImageProxyError::OriginalNotFound("missing options".into()).into()),
        }
    }
}

pub fn file_version(id: i64, version: i32, name: &str, mime: Option<&str>, size: i64) -> FileVersion {
    FileVersion {
        id,
        file_id: 1,
        version,
        name: name.to_string(),
        size,
        mime_type: mime.map(String::from),
        storage_options: Json(StorageOptions::local("01", format!("{id}-{name}"))),
        download_counter: 0,
        created_at: Utc::now(),
    }
}

pub fn asset(id: i64, current: i32, versions: Vec<FileVersion>) -> MediaAsset {
    MediaAsset {
        id,
        files: vec![File {
            id: 1,
            media_id: id,
            version: current,
            file_versions: versions,
        }],
        created_at: Utc::now(),
    }
}
