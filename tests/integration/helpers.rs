//! Shared test helpers for integration tests.
#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::http::{HeaderMap, Request, StatusCode};
use bytes::Bytes;
use chrono::Utc;
use http_body_util::BodyExt;
use serde_json::Value;
use sqlx::types::Json;
use tempfile::TempDir;
use tower::ServiceExt;

use mediahub_api::{AppState, build_app};
use mediahub_core::config::{
    AppConfig, DatabaseConfig, DownloadConfig, FormatConfig, FormatMode, MediaConfig,
};
use mediahub_core::error::AppError;
use mediahub_core::result::AppResult;
use mediahub_core::traits::{MediaManager, Repository};
use mediahub_core::types::StorageOptions;
use mediahub_entity::media::{File, FileVersion, MediaAsset};
use mediahub_service::{
    ImageFormatManager, MediaStreamService, MimeDispositionResolver, SlugPathCleaner,
};
use mediahub_storage::LocalMediaStorage;

/// Media aggregates kept in memory.
#[derive(Default)]
pub struct MemoryMediaRepository {
    assets: Mutex<HashMap<i64, MediaAsset>>,
}

#[async_trait]
impl Repository<MediaAsset, i64> for MemoryMediaRepository {
    async fn find_by_id(&self, id: &i64) -> AppResult<Option<MediaAsset>> {
        Ok(self.assets.lock().unwrap().get(id).cloned())
    }
}

/// Download counters kept in memory.
#[derive(Default)]
pub struct MemoryCounter {
    counts: Mutex<HashMap<i64, i64>>,
    pub fail: Mutex<bool>,
}

impl MemoryCounter {
    pub fn count(&self, file_version_id: i64) -> i64 {
        self.counts
            .lock()
            .unwrap()
            .get(&file_version_id)
            .copied()
            .unwrap_or(0)
    }
}

#[async_trait]
impl MediaManager for MemoryCounter {
    async fn increase_download_counter(&self, file_version_id: i64) -> AppResult<()> {
        if *self.fail.lock().unwrap() {
            return Err(AppError::database("counter update failed"));
        }
        *self.counts.lock().unwrap().entry(file_version_id).or_insert(0) += 1;
        Ok(())
    }
}

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Media lookup backing the router
    pub media: Arc<MemoryMediaRepository>,
    /// Download counters backing the router
    pub counter: Arc<MemoryCounter>,
    /// Upload root, removed on drop
    pub upload_dir: TempDir,
}

impl TestApp {
    /// Create a new test application over an empty upload directory
    pub async fn new() -> Self {
        let upload_dir = tempfile::tempdir().expect("Failed to create upload dir");

        let config = AppConfig {
            server: Default::default(),
            database: DatabaseConfig {
                url: "postgres://unused".into(),
                max_connections: 1,
                min_connections: 0,
                connect_timeout_seconds: 1,
                idle_timeout_seconds: 1,
            },
            storage: Default::default(),
            media: MediaConfig {
                download: DownloadConfig {
                    inline_mime_types: vec!["application/pdf".into()],
                    ..Default::default()
                },
                formats: vec![
                    FormatConfig {
                        key: "50x50".into(),
                        width: Some(50),
                        height: Some(50),
                        mode: FormatMode::Outbound,
                        quality: 80,
                    },
                    FormatConfig {
                        key: "100x".into(),
                        width: Some(100),
                        height: None,
                        mode: FormatMode::Inset,
                        quality: 80,
                    },
                ],
                ..Default::default()
            },
            logging: Default::default(),
        };

        let storage = Arc::new(
            LocalMediaStorage::new(&upload_dir.path().to_string_lossy())
                .await
                .expect("Failed to init storage"),
        );
        let media = Arc::new(MemoryMediaRepository::default());
        let counter = Arc::new(MemoryCounter::default());

        let format_manager = Arc::new(ImageFormatManager::new(
            media.clone(),
            storage.clone(),
            &config.media,
        ));
        let stream_service = Arc::new(MediaStreamService::new(
            media.clone(),
            storage,
            Arc::new(SlugPathCleaner::default()),
            Arc::new(MimeDispositionResolver::from_config(&config.media.download)),
            counter.clone(),
            format_manager,
        ));

        let router = build_app(AppState::new(Arc::new(config), stream_service));

        Self {
            router,
            media,
            counter,
            upload_dir,
        }
    }

    /// Register a media whose single file points at `current`, writing
    /// each version's original to the upload directory.
    pub fn add_media(&self, id: i64, current: i32, versions: Vec<(FileVersion, Vec<u8>)>) {
        let mut file_versions = Vec::new();
        for (version, content) in versions {
            let dir = self.upload_dir.path().join("01");
            std::fs::create_dir_all(&dir).expect("Failed to create segment dir");
            let name = version
                .storage_options
                .get_str("fileName")
                .expect("fileName option")
                .to_string();
            std::fs::write(dir.join(name), content).expect("Failed to write original");
            file_versions.push(version);
        }

        self.media.assets.lock().unwrap().insert(
            id,
            MediaAsset {
                id,
                files: vec![File {
                    id,
                    media_id: id,
                    version: current,
                    file_versions,
                }],
                created_at: Utc::now(),
            },
        );
    }

    /// Send a GET request
    pub async fn get(&self, path: &str, headers: &[(&str, &str)]) -> TestResponse {
        let mut req = Request::builder().method("GET").uri(path);
        for (name, value) in headers {
            req = req.header(*name, *value);
        }
        let req = req.body(Body::empty()).expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let headers = response.headers().clone();
        let body = response
            .into_body()
            .collect()
            .await
            .expect("Failed to read body")
            .to_bytes();

        TestResponse {
            status,
            headers,
            body,
        }
    }
}

/// A stored file version with the local segment layout.
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

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Response headers
    pub headers: HeaderMap,
    /// Raw body
    pub body: Bytes,
}

impl TestResponse {
    /// Header value as a string, empty when absent
    pub fn header(&self, name: &str) -> &str {
        self.headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
    }

    /// Body parsed as JSON, `Null` when it is not JSON
    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.body).unwrap_or(Value::Null)
    }
}
