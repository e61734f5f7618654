//! Application state shared across all handlers and middleware.

use std::sync::Arc;
use std::time::Instant;

use mediahub_core::config::AppConfig;
use mediahub_service::MediaStreamService;

/// Shared state passed to every handler through Axum's `State` extractor.
#[derive(Clone)]
pub struct AppState {
    /// Loaded configuration.
    pub config: Arc<AppConfig>,
    /// Image and download dispatcher.
    pub stream_service: Arc<MediaStreamService>,
    /// Process start, reported by the health check.
    pub started_at: Instant,
}

impl AppState {
    /// Creates the state, stamping the start time.
    pub fn new(config: Arc<AppConfig>, stream_service: Arc<MediaStreamService>) -> Self {
        Self {
            config,
            stream_service,
            started_at: Instant::now(),
        }
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState").finish()
    }
}
