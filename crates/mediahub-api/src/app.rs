//! Application builder: wires services, router and middleware into an Axum
//! app and serves it.

use std::sync::Arc;

use axum::Router;
use sqlx::PgPool;
use tower_http::cors::CorsLayer;

use mediahub_core::config::AppConfig;
use mediahub_core::error::AppError;
use mediahub_core::traits::{FormatManager, Repository};
use mediahub_database::repositories::{FileVersionRepository, MediaRepository};
use mediahub_entity::media::MediaAsset;
use mediahub_service::{
    ImageFormatManager, MediaStreamService, MimeDispositionResolver, SlugPathCleaner,
};
use mediahub_storage::LocalMediaStorage;

use crate::middleware::cors::build_cors_layer;
use crate::router::build_router;
use crate::state::AppState;

/// Builds the complete Axum application with all routes and middleware.
pub fn build_app(state: AppState) -> Router {
    let cors: CorsLayer = build_cors_layer(&state.config.server.cors);
    build_router(state).layer(cors)
}

/// Wires the media services against `db_pool` and local storage.
pub async fn build_state(config: AppConfig, db_pool: PgPool) -> Result<AppState, AppError> {
    let storage = Arc::new(LocalMediaStorage::new(&config.storage.upload_path).await?);
    tracing::info!(path = %config.storage.upload_path, "Local media storage ready");

    let media_repo: Arc<dyn Repository<MediaAsset, i64>> =
        Arc::new(MediaRepository::new(db_pool.clone()));
    let file_version_repo = Arc::new(FileVersionRepository::new(db_pool));

    let format_manager: Arc<dyn FormatManager> = Arc::new(ImageFormatManager::new(
        Arc::clone(&media_repo),
        storage.clone(),
        &config.media,
    ));
    tracing::info!(formats = config.media.formats.len(), "Image formats loaded");

    let stream_service = Arc::new(MediaStreamService::new(
        media_repo,
        storage,
        Arc::new(SlugPathCleaner::default()),
        Arc::new(MimeDispositionResolver::from_config(&config.media.download)),
        file_version_repo,
        format_manager,
    ));

    Ok(AppState::new(Arc::new(config), stream_service))
}

/// Runs the MediaHub server until a shutdown signal arrives.
pub async fn run_server(config: AppConfig, db_pool: PgPool) -> Result<(), AppError> {
    let addr = format!("{}:{}", config.server.host, config.server.port);

    let app = build_app(build_state(config, db_pool).await?);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    tracing::info!("MediaHub server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

    tracing::info!("MediaHub server shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown...");
}
