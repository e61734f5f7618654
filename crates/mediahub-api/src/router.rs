//! Route definitions for the MediaHub HTTP API.
//!
//! The router receives `AppState` and passes it to all handlers via Axum's
//! `State` extractor.

use axum::{Router, middleware as axum_middleware, routing::get};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the Axum router with all routes and request middleware.
pub fn build_router(state: AppState) -> Router {
    let image_prefix = state
        .config
        .media
        .image_url_prefix
        .trim_end_matches('/')
        .to_string();

    Router::new()
        .merge(image_routes(&image_prefix))
        .merge(download_routes())
        .merge(health_routes())
        .layer(TraceLayer::new_for_http())
        .layer(axum_middleware::from_fn(middleware::logging::request_logging))
        .with_state(state)
}

/// Formatted images. Everything below the prefix reaches the URL parser so
/// malformed paths report an image error code instead of a bare 404.
fn image_routes(prefix: &str) -> Router<AppState> {
    Router::new().route(
        &format!("{prefix}/{{*path}}"),
        get(handlers::media::get_image),
    )
}

/// Raw file downloads.
fn download_routes() -> Router<AppState> {
    Router::new()
        .route("/media/{id}/download", get(handlers::media::download))
        .route(
            "/media/{id}/download/{slug}",
            get(handlers::media::download_with_slug),
        )
}

fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(handlers::health::health))
        .layer(middleware::compression::build_compression_layer())
}
