//! # mediahub-api
//!
//! HTTP layer for MediaHub built on Axum.
//!
//! Provides the image and download endpoints, health check, middleware
//! (CORS, request logging), the locale extractor and error mapping.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::{build_app, run_server};
pub use state::AppState;
