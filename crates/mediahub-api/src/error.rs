//! Maps domain errors to HTTP responses.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use mediahub_core::error::{AppError, ErrorKind, ImageProxyError, MediaError};

/// Standard API error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    /// Machine-readable error code.
    pub error: String,
    /// Human-readable message.
    pub message: String,
    /// Optional details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

/// Errors returned by handlers.
#[derive(Debug)]
pub enum ApiError {
    /// Infrastructure failure outside the media paths.
    App(AppError),
    /// Failure on the download path.
    Download(MediaError),
    /// Failure on the image path.
    Image(ImageProxyError),
}

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self::App(err)
    }
}

impl From<MediaError> for ApiError {
    fn from(err: MediaError) -> Self {
        Self::Download(err)
    }
}

impl From<ImageProxyError> for ApiError {
    fn from(err: ImageProxyError) -> Self {
        Self::Image(err)
    }
}

fn body(status: StatusCode, error_code: &str, message: String) -> Response {
    let body = ApiErrorResponse {
        error: error_code.to_string(),
        message,
        details: None,
    };

    (status, Json(body)).into_response()
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            Self::Download(err) => {
                if let MediaError::Backend(message) = &err {
                    tracing::error!(error = %message, "Backend failure on download");
                }
                body(
                    StatusCode::NOT_FOUND,
                    "NOT_FOUND",
                    format!("File not found: {} {}", err.code(), err),
                )
            }
            Self::Image(err) => {
                tracing::debug!(error = %err, "Image create error");
                body(
                    StatusCode::NOT_FOUND,
                    "NOT_FOUND",
                    format!("Image create error. Code: {}", err.code()),
                )
            }
            Self::App(err) => {
                let (status, error_code) = match err.kind {
                    ErrorKind::NotFound => (StatusCode::NOT_FOUND, "NOT_FOUND"),
                    ErrorKind::Validation => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR"),
                    _ => {
                        tracing::error!(error = %err.message, "Internal server error");
                        (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR")
                    }
                };
                body(status, error_code, err.message)
            }
        }
    }
}
