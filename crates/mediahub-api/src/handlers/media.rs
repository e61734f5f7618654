//! Media image and download handlers.

use std::collections::HashMap;

use axum::body::Body;
use axum::extract::{Path, Query, State};
use axum::http::{StatusCode, Uri, header};
use axum::response::{IntoResponse, Response};

use mediahub_core::error::{ImageProxyError, MediaError};
use mediahub_service::DownloadOutcome;

use crate::dto::request::DownloadQuery;
use crate::error::ApiError;
use crate::extractors::Locale;
use crate::state::AppState;

/// GET {image_url_prefix}/{format}/{segment}/{id}-{name}
pub async fn get_image(State(state): State<AppState>, uri: Uri) -> Result<Response, ApiError> {
    let image = state.stream_service.image(uri.path()).await?;

    let response = Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, image.content_type.as_str())
        .header(
            header::CACHE_CONTROL,
            format!("public, max-age={}", image.max_age_seconds),
        )
        .header(header::CONTENT_LENGTH, image.data.len())
        .body(Body::from(image.data))
        .map_err(|_| ImageProxyError::InvalidImageFormat(image.content_type))?;

    Ok(response)
}

/// GET /media/{id}/download
pub async fn download(
    State(state): State<AppState>,
    locale: Locale,
    Path(id): Path<String>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Response, ApiError> {
    stream_download(&state, &id, locale, &params).await
}

/// GET /media/{id}/download/{slug}
///
/// The slug only makes the URL readable; it is not checked.
pub async fn download_with_slug(
    State(state): State<AppState>,
    locale: Locale,
    Path((id, _slug)): Path<(String, String)>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Response, ApiError> {
    stream_download(&state, &id, locale, &params).await
}

async fn stream_download(
    state: &AppState,
    id: &str,
    locale: Locale,
    params: &HashMap<String, String>,
) -> Result<Response, ApiError> {
    // Non-numeric ids cannot name a media.
    let Ok(id) = id.parse::<i64>() else {
        return Ok(StatusCode::NOT_FOUND.into_response());
    };

    let request = DownloadQuery::from_params(params).into_request(id, locale.0)?;

    let file = match state.stream_service.download(&request).await? {
        DownloadOutcome::File(file) => file,
        DownloadOutcome::NotFound => return Ok(StatusCode::NOT_FOUND.into_response()),
    };

    let stream = file.resource.open().await?;

    let response = Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, file.content_type)
        .header(header::CONTENT_DISPOSITION, file.content_disposition)
        .header(header::CONTENT_LENGTH, file.content_length)
        .body(Body::from_stream(stream))
        .map_err(|e| MediaError::Backend(format!("Response build failed: {e}")))?;

    Ok(response)
}
