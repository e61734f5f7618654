//! `Locale` extractor: the request language used for filename cleaning.

use std::convert::Infallible;

use axum::extract::FromRequestParts;
use axum::http::header::ACCEPT_LANGUAGE;
use axum::http::request::Parts;

use crate::state::AppState;

/// Lower-case primary language subtag of the request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Locale(pub String);

impl std::ops::Deref for Locale {
    type Target = str;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromRequestParts<AppState> for Locale {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(ACCEPT_LANGUAGE)
            .and_then(|v| v.to_str().ok());

        Ok(Locale(from_accept_language(
            header,
            &state.config.media.default_locale,
        )))
    }
}

/// First language of an `Accept-Language` value, or `default`.
pub fn from_accept_language(header: Option<&str>, default: &str) -> String {
    header
        .and_then(|h| h.split(',').next())
        .and_then(|tag| tag.split(';').next())
        .and_then(|tag| tag.trim().split(['-', '_']).next())
        .filter(|lang| !lang.is_empty() && *lang != "*")
        .map(str::to_lowercase)
        .unwrap_or_else(|| default.to_string())
}
