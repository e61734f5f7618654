//! Image URL parsing.

use mediahub_core::error::ImageProxyError;
use mediahub_core::types::MediaProperties;

/// Extracts media id and format key from `{prefix}/{format}/{segment}/{id}-{name}`.
///
/// The query string is ignored. Any other shape is an
/// [`ImageProxyError::InvalidUrl`].
pub fn parse_image_url(url: &str, prefix: &str) -> Result<MediaProperties, ImageProxyError> {
    let invalid = || ImageProxyError::InvalidUrl(url.to_string());

    let path = url.split(['?', '#']).next().unwrap_or_default();
    let rest = path
        .strip_prefix(prefix.trim_end_matches('/'))
        .and_then(|rest| rest.strip_prefix('/'))
        .ok_or_else(invalid)?;

    let mut parts = rest.split('/');
    let (Some(format), Some(segment), Some(file), None) =
        (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return Err(invalid());
    };

    if format.is_empty() || segment.is_empty() {
        return Err(invalid());
    }

    let (id, name) = file.split_once('-').ok_or_else(invalid)?;
    if name.is_empty() {
        return Err(invalid());
    }
    let id = id.parse::<i64>().map_err(|_| invalid())?;

    Ok(MediaProperties {
        id,
        format: format.to_string(),
    })
}
