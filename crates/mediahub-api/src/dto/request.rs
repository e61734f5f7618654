//! Request DTOs.

use std::collections::HashMap;

use mediahub_core::error::MediaError;
use mediahub_service::DownloadRequest;

/// Query parameters of the download endpoints.
#[derive(Debug, Clone, Default)]
pub struct DownloadQuery {
    /// `v`: explicit version number.
    pub version: Option<String>,
    /// `no-count`: skip the download counter.
    pub no_count: Option<String>,
    /// `inline`: force the disposition.
    pub inline: Option<String>,
}

impl DownloadQuery {
    /// Picks the known keys out of the raw query map.
    pub fn from_params(params: &HashMap<String, String>) -> Self {
        Self {
            version: params.get("v").cloned(),
            no_count: params.get("no-count").cloned(),
            inline: params.get("inline").cloned(),
        }
    }

    /// Builds the service request. A blank `v` selects the current version.
    pub fn into_request(self, id: i64, locale: String) -> Result<DownloadRequest, MediaError> {
        let version = match self.version.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(v) => Some(
                v.parse::<i32>()
                    .map_err(|_| MediaError::InvalidVersion(v.to_string()))?,
            ),
        };

        Ok(DownloadRequest {
            id,
            version,
            no_count: self.no_count.as_deref().is_some_and(parse_flag),
            inline: self.inline.as_deref().map(parse_flag),
            locale,
        })
    }
}

/// A query flag is set unless its value is empty, `0` or `false`.
pub fn parse_flag(value: &str) -> bool {
    !matches!(value.trim(), "" | "0" | "false")
}
