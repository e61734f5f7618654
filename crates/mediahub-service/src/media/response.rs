//! Download response building: headers and storage location for a file
//! version.

use std::sync::Arc;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

use mediahub_core::error::MediaError;
use mediahub_core::traits::{MediaStorage, PathCleaner};
use mediahub_core::types::{DispositionType, StorageResource};
use mediahub_entity::media::FileVersion;
use tracing::warn;

/// Fallback `Content-Type` for versions without a stored MIME type.
pub const DEFAULT_CONTENT_TYPE: &str = "application/octet-stream";

/// Characters left unescaped in `filename*` (RFC 3986 unreserved).
const FILENAME_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// A located original plus the headers it is served with.
#[derive(Debug, Clone)]
pub struct FileResponse {
    /// Where the bytes live; streamed unchanged by the transport.
    pub resource: StorageResource,
    /// `Content-Type` header value.
    pub content_type: String,
    /// `Content-Disposition` header value.
    pub content_disposition: String,
    /// `Content-Length` header value, taken from the stored size.
    pub content_length: u64,
}

/// Builds [`FileResponse`]s from resolved file versions.
#[derive(Clone)]
pub struct FileResponseBuilder {
    /// Storage backend.
    storage: Arc<dyn MediaStorage>,
    /// Filename cleaner.
    cleaner: Arc<dyn PathCleaner>,
}

impl std::fmt::Debug for FileResponseBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileResponseBuilder")
            .field("storage", &self.storage)
            .finish()
    }
}

impl FileResponseBuilder {
    /// Creates a new response builder.
    pub fn new(storage: Arc<dyn MediaStorage>, cleaner: Arc<dyn PathCleaner>) -> Self {
        Self { storage, cleaner }
    }

    /// Locates the bytes of `file_version` and computes its headers.
    pub async fn build(
        &self,
        file_version: &FileVersion,
        locale: &str,
        disposition: DispositionType,
    ) -> Result<FileResponse, MediaError> {
        let content_type = match file_version.mime_type() {
            Some(mime) if is_header_safe(mime) => mime.to_string(),
            Some(mime) => {
                warn!(
                    file_version_id = file_version.id,
                    mime,
                    "Stored MIME type is not a valid header value"
                );
                return Err(MediaError::MalformedFileVersion {
                    id: file_version.id,
                    reason: "MIME type is not a valid header value".into(),
                });
            }
            None => DEFAULT_CONTENT_TYPE.to_string(),
        };

        let content_length = u64::try_from(file_version.size).map_err(|_| {
            warn!(
                file_version_id = file_version.id,
                size = file_version.size,
                "Stored size is negative"
            );
            MediaError::MalformedFileVersion {
                id: file_version.id,
                reason: format!("negative size {}", file_version.size),
            }
        })?;

        let resource = self
            .storage
            .load(
                &file_version.name,
                file_version.version,
                &file_version.storage_options,
            )
            .await?;

        let fallback = self.clean_up_file_name(&file_version.name, locale);
        let content_disposition = make_disposition(disposition, &file_version.name, &fallback);

        Ok(FileResponse {
            resource,
            content_type,
            content_disposition,
            content_length,
        })
    }

    /// Cleans the base name for `locale` and reattaches the original
    /// extension unchanged.
    pub fn clean_up_file_name(&self, file_name: &str, locale: &str) -> String {
        match file_name.rsplit_once('.') {
            Some((base, extension)) => {
                format!("{}.{}", self.cleaner.cleanup(base, locale), extension)
            }
            None => self.cleaner.cleanup(file_name, locale),
        }
    }
}

/// Formats a `Content-Disposition` value.
///
/// `fallback` is sent as the plain `filename` after replacing anything
/// outside printable ASCII, and `%`, `/` and `\`, with `_`. The original
/// `file_name` is added as an RFC 5987 `filename*` when it differs.
pub fn make_disposition(disposition: DispositionType, file_name: &str, fallback: &str) -> String {
    let ascii_fallback = ascii_fallback(fallback);
    let quoted = ascii_fallback.replace('"', "\\\"");
    let mut value = format!("{}; filename=\"{}\"", disposition.as_str(), quoted);

    if file_name != ascii_fallback {
        value.push_str("; filename*=utf-8''");
        value.push_str(&utf8_percent_encode(file_name, FILENAME_ENCODE_SET).to_string());
    }

    value
}

fn ascii_fallback(name: &str) -> String {
    name.chars()
        .map(|c| match c {
            '%' | '/' | '\\' => '_',
            ' '..='~' => c,
            _ => '_',
        })
        .collect()
}

/// Visible ASCII, space, tab and obs-text; no control characters.
fn is_header_safe(value: &str) -> bool {
    value.bytes().all(|b| b == b'\t' || (b >= 0x20 && b != 0x7f))
}
