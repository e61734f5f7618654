//! Disposition selection.

use crate::types::DispositionType;

/// Chooses inline or attachment delivery from a MIME type.
pub trait DispositionResolver: Send + Sync + 'static {
    /// Disposition for `mime_type`.
    fn get_by_mime_type(&self, mime_type: &str) -> DispositionType;
}
