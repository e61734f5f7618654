//! # mediahub-service
//!
//! Media streaming service layer. The dispatcher ([`MediaStreamService`])
//! resolves file versions, picks a disposition, records downloads, and
//! builds streamable responses; [`ImageFormatManager`] renders configured
//! image formats.
//!
//! Services follow constructor injection: every collaborator is provided
//! at construction time as an `Arc<dyn Trait>`.

pub mod cleaner;
pub mod disposition;
pub mod format;
pub mod media;

#[cfg(test)]
pub(crate) mod test_support;

pub use cleaner::SlugPathCleaner;
pub use disposition::MimeDispositionResolver;
pub use format::ImageFormatManager;
pub use media::{
    DownloadOutcome, DownloadRequest, FileResponse, FileResponseBuilder, FileVersionLookup,
    FileVersionResolver, MediaStreamService,
};
