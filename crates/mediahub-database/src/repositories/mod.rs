//! Concrete repository implementations.

pub mod file_version;
pub mod media;

pub use file_version::FileVersionRepository;
pub use media::MediaRepository;
