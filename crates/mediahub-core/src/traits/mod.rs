//! Collaborator traits defined in `mediahub-core` and implemented by other
//! crates. Services receive them as `Arc<dyn Trait>` at construction time.

pub mod cleaner;
pub mod disposition;
pub mod format;
pub mod media_manager;
pub mod repository;
pub mod storage;

pub use cleaner::PathCleaner;
pub use disposition::DispositionResolver;
pub use format::FormatManager;
pub use media_manager::MediaManager;
pub use repository::Repository;
pub use storage::MediaStorage;
