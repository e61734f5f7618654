//! Shared value types used by the media collaborators.

pub mod disposition;
pub mod image;
pub mod storage;

pub use disposition::DispositionType;
pub use image::{ImageResponse, MediaProperties};
pub use storage::{ByteStream, StorageOptions, StorageResource};
