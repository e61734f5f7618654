//! Image formats: URL parsing, scaling and the cached format manager.

pub mod manager;
pub mod transform;
pub mod url;

pub use manager::ImageFormatManager;
pub use url::parse_image_url;
