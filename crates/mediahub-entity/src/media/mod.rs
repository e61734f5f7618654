//! Media aggregate entities.

pub mod asset;
pub mod file;
pub mod version;

pub use asset::MediaAsset;
pub use file::File;
pub use version::FileVersion;
