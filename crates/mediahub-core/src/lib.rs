//! # mediahub-core
//!
//! Core crate for MediaHub. Contains the collaborator traits the media
//! streaming services are built against, configuration schemas, shared
//! value types, and the unified error system.
//!
//! This crate has **no** internal dependencies on other MediaHub crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;
pub mod types;

pub use error::{AppError, ImageProxyError, MediaError};
pub use result::AppResult;
