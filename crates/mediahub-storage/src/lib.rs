//! # mediahub-storage
//!
//! Storage backends locating media originals. Only the local segment
//! layout is implemented.

pub mod providers;

pub use providers::local::LocalMediaStorage;
