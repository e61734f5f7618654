//! # mediahub-entity
//!
//! Media domain entity models. A [`media::MediaAsset`] owns ordered
//! [`media::File`]s, each owning immutable [`media::FileVersion`]s.
//! Row structs derive `sqlx::FromRow`.

pub mod media;
