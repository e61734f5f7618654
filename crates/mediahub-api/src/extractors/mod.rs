//! Custom Axum extractors.

pub mod locale;

pub use locale::Locale;
