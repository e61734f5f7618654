//! Unified error types for MediaHub.
//!
//! Infrastructure failures (database, configuration, I/O) are reported as
//! [`AppError`]. Failures that belong to the media domain carry a numeric
//! code and are reported as [`MediaError`] or, on the image path,
//! [`ImageProxyError`]. The HTTP layer maps both domain errors to 404.

use std::fmt;
use thiserror::Error;

/// Numeric codes carried by media errors and echoed in 404 messages.
pub mod codes {
    /// A backend (repository) failure surfaced on a media path.
    pub const BACKEND: u32 = 5000;
    /// The requested file version does not exist or is malformed.
    pub const FILE_VERSION_NOT_FOUND: u32 = 5004;
    /// The image URL could not be parsed.
    pub const IMAGE_PROXY_URL_INVALID: u32 = 5005;
    /// The media behind an image URL does not exist.
    pub const IMAGE_PROXY_MEDIA_NOT_FOUND: u32 = 5006;
    /// The format or the original is not a renderable image.
    pub const IMAGE_PROXY_INVALID_IMAGE_FORMAT: u32 = 5007;
    /// The format definition cannot be applied.
    pub const IMAGE_PROXY_INVALID_FORMAT_OPTIONS: u32 = 5008;
    /// The original bytes are missing from storage.
    pub const IMAGE_PROXY_ORIGINAL_NOT_FOUND: u32 = 5009;
}

/// Top-level error kind categorization for infrastructure errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum ErrorKind {
    /// The requested resource was not found.
    NotFound,
    /// Input validation failed.
    Validation,
    /// An internal server error occurred.
    Internal,
    /// A database error occurred.
    Database,
    /// A storage I/O error occurred.
    Storage,
    /// A configuration error occurred.
    Configuration,
    /// A serialization/deserialization error occurred.
    Serialization,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound => write!(f, "NOT_FOUND"),
            Self::Validation => write!(f, "VALIDATION"),
            Self::Internal => write!(f, "INTERNAL"),
            Self::Database => write!(f, "DATABASE"),
            Self::Storage => write!(f, "STORAGE"),
            Self::Configuration => write!(f, "CONFIGURATION"),
            Self::Serialization => write!(f, "SERIALIZATION"),
        }
    }
}

/// The unified infrastructure error used throughout MediaHub.
#[derive(Debug, Error)]
#[error("{kind}: {message}")]
pub struct AppError {
    /// The category of error.
    pub kind: ErrorKind,
    /// A human-readable error message.
    pub message: String,
    /// Optional underlying cause.
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl AppError {
    /// Create a new application error.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            source: None,
        }
    }

    /// Create a new application error with an underlying cause.
    pub fn with_source(
        kind: ErrorKind,
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            kind,
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a not-found error.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::NotFound, message)
    }

    /// Create a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Validation, message)
    }

    /// Create an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Internal, message)
    }

    /// Create a database error.
    pub fn database(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Database, message)
    }

    /// Create a storage error.
    pub fn storage(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Storage, message)
    }

    /// Create a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Configuration, message)
    }
}

impl Clone for AppError {
    fn clone(&self) -> Self {
        Self {
            kind: self.kind,
            message: self.message.clone(),
            source: None,
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        Self::with_source(
            ErrorKind::Serialization,
            format!("JSON serialization error: {err}"),
            err,
        )
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        Self::with_source(ErrorKind::Storage, format!("I/O error: {err}"), err)
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        Self::with_source(
            ErrorKind::Configuration,
            format!("Configuration error: {err}"),
            err,
        )
    }
}

/// Failures raised while producing a formatted image.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ImageProxyError {
    /// The URL does not follow the `{format}/{segment}/{id}-{name}` layout.
    #[error("Invalid image url \"{0}\"")]
    InvalidUrl(String),
    /// No media exists for the id in the URL.
    #[error("Media with id {0} not found")]
    MediaNotFound(i64),
    /// Unknown format key, or the original is not an image.
    #[error("Invalid image format \"{0}\"")]
    InvalidImageFormat(String),
    /// The format cannot be applied to the image.
    #[error("Invalid format options: {0}")]
    InvalidFormatOptions(String),
    /// The original bytes could not be located in storage.
    #[error("Original media at \"{0}\" not found")]
    OriginalNotFound(String),
}

impl ImageProxyError {
    /// The numeric code reported to clients.
    pub fn code(&self) -> u32 {
        match self {
            Self::InvalidUrl(_) => codes::IMAGE_PROXY_URL_INVALID,
            Self::MediaNotFound(_) => codes::IMAGE_PROXY_MEDIA_NOT_FOUND,
            Self::InvalidImageFormat(_) => codes::IMAGE_PROXY_INVALID_IMAGE_FORMAT,
            Self::InvalidFormatOptions(_) => codes::IMAGE_PROXY_INVALID_FORMAT_OPTIONS,
            Self::OriginalNotFound(_) => codes::IMAGE_PROXY_ORIGINAL_NOT_FOUND,
        }
    }
}

/// Domain errors on the download path. Every variant maps to a 404.
#[derive(Debug, Clone, Error)]
pub enum MediaError {
    /// The asset exists but has no file version with this number.
    #[error("File version {version} of media {id} not found")]
    FileVersionNotFound {
        /// Media identifier.
        id: i64,
        /// Requested version number.
        version: i32,
    },
    /// The `v` query parameter is not a version number.
    #[error("Invalid file version \"{0}\"")]
    InvalidVersion(String),
    /// A stored file version row cannot be served as-is.
    #[error("File version {id} is malformed: {reason}")]
    MalformedFileVersion {
        /// File version identifier.
        id: i64,
        /// What is wrong with the stored row.
        reason: String,
    },
    /// Storage could not locate the bytes.
    #[error(transparent)]
    ImageProxy(#[from] ImageProxyError),
    /// A collaborator failed with an infrastructure error.
    #[error("{0}")]
    Backend(String),
}

impl MediaError {
    /// The numeric code reported to clients.
    pub fn code(&self) -> u32 {
        match self {
            Self::FileVersionNotFound { .. }
            | Self::InvalidVersion(_)
            | Self::MalformedFileVersion { .. } => codes::FILE_VERSION_NOT_FOUND,
            Self::ImageProxy(e) => e.code(),
            Self::Backend(_) => codes::BACKEND,
        }
    }
}

impl From<AppError> for MediaError {
    fn from(err: AppError) -> Self {
        Self::Backend(err.message)
    }
}
