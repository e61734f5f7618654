//! Convenience result type alias for MediaHub.

use crate::error::AppError;

/// A specialized `Result` type for MediaHub infrastructure operations.
pub type AppResult<T> = Result<T, AppError>;
