//! Convenience result type alias for Stamboek.

use crate::error::AppError;

/// A specialized `Result` type for Stamboek operations.
pub type AppResult<T> = Result<T, AppError>;
