//! Request and response DTOs.

pub mod request;
pub mod response;

use stamboek_core::error::AppError;
use stamboek_core::result::AppResult;
use validator::Validate;

/// Validate a form DTO, mapping violations to a validation error.
pub fn validated<T: Validate>(form: &T) -> AppResult<()> {
    form.validate()
        .map_err(|e| AppError::validation(e.to_string()))
}
