//! Required-field and DTO validation helpers shared by the API handlers.
//!
//! Inbound request bodies deserialize every field as `Option` so that a
//! missing field surfaces as a [`CoreError::Validation`] (HTTP 400) rather
//! than a JSON extractor rejection.

use validator::Validate;

use crate::error::CoreError;

/// Unwrap a required field, failing with a validation error naming it.
pub fn require<T>(value: Option<T>, field: &str) -> Result<T, CoreError> {
    value.ok_or_else(|| CoreError::Validation(format!("{field} is required")))
}

/// Unwrap a required text field. Whitespace-only strings count as missing.
pub fn require_text(value: Option<String>, field: &str) -> Result<String, CoreError> {
    match value {
        Some(s) if !s.trim().is_empty() => Ok(s.trim().to_string()),
        _ => Err(CoreError::Validation(format!("{field} is required"))),
    }
}

/// Normalise an optional text field: blank strings become `None`.
pub fn optional_text(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

/// Run `validator` rules on a DTO and map failures to [`CoreError::Validation`].
pub fn validate_dto<T: Validate>(dto: &T) -> Result<(), CoreError> {
    dto.validate()
        .map_err(|e| CoreError::Validation(e.to_string()))
}
