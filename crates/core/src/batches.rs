//! Wildling batch intake rules.

use crate::error::CoreError;

/// Status given to every newly received batch.
pub const STATUS_RECEIVED: &str = "received";

pub fn validate_wildlings_count(count: i32) -> Result<(), CoreError> {
    if count > 0 {
        Ok(())
    } else {
        Err(CoreError::Validation(
            "wildlings_count must be greater than zero".into(),
        ))
    }
}
