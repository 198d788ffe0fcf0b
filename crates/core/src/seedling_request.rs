//! Seedling request lifecycle rules.
//!
//! A request is created `pending` and moved to `approved` or `rejected` by a
//! review. Reviews are not guarded against re-review: a later review
//! overwrites the earlier decision. Releases require the request to be
//! `approved` at insert time and are never capped against the requested
//! total.

use crate::error::CoreError;

/// Request awaiting review.
pub const STATUS_PENDING: &str = "pending";

/// Request approved for release.
pub const STATUS_APPROVED: &str = "approved";

/// Request declined.
pub const STATUS_REJECTED: &str = "rejected";

/// All valid request status values.
pub const VALID_STATUSES: &[&str] = &[STATUS_PENDING, STATUS_APPROVED, STATUS_REJECTED];

/// A review decision submitted against a seedling request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewAction {
    Approve,
    Reject,
}

impl ReviewAction {
    /// Parse the `action` field of a review body.
    ///
    /// A missing action and an unknown action are both validation errors,
    /// with distinct messages.
    pub fn parse(action: Option<&str>) -> Result<Self, CoreError> {
        match action.map(str::trim) {
            None | Some("") => Err(CoreError::Validation("Action required".into())),
            Some("approve") => Ok(Self::Approve),
            Some("reject") => Ok(Self::Reject),
            Some(other) => Err(CoreError::Validation(format!(
                "Unknown action '{other}'. Must be one of: approve, reject"
            ))),
        }
    }

    /// The status the request ends up in after this action.
    pub fn target_status(self) -> &'static str {
        match self {
            Self::Approve => STATUS_APPROVED,
            Self::Reject => STATUS_REJECTED,
        }
    }

    /// Only approvals carry a scheduled release date; rejections ignore it.
    pub fn applies_release_date(self) -> bool {
        matches!(self, Self::Approve)
    }
}

/// Sum requested species quantities into the request's `total_quantity`.
///
/// Computed once at submission. Negative quantities and overflow are
/// rejected.
pub fn total_quantity(quantities: &[i32]) -> Result<i32, CoreError> {
    quantities.iter().try_fold(0i32, |acc, &q| {
        if q < 0 {
            return Err(CoreError::Validation(
                "Species quantity must not be negative".into(),
            ));
        }
        acc.checked_add(q)
            .ok_or_else(|| CoreError::Validation("Total quantity is too large".into()))
    })
}

/// Reject a non-positive hectarage; `0` is treated the same as missing.
pub fn validate_hectarage(hectarage: f64) -> Result<(), CoreError> {
    if hectarage.is_finite() && hectarage > 0.0 {
        Ok(())
    } else {
        Err(CoreError::Validation(
            "hectarage must be a positive number".into(),
        ))
    }
}

/// Ensure a request may receive a release.
pub fn ensure_releasable(status: &str) -> Result<(), CoreError> {
    if status == STATUS_APPROVED {
        Ok(())
    } else {
        Err(CoreError::Precondition(
            "Request must be approved before releasing".into(),
        ))
    }
}

/// Validate a released quantity. Zero counts as missing.
pub fn validate_release_quantity(quantity: i32) -> Result<(), CoreError> {
    if quantity > 0 {
        Ok(())
    } else {
        Err(CoreError::Validation(
            "quantity_released must be greater than zero".into(),
        ))
    }
}

/// Human-facing request code, e.g. `SR-2024-00017`.
pub fn format_request_code(year: i32, id: i64) -> String {
    format!("SR-{year}-{id:05}")
}
