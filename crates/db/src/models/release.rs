//! Seedling release models.

use serde::Serialize;
use smartseed_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A row from the `releases` table. Releases are append-only.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Release {
    pub id: DbId,
    pub request_id: DbId,
    pub released_by: Option<DbId>,
    pub quantity_released: i32,
    pub release_date: Timestamp,
    pub notes: Option<String>,
    pub created_at: Timestamp,
}

/// A release joined with request, beneficiary and releaser names.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ReleaseDetail {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub release: Release,
    pub request_code: Option<String>,
    pub beneficiary_name: Option<String>,
    pub released_by_name: Option<String>,
}

#[derive(Debug, Clone)]
pub struct CreateRelease {
    pub request_id: DbId,
    pub released_by: Option<DbId>,
    pub quantity_released: i32,
    pub notes: Option<String>,
    /// Defaults to the insert time when absent.
    pub release_date: Option<Timestamp>,
}
