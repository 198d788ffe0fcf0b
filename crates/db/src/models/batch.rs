//! Wildling batch model.

use serde::Serialize;
use smartseed_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A row from the `batches` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Batch {
    pub id: DbId,
    pub batch_code: String,
    pub source_location: String,
    pub wildlings_count: i32,
    pub date_received: Timestamp,
    pub notes: Option<String>,
    pub person_in_charge: Option<String>,
    pub photo_url: Option<String>,
    pub status: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone)]
pub struct CreateBatch {
    pub source_location: String,
    pub wildlings_count: i32,
    pub notes: Option<String>,
    pub person_in_charge: Option<String>,
    pub photo_url: Option<String>,
}
