//! Nursery location model.

use serde::Serialize;
use smartseed_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A row from the `locations` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Location {
    pub id: DbId,
    pub location_name: String,
    pub description: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone)]
pub struct CreateLocation {
    pub location_name: String,
    pub description: Option<String>,
}
