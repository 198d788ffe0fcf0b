//! Bed models: raw row, listing detail, and creation DTO.

use serde::Serialize;
use smartseed_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A row from the `beds` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Bed {
    pub id: DbId,
    pub location_id: DbId,
    pub bed_name: String,
    pub species_category: String,
    pub qr_code: String,
    pub in_charge: Option<DbId>,
    pub capacity: Option<i32>,
    pub current_occupancy: i32,
    pub notes: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A bed joined with its location and person in charge.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct BedDetail {
    pub id: DbId,
    pub location_id: DbId,
    pub location_name: Option<String>,
    pub bed_name: String,
    pub species_category: String,
    pub qr_code: String,
    pub in_charge: Option<DbId>,
    pub person_in_charge_name: Option<String>,
    pub capacity: Option<i32>,
    pub current_occupancy: i32,
    /// Filled in after the query from capacity and occupancy.
    #[sqlx(skip)]
    pub occupancy_percentage: Option<f64>,
    /// True when every default task has a completion dated today.
    pub tasks_completed_today: bool,
    pub notes: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a bed. `qr_code` has already been defaulted.
#[derive(Debug, Clone)]
pub struct CreateBed {
    pub location_id: DbId,
    pub bed_name: String,
    pub species_category: String,
    pub qr_code: String,
    pub in_charge: Option<DbId>,
    pub capacity: Option<i32>,
    pub notes: Option<String>,
}

/// Optional filters for bed listing.
#[derive(Debug, Clone, Default)]
pub struct BedFilter {
    pub assigned_to: Option<DbId>,
    pub qr_code: Option<String>,
}
