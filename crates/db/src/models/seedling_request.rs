//! Seedling request models.

use serde::Serialize;
use smartseed_core::types::{Date, DbId, Timestamp};
use sqlx::FromRow;

use crate::models::beneficiary::CreateBeneficiary;

/// A row from the `seedling_requests` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct SeedlingRequest {
    pub id: DbId,
    pub request_code: Option<String>,
    pub beneficiary_id: DbId,
    pub planting_site_address: String,
    pub hectarage: f64,
    pub total_quantity: i32,
    pub status: String,
    pub review_notes: Option<String>,
    pub scheduled_release_date: Option<Date>,
    pub submitted_by: Option<DbId>,
    pub date_submitted: Timestamp,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A requested species line (`request_species`).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct RequestSpecies {
    pub request_id: DbId,
    pub species_name: String,
    pub quantity: i32,
}

/// A request joined with its beneficiary's contact details and species list.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct SeedlingRequestDetail {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub request: SeedlingRequest,
    pub beneficiary_name: Option<String>,
    pub contact_number: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    #[sqlx(skip)]
    pub species: Vec<RequestSpecies>,
}

/// One species line of a new request.
#[derive(Debug, Clone)]
pub struct NewSpecies {
    pub species_name: String,
    pub quantity: i32,
}

/// DTO for submitting a request together with a new beneficiary.
///
/// `total_quantity` has already been summed from `species`.
#[derive(Debug, Clone)]
pub struct CreateSeedlingRequest {
    pub beneficiary: CreateBeneficiary,
    pub planting_site_address: String,
    pub hectarage: f64,
    pub total_quantity: i32,
    pub submitted_by: Option<DbId>,
    pub species: Vec<NewSpecies>,
}

/// DTO for applying a review decision.
#[derive(Debug, Clone)]
pub struct ReviewSeedlingRequest {
    pub status: &'static str,
    pub review_notes: Option<String>,
    pub scheduled_release_date: Option<Date>,
    /// When false the stored date is left alone; when true it is
    /// overwritten, with `None` clearing it.
    pub apply_release_date: bool,
}
