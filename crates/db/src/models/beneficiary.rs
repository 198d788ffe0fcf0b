//! Beneficiary and blacklist models.

use serde::Serialize;
use smartseed_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A row from the `beneficiaries` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Beneficiary {
    pub id: DbId,
    pub full_name: String,
    pub address: Option<String>,
    pub contact_number: Option<String>,
    pub email: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Beneficiary details as submitted with a seedling request.
#[derive(Debug, Clone)]
pub struct CreateBeneficiary {
    pub full_name: String,
    pub address: Option<String>,
    pub contact_number: Option<String>,
    pub email: Option<String>,
}

/// A blacklist entry joined with the beneficiary's name.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct BlacklistEntry {
    pub id: DbId,
    pub beneficiary_id: DbId,
    pub beneficiary_name: Option<String>,
    pub reason: String,
    pub active: bool,
    pub created_at: Timestamp,
}
