//! Query parameter types shared by listing handlers.

use serde::Deserialize;
use smartseed_core::types::DbId;

/// `GET /users?role=`
#[derive(Debug, Deserialize)]
pub struct RoleFilterParams {
    pub role: Option<String>,
}

/// `GET /beds?assigned_to=&qr_code=`
#[derive(Debug, Deserialize)]
pub struct BedListParams {
    pub assigned_to: Option<DbId>,
    pub qr_code: Option<String>,
}
