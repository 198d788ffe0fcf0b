//! Handlers for `/beds`.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use chrono::{Datelike, Utc};
use serde::Deserialize;

use smartseed_core::beds::{default_qr_code, validate_capacity, validate_category};
use smartseed_core::error::CoreError;
use smartseed_core::types::DbId;
use smartseed_core::validation::{optional_text, require, require_text};
use smartseed_db::models::bed::{BedFilter, CreateBed};
use smartseed_db::repositories::{BedRepo, LocationRepo};

use crate::error::AppResult;
use crate::extract::AppJson;
use crate::query::BedListParams;
use crate::response::DataResponse;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateBedBody {
    pub bed_name: Option<String>,
    pub location_id: Option<DbId>,
    pub species_category: Option<String>,
    pub qr_code: Option<String>,
    pub in_charge: Option<DbId>,
    pub capacity: Option<i32>,
    pub notes: Option<String>,
}

/// GET /api/v1/beds?assigned_to=&qr_code=
pub async fn list_beds(
    State(state): State<AppState>,
    Query(params): Query<BedListParams>,
) -> AppResult<impl IntoResponse> {
    let filter = BedFilter {
        assigned_to: params.assigned_to,
        qr_code: optional_text(params.qr_code),
    };
    let beds = BedRepo::list(&state.pool, &filter).await?;
    Ok(Json(DataResponse { data: beds }))
}

/// POST /api/v1/beds
///
/// A bed without a QR code gets `BED-<NAME>-QR<year>`.
pub async fn create_bed(
    State(state): State<AppState>,
    AppJson(body): AppJson<CreateBedBody>,
) -> AppResult<impl IntoResponse> {
    let bed_name = require_text(body.bed_name, "bed_name")?;
    let location_id = require(body.location_id, "location_id")?;
    let species_category = require_text(body.species_category, "species_category")?;
    validate_category(&species_category)?;
    validate_capacity(body.capacity)?;

    LocationRepo::find_by_id(&state.pool, location_id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Location",
            id: location_id,
        })?;

    let qr_code = optional_text(body.qr_code)
        .unwrap_or_else(|| default_qr_code(&bed_name, Utc::now().year()));

    let input = CreateBed {
        location_id,
        bed_name,
        species_category,
        qr_code,
        in_charge: body.in_charge,
        capacity: body.capacity,
        notes: optional_text(body.notes),
    };
    let bed = BedRepo::create(&state.pool, &input).await?;

    tracing::info!(bed_id = bed.id, location_id, qr_code = %bed.qr_code, "Bed created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: bed })))
}
