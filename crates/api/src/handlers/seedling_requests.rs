//! Handlers for `/seedling-requests`: submission and review.
//!
//! A submission creates the beneficiary, the pending request and its species
//! lines in one transaction. Review moves the request to approved or
//! rejected; reviewing again overwrites the earlier decision.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;
use validator::Validate;

use smartseed_core::dates::deserialize_optional_date;
use smartseed_core::error::CoreError;
use smartseed_core::seedling_request::{total_quantity, validate_hectarage, ReviewAction};
use smartseed_core::types::{Date, DbId};
use smartseed_core::validation::{optional_text, require, require_text, validate_dto};
use smartseed_db::models::beneficiary::CreateBeneficiary;
use smartseed_db::models::seedling_request::{
    CreateSeedlingRequest, NewSpecies, ReviewSeedlingRequest,
};
use smartseed_db::repositories::SeedlingRequestRepo;

use crate::error::AppResult;
use crate::extract::AppJson;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct BeneficiaryInput {
    pub full_name: Option<String>,
    pub address: Option<String>,
    pub contact_number: Option<String>,
    pub email: Option<String>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct SpeciesInput {
    pub species_name: Option<String>,
    #[validate(range(min = 0))]
    pub quantity: Option<i32>,
}

/// Request body for `POST /seedling-requests`.
#[derive(Debug, Deserialize, Validate)]
pub struct SubmitRequestBody {
    pub beneficiary: Option<BeneficiaryInput>,
    pub planting_site_address: Option<String>,
    pub hectarage: Option<f64>,
    #[serde(default)]
    #[validate(nested)]
    pub species: Vec<SpeciesInput>,
    pub submitted_by: Option<DbId>,
}

/// Request body for `PATCH /seedling-requests/{id}`.
#[derive(Debug, Deserialize)]
pub struct ReviewRequestBody {
    pub action: Option<String>,
    pub review_notes: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_date")]
    pub scheduled_release_date: Option<Date>,
}

impl SubmitRequestBody {
    fn into_create(self) -> Result<CreateSeedlingRequest, CoreError> {
        validate_dto(&self)?;

        let beneficiary = require(self.beneficiary, "beneficiary")?;
        let full_name = require_text(beneficiary.full_name, "beneficiary.full_name")?;
        let planting_site_address =
            require_text(self.planting_site_address, "planting_site_address")?;
        let hectarage = require(self.hectarage, "hectarage")?;
        validate_hectarage(hectarage)?;

        let species = self
            .species
            .into_iter()
            .map(|s| {
                Ok(NewSpecies {
                    species_name: require_text(s.species_name, "species_name")?,
                    quantity: s.quantity.unwrap_or(0),
                })
            })
            .collect::<Result<Vec<_>, CoreError>>()?;

        let quantities: Vec<i32> = species.iter().map(|s| s.quantity).collect();
        let total_quantity = total_quantity(&quantities)?;

        Ok(CreateSeedlingRequest {
            beneficiary: CreateBeneficiary {
                full_name,
                address: optional_text(beneficiary.address),
                contact_number: optional_text(beneficiary.contact_number),
                email: optional_text(beneficiary.email),
            },
            planting_site_address,
            hectarage,
            total_quantity,
            submitted_by: self.submitted_by,
            species,
        })
    }
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/seedling-requests
///
/// All requests, newest first, with beneficiary contact details and species.
pub async fn list_requests(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let requests = SeedlingRequestRepo::list_details(&state.pool).await?;
    Ok(Json(DataResponse { data: requests }))
}

/// GET /api/v1/seedling-requests/{id}
pub async fn get_request(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let request = SeedlingRequestRepo::find_detail(&state.pool, id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "SeedlingRequest",
            id,
        })?;
    Ok(Json(DataResponse { data: request }))
}

/// POST /api/v1/seedling-requests
///
/// Submit a new request. `total_quantity` is the sum of the species lines.
pub async fn submit_request(
    State(state): State<AppState>,
    AppJson(body): AppJson<SubmitRequestBody>,
) -> AppResult<impl IntoResponse> {
    let input = body.into_create()?;
    let request = SeedlingRequestRepo::create_with_species(&state.pool, &input).await?;

    tracing::info!(
        request_id = request.id,
        beneficiary_id = request.beneficiary_id,
        total_quantity = request.total_quantity,
        species_lines = input.species.len(),
        "Seedling request submitted"
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: request })))
}

/// PATCH /api/v1/seedling-requests/{id}
///
/// Approve or reject. The release date is only written on approval.
pub async fn review_request(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    AppJson(body): AppJson<ReviewRequestBody>,
) -> AppResult<impl IntoResponse> {
    let action = ReviewAction::parse(body.action.as_deref())?;
    let applies_date = action.applies_release_date();

    let review = ReviewSeedlingRequest {
        status: action.target_status(),
        review_notes: optional_text(body.review_notes),
        scheduled_release_date: if applies_date {
            body.scheduled_release_date
        } else {
            None
        },
        apply_release_date: applies_date,
    };

    let request = SeedlingRequestRepo::review(&state.pool, id, &review)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "SeedlingRequest",
            id,
        })?;

    tracing::info!(
        request_id = id,
        status = review.status,
        scheduled_release_date = ?request.scheduled_release_date,
        "Seedling request reviewed"
    );

    Ok(Json(DataResponse { data: request }))
}
