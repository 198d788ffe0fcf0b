//! Handlers for `/releases`.
//!
//! A release is only accepted for an approved request. Releases are
//! append-only and are not capped by the requested quantity.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;

use smartseed_core::dates::deserialize_optional_timestamp;
use smartseed_core::error::CoreError;
use smartseed_core::seedling_request::{ensure_releasable, validate_release_quantity};
use smartseed_core::types::{DbId, Timestamp};
use smartseed_core::validation::{optional_text, require};
use smartseed_db::models::release::CreateRelease;
use smartseed_db::repositories::{ReleaseRepo, SeedlingRequestRepo};

use crate::error::AppResult;
use crate::extract::AppJson;
use crate::response::DataResponse;
use crate::state::AppState;

/// Request body for `POST /releases`.
#[derive(Debug, Deserialize)]
pub struct CreateReleaseBody {
    pub request_id: Option<DbId>,
    pub quantity_released: Option<i32>,
    pub released_by: Option<DbId>,
    pub notes: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_timestamp")]
    pub release_date: Option<Timestamp>,
}

/// GET /api/v1/releases
pub async fn list_releases(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let releases = ReleaseRepo::list_details(&state.pool).await?;
    Ok(Json(DataResponse { data: releases }))
}

/// POST /api/v1/releases
pub async fn create_release(
    State(state): State<AppState>,
    AppJson(body): AppJson<CreateReleaseBody>,
) -> AppResult<impl IntoResponse> {
    let request_id = require(body.request_id, "request_id")?;
    let quantity_released = require(body.quantity_released, "quantity_released")?;
    validate_release_quantity(quantity_released)?;

    let request = SeedlingRequestRepo::find_by_id(&state.pool, request_id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "SeedlingRequest",
            id: request_id,
        })?;
    ensure_releasable(&request.status)?;

    let input = CreateRelease {
        request_id,
        released_by: body.released_by,
        quantity_released,
        notes: optional_text(body.notes),
        release_date: body.release_date,
    };
    let release = ReleaseRepo::create(&state.pool, &input).await?;

    tracing::info!(
        release_id = release.id,
        request_id,
        quantity_released,
        requested_total = request.total_quantity,
        "Seedlings released"
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: release })))
}
