//! Handlers for `/batches`: wildling batches received at the nursery.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;

use smartseed_core::batches::{validate_wildlings_count, STATUS_RECEIVED};
use smartseed_core::validation::{optional_text, require, require_text};
use smartseed_db::models::batch::CreateBatch;
use smartseed_db::repositories::BatchRepo;

use crate::error::AppResult;
use crate::extract::AppJson;
use crate::response::DataResponse;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateBatchBody {
    pub source_location: Option<String>,
    pub wildlings_count: Option<i32>,
    pub notes: Option<String>,
    pub person_in_charge: Option<String>,
    pub photo_url: Option<String>,
}

/// GET /api/v1/batches
pub async fn list_batches(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let batches = BatchRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: batches }))
}

/// POST /api/v1/batches
///
/// The batch code is assigned by the database.
pub async fn create_batch(
    State(state): State<AppState>,
    AppJson(body): AppJson<CreateBatchBody>,
) -> AppResult<impl IntoResponse> {
    let source_location = require_text(body.source_location, "source_location")?;
    let wildlings_count = require(body.wildlings_count, "wildlings_count")?;
    validate_wildlings_count(wildlings_count)?;

    let input = CreateBatch {
        source_location,
        wildlings_count,
        notes: optional_text(body.notes),
        person_in_charge: optional_text(body.person_in_charge),
        photo_url: optional_text(body.photo_url),
    };
    let batch = BatchRepo::create(&state.pool, &input, STATUS_RECEIVED).await?;

    tracing::info!(
        batch_id = batch.id,
        batch_code = %batch.batch_code,
        wildlings_count,
        "Batch received"
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: batch })))
}
