use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;

use smartseed_core::validation::{optional_text, require_text};
use smartseed_db::models::location::CreateLocation;
use smartseed_db::repositories::LocationRepo;

use crate::error::AppResult;
use crate::extract::AppJson;
use crate::response::DataResponse;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateLocationBody {
    pub location_name: Option<String>,
    pub description: Option<String>,
}

/// GET /api/v1/locations
pub async fn list_locations(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let locations = LocationRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: locations }))
}

/// POST /api/v1/locations
///
/// Duplicate names are rejected with 409.
pub async fn create_location(
    State(state): State<AppState>,
    AppJson(body): AppJson<CreateLocationBody>,
) -> AppResult<impl IntoResponse> {
    let input = CreateLocation {
        location_name: require_text(body.location_name, "location_name")?,
        description: optional_text(body.description),
    };
    let location = LocationRepo::create(&state.pool, &input).await?;

    tracing::info!(location_id = location.id, name = %location.location_name, "Location created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: location })))
}
