//! Handlers for `/monitoring`: visit scheduling, visit recording and the
//! geotagged site list.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;
use validator::Validate;

use smartseed_core::dates::deserialize_optional_date;
use smartseed_core::error::CoreError;
use smartseed_core::monitoring::{
    blacklist_reason, is_unpaired_blacklist, site_coordinates, validate_coordinates,
    validate_result,
};
use smartseed_core::types::{Date, DbId};
use smartseed_core::validation::{require, validate_dto};
use smartseed_db::models::monitoring::{UpdateVisit, VisitOutcome};
use smartseed_db::repositories::{MonitoringSiteRepo, MonitoringVisitRepo, SeedlingRequestRepo};

use crate::error::AppResult;
use crate::extract::AppJson;
use crate::response::DataResponse;
use crate::state::AppState;

/// Request body for `POST /monitoring/visits`.
#[derive(Debug, Deserialize)]
pub struct ScheduleVisitBody {
    pub request_id: Option<DbId>,
    #[serde(default, deserialize_with = "deserialize_optional_date")]
    pub scheduled_date: Option<Date>,
}

/// Request body for `PATCH /monitoring/visits/{id}`.
///
/// Every field is optional; only provided ones are written. GPS coordinates
/// are not visit columns and do not count as an update on their own.
#[derive(Debug, Deserialize, Validate)]
pub struct RecordVisitBody {
    #[validate(range(min = 0))]
    pub attempted_messages: Option<i32>,
    pub beneficiary_confirmed: Option<bool>,
    #[serde(default, deserialize_with = "deserialize_optional_date")]
    pub visit_date: Option<Date>,
    pub result: Option<String>,
    pub notes: Option<String>,
    pub blacklisted: Option<bool>,
    pub gps_latitude: Option<f64>,
    pub gps_longitude: Option<f64>,
}

impl RecordVisitBody {
    fn into_parts(self) -> Result<(UpdateVisit, VisitOutcome), CoreError> {
        validate_dto(&self)?;
        if let Some(result) = self.result.as_deref() {
            validate_result(result)?;
        }
        validate_coordinates(self.gps_latitude, self.gps_longitude)?;

        let outcome = VisitOutcome {
            site_coordinates: site_coordinates(
                self.result.as_deref(),
                self.gps_latitude,
                self.gps_longitude,
            ),
            blacklist_reason: (self.blacklisted == Some(true))
                .then(|| blacklist_reason(self.notes.as_deref())),
        };

        let update = UpdateVisit {
            attempted_messages: self.attempted_messages,
            beneficiary_confirmed: self.beneficiary_confirmed,
            visit_date: self.visit_date,
            result: self.result,
            notes: self.notes,
            blacklisted: self.blacklisted,
        };

        if update.is_empty() {
            return Err(CoreError::Validation("No updates provided".into()));
        }
        Ok((update, outcome))
    }
}

/// GET /api/v1/monitoring/visits
pub async fn list_visits(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let visits = MonitoringVisitRepo::list_details(&state.pool).await?;
    Ok(Json(DataResponse { data: visits }))
}

/// POST /api/v1/monitoring/visits
///
/// Schedule a visit; the request's monitoring site is created on first use.
pub async fn schedule_visit(
    State(state): State<AppState>,
    AppJson(body): AppJson<ScheduleVisitBody>,
) -> AppResult<impl IntoResponse> {
    let request_id = require(body.request_id, "request_id")?;
    let scheduled_date = require(body.scheduled_date, "scheduled_date")?;

    SeedlingRequestRepo::find_by_id(&state.pool, request_id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "SeedlingRequest",
            id: request_id,
        })?;

    let visit = MonitoringVisitRepo::schedule(&state.pool, request_id, scheduled_date).await?;

    tracing::info!(
        visit_id = visit.id,
        site_id = visit.site_id,
        request_id,
        %scheduled_date,
        "Monitoring visit scheduled"
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: visit })))
}

/// PATCH /api/v1/monitoring/visits/{id}
///
/// Record visit details. A `planted_successful` result with GPS moves the
/// coordinates onto the site; `blacklisted: true` blacklists the
/// beneficiary (a repeat is a no-op).
pub async fn record_visit(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    AppJson(body): AppJson<RecordVisitBody>,
) -> AppResult<impl IntoResponse> {
    let (update, outcome) = body.into_parts()?;

    let recorded = MonitoringVisitRepo::record(&state.pool, id, &update, &outcome)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "MonitoringVisit",
            id,
        })?;
    let visit = recorded.visit;

    tracing::info!(
        visit_id = id,
        site_id = visit.site_id,
        result = ?visit.result,
        site_geotagged = outcome.site_coordinates.is_some(),
        "Monitoring visit recorded"
    );

    if outcome.blacklist_reason.is_some() {
        if is_unpaired_blacklist(visit.result.as_deref()) {
            tracing::warn!(
                visit_id = id,
                result = ?visit.result,
                "Beneficiary blacklisted by a visit not marked not_planted"
            );
        }
        if let Some(beneficiary_id) = recorded.blacklisted_beneficiary {
            tracing::info!(visit_id = id, beneficiary_id, "Beneficiary blacklisted");
        }
    }

    Ok(Json(DataResponse { data: visit }))
}

/// GET /api/v1/monitoring/sites
///
/// Sites with both coordinates recorded.
pub async fn list_sites(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let sites = MonitoringSiteRepo::list_geotagged(&state.pool).await?;
    Ok(Json(DataResponse { data: sites }))
}
