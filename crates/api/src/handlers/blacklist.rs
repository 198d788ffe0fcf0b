use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use smartseed_db::repositories::BlacklistRepo;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/blacklist
pub async fn list_blacklist(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let entries = BlacklistRepo::list_active(&state.pool).await?;
    Ok(Json(DataResponse { data: entries }))
}
