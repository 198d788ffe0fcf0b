//! Simulated SMS log. Nothing leaves the server; every message is stored
//! with status `sent`.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;
use validator::Validate;

use smartseed_core::validation::{require_text, validate_dto};
use smartseed_db::models::sms::CreateSms;
use smartseed_db::repositories::SmsRepo;

use crate::error::AppResult;
use crate::extract::AppJson;
use crate::response::DataResponse;
use crate::state::AppState;

#[derive(Debug, Deserialize, Validate)]
pub struct SendSmsBody {
    pub to_number: Option<String>,
    pub message_text: Option<String>,
    #[validate(range(min = 1))]
    pub attempt: Option<i32>,
}

/// GET /api/v1/sms
pub async fn list_sms(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let messages = SmsRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: messages }))
}

/// POST /api/v1/sms
pub async fn send_sms(
    State(state): State<AppState>,
    AppJson(body): AppJson<SendSmsBody>,
) -> AppResult<impl IntoResponse> {
    validate_dto(&body)?;
    let input = CreateSms {
        to_number: require_text(body.to_number, "to_number")?,
        message_text: require_text(body.message_text, "message_text")?,
        attempt: body.attempt.unwrap_or(1),
    };

    let sms = SmsRepo::log_sent(&state.pool, &input).await?;

    tracing::info!(sms_id = sms.id, attempt = sms.attempt, "SMS logged as sent");

    Ok(Json(DataResponse { data: sms }))
}
