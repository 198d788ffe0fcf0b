//! Handler for `POST /auth/login`.
//!
//! Verifies credentials and returns the user without the password hash. No
//! session or token is issued.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;

use smartseed_core::error::CoreError;
use smartseed_db::models::user::UserResponse;
use smartseed_db::repositories::UserRepo;

use crate::auth::password::verify_password;
use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::response::DataResponse;
use crate::state::AppState;

const INVALID_CREDENTIALS: &str = "Invalid email or password";

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// POST /api/v1/auth/login
pub async fn login(
    State(state): State<AppState>,
    AppJson(input): AppJson<LoginRequest>,
) -> AppResult<impl IntoResponse> {
    let (email, password) = match (input.email, input.password) {
        (Some(e), Some(p)) if !e.trim().is_empty() && !p.is_empty() => (e, p),
        _ => {
            return Err(
                CoreError::Validation("Email and password are required".into()).into(),
            )
        }
    };
    let email = email.trim().to_lowercase();

    let user = UserRepo::find_by_email(&state.pool, &email)
        .await?
        .ok_or_else(|| CoreError::Unauthorized(INVALID_CREDENTIALS.into()))?;

    if !user.is_active {
        tracing::warn!(user_id = user.id, "Login attempt on disabled account");
        return Err(CoreError::Forbidden("Account is disabled".into()).into());
    }

    let matches = verify_password(&password, &user.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;
    if !matches {
        tracing::info!(user_id = user.id, "Login failed: wrong password");
        return Err(CoreError::Unauthorized(INVALID_CREDENTIALS.into()).into());
    }

    tracing::info!(user_id = user.id, role = %user.role, "User logged in");

    Ok(Json(DataResponse {
        data: UserResponse::from(user),
    }))
}
