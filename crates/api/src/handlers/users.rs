//! Handlers for `/users`.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;

use smartseed_core::error::CoreError;
use smartseed_core::users::{is_valid_role, VALID_ROLES};
use smartseed_core::validation::{optional_text, require_text};
use smartseed_db::models::user::{CreateUser, UserResponse};
use smartseed_db::repositories::UserRepo;

use crate::auth::password::{hash_password, validate_password_strength};
use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::query::RoleFilterParams;
use crate::response::DataResponse;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateUserBody {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub role: Option<String>,
    pub phone: Option<String>,
}

/// GET /api/v1/users?role=
///
/// Users ordered by name, optionally filtered by role. Never includes hashes.
pub async fn list_users(
    State(state): State<AppState>,
    Query(params): Query<RoleFilterParams>,
) -> AppResult<impl IntoResponse> {
    let role = optional_text(params.role);
    let users = UserRepo::list(&state.pool, role.as_deref()).await?;
    Ok(Json(DataResponse { data: users }))
}

/// POST /api/v1/users
///
/// Create a staff account. Duplicate emails are rejected with 409.
pub async fn create_user(
    State(state): State<AppState>,
    AppJson(body): AppJson<CreateUserBody>,
) -> AppResult<impl IntoResponse> {
    let name = require_text(body.name, "name")?;
    let email = require_text(body.email, "email")?.to_lowercase();
    let password = require_text(body.password, "password")?;
    let role = require_text(body.role, "role")?;

    if !is_valid_role(&role) {
        return Err(CoreError::Validation(format!(
            "Invalid role '{role}'. Must be one of: {}",
            VALID_ROLES.join(", ")
        ))
        .into());
    }
    validate_password_strength(&password).map_err(CoreError::Validation)?;

    let password_hash = hash_password(&password)
        .map_err(|e| AppError::InternalError(format!("Failed to hash password: {e}")))?;

    let input = CreateUser {
        name,
        email,
        password_hash,
        role,
        phone: optional_text(body.phone),
    };
    let user = UserRepo::create(&state.pool, &input).await?;

    tracing::info!(user_id = user.id, role = %user.role, "User created");

    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: UserResponse::from(user),
        }),
    ))
}
