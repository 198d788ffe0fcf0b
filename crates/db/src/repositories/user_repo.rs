//! Repository for the `users` table.

use smartseed_core::types::DbId;
use sqlx::PgPool;

use crate::models::user::{CreateUser, User, UserResponse};

/// Column list for full `users` rows.
const COLUMNS: &str = "id, name, email, password_hash, role, phone, is_active, created_at, updated_at";

/// Column list for hash-free user output.
const PUBLIC_COLUMNS: &str = "id, name, email, role, phone, is_active, created_at";

/// Provides read and create operations for users.
pub struct UserRepo;

impl UserRepo {
    /// Insert a new user, returning the full row.
    pub async fn create(pool: &PgPool, input: &CreateUser) -> Result<User, sqlx::Error> {
        let query = format!(
            "INSERT INTO users (name, email, password_hash, role, phone)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(&input.name)
            .bind(&input.email)
            .bind(&input.password_hash)
            .bind(&input.role)
            .bind(&input.phone)
            .fetch_one(pool)
            .await
    }

    /// Find a user by email (login lookup).
    pub async fn find_by_email(pool: &PgPool, email: &str) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE LOWER(email) = LOWER($1)");
        sqlx::query_as::<_, User>(&query)
            .bind(email)
            .fetch_optional(pool)
            .await
    }

    /// Find a user by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE id = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List users ordered by name, optionally restricted to one role.
    pub async fn list(pool: &PgPool, role: Option<&str>) -> Result<Vec<UserResponse>, sqlx::Error> {
        let query = format!(
            "SELECT {PUBLIC_COLUMNS} FROM users
             WHERE ($1::TEXT IS NULL OR role = $1)
             ORDER BY name ASC"
        );
        sqlx::query_as::<_, UserResponse>(&query)
            .bind(role)
            .fetch_all(pool)
            .await
    }
}
