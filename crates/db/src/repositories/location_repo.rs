//! Repository for the `locations` table.

use smartseed_core::types::DbId;
use sqlx::PgPool;

use crate::models::location::{CreateLocation, Location};

const COLUMNS: &str = "id, location_name, description, created_at, updated_at";

pub struct LocationRepo;

impl LocationRepo {
    /// Insert a location. A duplicate name violates `uq_locations_name`.
    pub async fn create(pool: &PgPool, input: &CreateLocation) -> Result<Location, sqlx::Error> {
        let query = format!(
            "INSERT INTO locations (location_name, description)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Location>(&query)
            .bind(&input.location_name)
            .bind(&input.description)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Location>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM locations WHERE id = $1");
        sqlx::query_as::<_, Location>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all locations ordered by name.
    pub async fn list(pool: &PgPool) -> Result<Vec<Location>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM locations ORDER BY location_name ASC");
        sqlx::query_as::<_, Location>(&query).fetch_all(pool).await
    }
}
