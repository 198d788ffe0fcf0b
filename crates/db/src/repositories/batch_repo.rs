//! Repository for the `batches` table.

use sqlx::PgPool;

use crate::models::batch::{Batch, CreateBatch};

const COLUMNS: &str = "id, batch_code, source_location, wildlings_count, date_received, \
    notes, person_in_charge, photo_url, status, created_at, updated_at";

pub struct BatchRepo;

impl BatchRepo {
    /// Insert a received batch. The batch code comes from
    /// `generate_batch_code()` in the column default.
    pub async fn create(
        pool: &PgPool,
        input: &CreateBatch,
        status: &str,
    ) -> Result<Batch, sqlx::Error> {
        let query = format!(
            "INSERT INTO batches
                (source_location, wildlings_count, notes, person_in_charge, photo_url, status)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Batch>(&query)
            .bind(&input.source_location)
            .bind(input.wildlings_count)
            .bind(&input.notes)
            .bind(&input.person_in_charge)
            .bind(&input.photo_url)
            .bind(status)
            .fetch_one(pool)
            .await
    }

    /// List all batches, most recently received first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Batch>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM batches ORDER BY date_received DESC, id DESC");
        sqlx::query_as::<_, Batch>(&query).fetch_all(pool).await
    }
}
