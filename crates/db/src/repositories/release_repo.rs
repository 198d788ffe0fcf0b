//! Repository for the append-only `releases` table.

use smartseed_core::types::DbId;
use sqlx::PgPool;

use crate::models::release::{CreateRelease, Release, ReleaseDetail};

const COLUMNS: &str =
    "id, request_id, released_by, quantity_released, release_date, notes, created_at";

pub struct ReleaseRepo;

impl ReleaseRepo {
    /// Append a release. The caller has already checked the request is
    /// approved; quantities are not capped against the requested total.
    pub async fn create(pool: &PgPool, input: &CreateRelease) -> Result<Release, sqlx::Error> {
        let query = format!(
            "INSERT INTO releases (request_id, released_by, quantity_released, notes, release_date)
             VALUES ($1, $2, $3, $4, COALESCE($5, NOW()))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Release>(&query)
            .bind(input.request_id)
            .bind(input.released_by)
            .bind(input.quantity_released)
            .bind(&input.notes)
            .bind(input.release_date)
            .fetch_one(pool)
            .await
    }

    /// List all releases, most recent first, with request and people names.
    pub async fn list_details(pool: &PgPool) -> Result<Vec<ReleaseDetail>, sqlx::Error> {
        sqlx::query_as::<_, ReleaseDetail>(
            "SELECT
                r.id, r.request_id, r.released_by, r.quantity_released, r.release_date,
                r.notes, r.created_at,
                sr.request_code, b.full_name AS beneficiary_name, u.name AS released_by_name
             FROM releases r
             LEFT JOIN seedling_requests sr ON sr.id = r.request_id
             LEFT JOIN beneficiaries b ON b.id = sr.beneficiary_id
             LEFT JOIN users u ON u.id = r.released_by
             ORDER BY r.release_date DESC, r.id DESC",
        )
        .fetch_all(pool)
        .await
    }

    /// All releases recorded against one request, oldest first.
    pub async fn list_for_request(
        pool: &PgPool,
        request_id: DbId,
    ) -> Result<Vec<Release>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM releases WHERE request_id = $1 ORDER BY id ASC"
        );
        sqlx::query_as::<_, Release>(&query)
            .bind(request_id)
            .fetch_all(pool)
            .await
    }
}
