//! Repository for `seedling_requests` and their `request_species` lines.

use std::collections::HashMap;

use chrono::Datelike;
use smartseed_core::seedling_request::{format_request_code, STATUS_PENDING};
use smartseed_core::types::DbId;
use sqlx::PgPool;

use crate::models::seedling_request::{
    CreateSeedlingRequest, RequestSpecies, ReviewSeedlingRequest, SeedlingRequest,
    SeedlingRequestDetail,
};
use crate::repositories::BeneficiaryRepo;

/// Column list for `seedling_requests` queries.
const COLUMNS: &str = "id, request_code, beneficiary_id, planting_site_address, hectarage, \
    total_quantity, status, review_notes, scheduled_release_date, submitted_by, \
    date_submitted, created_at, updated_at";

/// Joined projection with the beneficiary's contact details.
const DETAIL_SELECT: &str = "
    SELECT
        sr.id, sr.request_code, sr.beneficiary_id, sr.planting_site_address, sr.hectarage,
        sr.total_quantity, sr.status, sr.review_notes, sr.scheduled_release_date,
        sr.submitted_by, sr.date_submitted, sr.created_at, sr.updated_at,
        b.full_name AS beneficiary_name, b.contact_number, b.email, b.address
    FROM seedling_requests sr
    LEFT JOIN beneficiaries b ON b.id = sr.beneficiary_id";

pub struct SeedlingRequestRepo;

impl SeedlingRequestRepo {
    /// Submit a request: beneficiary, request row and species lines.
    ///
    /// All inserts share one transaction; any failure rolls back the
    /// beneficiary as well.
    pub async fn create_with_species(
        pool: &PgPool,
        input: &CreateSeedlingRequest,
    ) -> Result<SeedlingRequest, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let beneficiary = BeneficiaryRepo::create_in_tx(&mut tx, &input.beneficiary).await?;

        let insert = format!(
            "INSERT INTO seedling_requests
                (beneficiary_id, planting_site_address, hectarage, total_quantity, status,
                 submitted_by)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        let created = sqlx::query_as::<_, SeedlingRequest>(&insert)
            .bind(beneficiary.id)
            .bind(&input.planting_site_address)
            .bind(input.hectarage)
            .bind(input.total_quantity)
            .bind(STATUS_PENDING)
            .bind(input.submitted_by)
            .fetch_one(&mut *tx)
            .await?;

        let code = format_request_code(created.date_submitted.year(), created.id);
        let update = format!(
            "UPDATE seedling_requests SET request_code = $2 WHERE id = $1 RETURNING {COLUMNS}"
        );
        let request = sqlx::query_as::<_, SeedlingRequest>(&update)
            .bind(created.id)
            .bind(&code)
            .fetch_one(&mut *tx)
            .await?;

        for line in &input.species {
            sqlx::query(
                "INSERT INTO request_species (request_id, species_name, quantity)
                 VALUES ($1, $2, $3)",
            )
            .bind(request.id)
            .bind(&line.species_name)
            .bind(line.quantity)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        Ok(request)
    }

    /// Find a request row by ID.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<SeedlingRequest>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM seedling_requests WHERE id = $1");
        sqlx::query_as::<_, SeedlingRequest>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a request with beneficiary details and species lines.
    pub async fn find_detail(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<SeedlingRequestDetail>, sqlx::Error> {
        let query = format!("{DETAIL_SELECT} WHERE sr.id = $1");
        let Some(mut detail) = sqlx::query_as::<_, SeedlingRequestDetail>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?
        else {
            return Ok(None);
        };
        detail.species = Self::species_for(pool, &[id])
            .await?
            .remove(&id)
            .unwrap_or_default();
        Ok(Some(detail))
    }

    /// List every request, newest submission first, with species lines.
    pub async fn list_details(pool: &PgPool) -> Result<Vec<SeedlingRequestDetail>, sqlx::Error> {
        let query = format!("{DETAIL_SELECT} ORDER BY sr.date_submitted DESC, sr.id DESC");
        let mut rows = sqlx::query_as::<_, SeedlingRequestDetail>(&query)
            .fetch_all(pool)
            .await?;

        let ids: Vec<DbId> = rows.iter().map(|r| r.request.id).collect();
        if ids.is_empty() {
            return Ok(rows);
        }
        let mut species = Self::species_for(pool, &ids).await?;
        for row in &mut rows {
            row.species = species.remove(&row.request.id).unwrap_or_default();
        }
        Ok(rows)
    }

    /// Apply a review decision. Returns `None` if the request does not exist.
    ///
    /// The current status is not checked: reviewing an already reviewed
    /// request overwrites the earlier decision.
    pub async fn review(
        pool: &PgPool,
        id: DbId,
        input: &ReviewSeedlingRequest,
    ) -> Result<Option<SeedlingRequest>, sqlx::Error> {
        let query = format!(
            "UPDATE seedling_requests SET
                status = $2,
                review_notes = $3,
                scheduled_release_date = CASE WHEN $4 THEN $5 ELSE scheduled_release_date END
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, SeedlingRequest>(&query)
            .bind(id)
            .bind(input.status)
            .bind(&input.review_notes)
            .bind(input.apply_release_date)
            .bind(input.scheduled_release_date)
            .fetch_optional(pool)
            .await
    }

    /// Species lines for a set of requests, grouped by request id.
    async fn species_for(
        pool: &PgPool,
        request_ids: &[DbId],
    ) -> Result<HashMap<DbId, Vec<RequestSpecies>>, sqlx::Error> {
        let rows = sqlx::query_as::<_, RequestSpecies>(
            "SELECT request_id, species_name, quantity FROM request_species
             WHERE request_id = ANY($1)
             ORDER BY id ASC",
        )
        .bind(request_ids)
        .fetch_all(pool)
        .await?;

        let mut grouped: HashMap<DbId, Vec<RequestSpecies>> = HashMap::new();
        for row in rows {
            grouped.entry(row.request_id).or_default().push(row);
        }
        Ok(grouped)
    }
}
