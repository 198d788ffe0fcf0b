//! Repository for the `beds` table.

use smartseed_core::beds::occupancy_percentage;
use sqlx::PgPool;

use crate::models::bed::{Bed, BedDetail, BedFilter, CreateBed};

/// Column list for raw `beds` rows.
const COLUMNS: &str = "id, location_id, bed_name, species_category, qr_code, in_charge, \
    capacity, current_occupancy, notes, created_at, updated_at";

/// Joined projection shared by the listing and identifier lookups.
const DETAIL_SELECT: &str = "
    SELECT
        b.id, b.location_id, l.location_name, b.bed_name, b.species_category, b.qr_code,
        b.in_charge, u.name AS person_in_charge_name, b.capacity, b.current_occupancy,
        (
            SELECT COUNT(*) FROM daily_task_completions dtc
            JOIN bed_tasks bt ON bt.id = dtc.task_id AND bt.is_default
            WHERE dtc.bed_id = b.id AND dtc.completion_date = CURRENT_DATE
        ) = (SELECT COUNT(*) FROM bed_tasks WHERE is_default) AS tasks_completed_today,
        b.notes, b.created_at, b.updated_at
    FROM beds b
    LEFT JOIN locations l ON l.id = b.location_id
    LEFT JOIN users u ON u.id = b.in_charge";

pub struct BedRepo;

impl BedRepo {
    /// Insert a bed. Duplicates violate `uq_beds_location_name` or
    /// `uq_beds_qr_code`.
    pub async fn create(pool: &PgPool, input: &CreateBed) -> Result<Bed, sqlx::Error> {
        let query = format!(
            "INSERT INTO beds
                (location_id, bed_name, species_category, qr_code, in_charge, capacity, notes)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Bed>(&query)
            .bind(input.location_id)
            .bind(&input.bed_name)
            .bind(&input.species_category)
            .bind(&input.qr_code)
            .bind(input.in_charge)
            .bind(input.capacity)
            .bind(&input.notes)
            .fetch_one(pool)
            .await
    }

    /// List beds with location, person in charge and today's task status.
    pub async fn list(pool: &PgPool, filter: &BedFilter) -> Result<Vec<BedDetail>, sqlx::Error> {
        let query = format!(
            "{DETAIL_SELECT}
             WHERE ($1::BIGINT IS NULL OR b.in_charge = $1)
               AND ($2::TEXT IS NULL OR b.qr_code = $2)
             ORDER BY b.id ASC"
        );
        let rows = sqlx::query_as::<_, BedDetail>(&query)
            .bind(filter.assigned_to)
            .bind(&filter.qr_code)
            .fetch_all(pool)
            .await?;
        Ok(rows.into_iter().map(with_occupancy).collect())
    }

    /// Find a bed by primary key or QR code in a single query.
    ///
    /// When a numeric identifier matches one bed's id and another bed's QR
    /// code, the id match wins.
    pub async fn find_by_identifier(
        pool: &PgPool,
        id: Option<i64>,
        qr_code: &str,
    ) -> Result<Option<BedDetail>, sqlx::Error> {
        let query = format!(
            "{DETAIL_SELECT}
             WHERE b.id = $1 OR b.qr_code = $2
             ORDER BY (b.id = $1) DESC NULLS LAST
             LIMIT 1"
        );
        let row = sqlx::query_as::<_, BedDetail>(&query)
            .bind(id)
            .bind(qr_code)
            .fetch_optional(pool)
            .await?;
        Ok(row.map(with_occupancy))
    }

    /// Whether a bed with the given id exists.
    pub async fn exists(pool: &PgPool, id: i64) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM beds WHERE id = $1)")
            .bind(id)
            .fetch_one(pool)
            .await
    }
}

fn with_occupancy(mut bed: BedDetail) -> BedDetail {
    bed.occupancy_percentage = occupancy_percentage(bed.current_occupancy, bed.capacity);
    bed
}
