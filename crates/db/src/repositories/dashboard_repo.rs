//! Read-only aggregate queries behind the dashboard.
//!
//! Each method is one independent query returning sparse rows; gap filling,
//! labels and rounding are applied by the caller.

use smartseed_core::seedling_request::STATUS_PENDING;
use smartseed_core::types::Date;
use smartseed_core::users::ROLE_FIELD_WORKER;
use sqlx::PgPool;

use crate::models::dashboard::{
    BedCapacityRow, CategoryTotal, DailyValue, DashboardSummary, TaskExpectation,
};

pub struct DashboardRepo;

impl DashboardRepo {
    /// The database's current date, so series line up with `CURRENT_DATE`
    /// used by the task tables.
    pub async fn today(pool: &PgPool) -> Result<Date, sqlx::Error> {
        sqlx::query_scalar::<_, Date>("SELECT CURRENT_DATE")
            .fetch_one(pool)
            .await
    }

    /// Running total of wildlings received per day since `since`.
    ///
    /// Only days with at least one batch appear.
    pub async fn cumulative_plants_since(
        pool: &PgPool,
        since: Date,
    ) -> Result<Vec<DailyValue>, sqlx::Error> {
        sqlx::query_as::<_, DailyValue>(
            "SELECT day, (SUM(total) OVER (ORDER BY day))::BIGINT AS value
             FROM (
                 SELECT DATE(date_received) AS day, SUM(wildlings_count)::BIGINT AS total
                 FROM batches
                 WHERE date_received >= $1::DATE
                 GROUP BY DATE(date_received)
             ) per_day
             ORDER BY day ASC",
        )
        .bind(since)
        .fetch_all(pool)
        .await
    }

    /// Assigned quantity summed per bed species category.
    pub async fn quantity_by_category(pool: &PgPool) -> Result<Vec<CategoryTotal>, sqlx::Error> {
        sqlx::query_as::<_, CategoryTotal>(
            "SELECT b.species_category AS name,
                    COALESCE(SUM(bba.quantity_assigned), 0)::BIGINT AS value
             FROM beds b
             LEFT JOIN batch_bed_assignments bba ON bba.bed_id = b.id
             GROUP BY b.species_category
             ORDER BY value DESC, name ASC",
        )
        .fetch_all(pool)
        .await
    }

    /// The `limit` fullest beds with a known, non-zero capacity.
    pub async fn top_beds_by_occupancy(
        pool: &PgPool,
        limit: i64,
    ) -> Result<Vec<BedCapacityRow>, sqlx::Error> {
        sqlx::query_as::<_, BedCapacityRow>(
            "SELECT bed_name AS bed, current_occupancy AS current, capacity,
                    current_occupancy::FLOAT8 / capacity::FLOAT8 * 100.0 AS ratio
             FROM beds
             WHERE capacity IS NOT NULL AND capacity > 0
             ORDER BY ratio DESC, id ASC
             LIMIT $1",
        )
        .bind(limit)
        .fetch_all(pool)
        .await
    }

    /// Completion rows per day since `since`.
    pub async fn completions_per_day_since(
        pool: &PgPool,
        since: Date,
    ) -> Result<Vec<DailyValue>, sqlx::Error> {
        sqlx::query_as::<_, DailyValue>(
            "SELECT completion_date AS day, COUNT(*) AS value
             FROM daily_task_completions
             WHERE completion_date >= $1
             GROUP BY completion_date
             ORDER BY completion_date ASC",
        )
        .bind(since)
        .fetch_all(pool)
        .await
    }

    /// Bed count and default task count; their product is the daily target.
    pub async fn task_expectation(pool: &PgPool) -> Result<TaskExpectation, sqlx::Error> {
        sqlx::query_as::<_, TaskExpectation>(
            "SELECT
                (SELECT COUNT(*) FROM beds) AS bed_count,
                (SELECT COUNT(*) FROM bed_tasks WHERE is_default) AS default_task_count",
        )
        .fetch_one(pool)
        .await
    }

    /// Global counts for the summary cards.
    pub async fn summary(pool: &PgPool) -> Result<DashboardSummary, sqlx::Error> {
        sqlx::query_as::<_, DashboardSummary>(
            "SELECT
                (SELECT COUNT(*) FROM batches) AS total_batches,
                (SELECT COALESCE(SUM(wildlings_count), 0)::BIGINT FROM batches) AS total_plants,
                (SELECT COALESCE(SUM(current_occupancy), 0)::BIGINT FROM beds) AS plants_in_beds,
                (SELECT COUNT(*) FROM users WHERE role = $1 AND is_active) AS active_workers,
                (SELECT COUNT(*) FROM seedling_requests WHERE status = $2) AS pending_requests,
                (SELECT COUNT(*) FROM blacklist WHERE active) AS blacklisted_beneficiaries",
        )
        .bind(ROLE_FIELD_WORKER)
        .bind(STATUS_PENDING)
        .fetch_one(pool)
        .await
    }
}
