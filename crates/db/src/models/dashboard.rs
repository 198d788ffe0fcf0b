//! Raw aggregate rows backing the dashboard charts.

use serde::Serialize;
use smartseed_core::types::Date;
use sqlx::FromRow;

/// A per-day value (cumulative plants, completed tasks).
#[derive(Debug, Clone, FromRow)]
pub struct DailyValue {
    pub day: Date,
    pub value: i64,
}

/// Summed assigned quantity for one bed species category.
#[derive(Debug, Clone, FromRow)]
pub struct CategoryTotal {
    pub name: String,
    pub value: i64,
}

/// Capacity figures for one bed, ordered by fill ratio.
#[derive(Debug, Clone, FromRow)]
pub struct BedCapacityRow {
    pub bed: String,
    pub current: i32,
    pub capacity: i32,
    pub ratio: f64,
}

/// Global counts shown above the charts.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct DashboardSummary {
    pub total_batches: i64,
    pub total_plants: i64,
    pub plants_in_beds: i64,
    pub active_workers: i64,
    pub pending_requests: i64,
    pub blacklisted_beneficiaries: i64,
}

/// Counts the task chart needs to compute the expected total.
#[derive(Debug, Clone, FromRow)]
pub struct TaskExpectation {
    pub bed_count: i64,
    pub default_task_count: i64,
}
