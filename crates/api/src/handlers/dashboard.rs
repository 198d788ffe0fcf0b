//! Handler for `GET /dashboard/stats`.
//!
//! Runs the aggregate queries concurrently, then reshapes the sparse rows
//! into fixed-length series. Nothing is cached.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

use smartseed_core::dashboard::{
    category_color, forward_fill_growth, round_percentage, task_completion_series, window_start,
    GrowthPoint, TaskDay, CAPACITY_TOP_N, GROWTH_WINDOW_DAYS, TASK_WINDOW_DAYS,
};
use smartseed_db::models::dashboard::{DailyValue, DashboardSummary};
use smartseed_db::repositories::DashboardRepo;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct SpeciesSlice {
    pub name: String,
    pub value: i64,
    pub color: &'static str,
}

#[derive(Debug, Serialize)]
pub struct BedCapacity {
    pub bed: String,
    pub current: i32,
    pub capacity: i32,
    pub percentage: f64,
}

/// Response payload for `GET /dashboard/stats`.
#[derive(Debug, Serialize)]
pub struct DashboardStats {
    pub growth: Vec<GrowthPoint>,
    pub species: Vec<SpeciesSlice>,
    pub capacity: Vec<BedCapacity>,
    pub tasks: Vec<TaskDay>,
    pub summary: DashboardSummary,
}

fn as_pairs(rows: &[DailyValue]) -> Vec<(smartseed_core::types::Date, i64)> {
    rows.iter().map(|r| (r.day, r.value)).collect()
}

/// GET /api/v1/dashboard/stats
pub async fn get_stats(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let pool = &state.pool;
    let today = DashboardRepo::today(pool).await?;

    let (growth_rows, categories, capacity_rows, task_rows, expectation, summary) = tokio::try_join!(
        DashboardRepo::cumulative_plants_since(pool, window_start(today, GROWTH_WINDOW_DAYS)),
        DashboardRepo::quantity_by_category(pool),
        DashboardRepo::top_beds_by_occupancy(pool, CAPACITY_TOP_N),
        DashboardRepo::completions_per_day_since(pool, window_start(today, TASK_WINDOW_DAYS)),
        DashboardRepo::task_expectation(pool),
        DashboardRepo::summary(pool),
    )?;

    let stats = DashboardStats {
        growth: forward_fill_growth(&as_pairs(&growth_rows), today, GROWTH_WINDOW_DAYS),
        species: categories
            .into_iter()
            .map(|c| SpeciesSlice {
                color: category_color(&c.name),
                name: c.name,
                value: c.value,
            })
            .collect(),
        capacity: capacity_rows
            .into_iter()
            .map(|r| BedCapacity {
                bed: r.bed,
                current: r.current,
                capacity: r.capacity,
                percentage: round_percentage(r.ratio),
            })
            .collect(),
        tasks: task_completion_series(
            &as_pairs(&task_rows),
            today,
            TASK_WINDOW_DAYS,
            expectation.bed_count,
            expectation.default_task_count,
        ),
        summary,
    };

    tracing::debug!(%today, beds = expectation.bed_count, "Dashboard stats computed");

    Ok(Json(DataResponse { data: stats }))
}
