//! Bed task catalogue and daily completion models.

use serde::Serialize;
use smartseed_core::types::{Date, DbId, Timestamp};
use sqlx::FromRow;

/// A row from the `bed_tasks` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct BedTask {
    pub id: DbId,
    pub task_name: String,
    pub task_description: Option<String>,
    pub is_default: bool,
    pub sort_order: i32,
}

/// A row from the `daily_task_completions` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct TaskCompletion {
    pub id: DbId,
    pub bed_id: DbId,
    pub task_id: DbId,
    pub completed_by: Option<DbId>,
    pub completion_date: Date,
    pub completion_time: Timestamp,
    pub photo_url: Option<String>,
    pub notes: Option<String>,
    pub gps_latitude: Option<f64>,
    pub gps_longitude: Option<f64>,
}

/// DTO for marking a task complete for today.
#[derive(Debug, Clone)]
pub struct CompleteTask {
    pub bed_id: DbId,
    pub task_id: DbId,
    pub completed_by: DbId,
    pub photo_url: Option<String>,
    pub notes: Option<String>,
    pub gps_latitude: Option<f64>,
    pub gps_longitude: Option<f64>,
}
