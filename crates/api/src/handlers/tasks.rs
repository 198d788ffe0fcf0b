//! Handlers for `/tasks`: the per-bed daily checklist.
//!
//! Each (bed, task, day) is incomplete until a completion row exists for
//! that day. Completing again the same day overwrites the row; un-completing
//! only ever touches today's row.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};

use smartseed_core::error::CoreError;
use smartseed_core::monitoring::validate_coordinates;
use smartseed_core::tasks::{build_checklist, BedLookup};
use smartseed_core::types::DbId;
use smartseed_core::validation::{optional_text, require};
use smartseed_db::models::bed::BedDetail;
use smartseed_db::models::task::{BedTask, CompleteTask, TaskCompletion};
use smartseed_db::repositories::{BedRepo, BedTaskRepo, TaskCompletionRepo};

use crate::error::AppResult;
use crate::extract::AppJson;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /tasks/complete`.
#[derive(Debug, Deserialize)]
pub struct CompleteTaskBody {
    pub bed_id: Option<DbId>,
    pub task_id: Option<DbId>,
    pub completed_by: Option<DbId>,
    pub photo_url: Option<String>,
    pub notes: Option<String>,
    pub gps_latitude: Option<f64>,
    pub gps_longitude: Option<f64>,
}

/// Request body for `DELETE /tasks/complete`.
#[derive(Debug, Deserialize)]
pub struct UncompleteTaskBody {
    pub bed_id: Option<DbId>,
    pub task_id: Option<DbId>,
}

/// One default task with today's status for the bed.
#[derive(Debug, Serialize)]
pub struct TaskStatus {
    #[serde(flatten)]
    pub task: BedTask,
    pub is_completed: bool,
    pub completion_data: Option<TaskCompletion>,
}

/// Response for `GET /tasks/bed/{identifier}`.
#[derive(Debug, Serialize)]
pub struct BedChecklist {
    pub bed: BedDetail,
    pub tasks: Vec<TaskStatus>,
    pub all_completed: bool,
}

#[derive(Debug, Serialize)]
pub struct UncompleteResult {
    pub removed: bool,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/tasks/bed/{identifier}
///
/// `identifier` is the bed's id or its QR code.
pub async fn get_bed_tasks(
    State(state): State<AppState>,
    Path(identifier): Path<String>,
) -> AppResult<impl IntoResponse> {
    let lookup = BedLookup::parse(&identifier);
    let bed = BedRepo::find_by_identifier(&state.pool, lookup.id, &lookup.qr_code)
        .await?
        .ok_or_else(|| CoreError::NotFoundByKey {
            entity: "Bed",
            key: identifier.clone(),
        })?;

    let tasks = BedTaskRepo::list_defaults(&state.pool).await?;
    let completions = TaskCompletionRepo::list_today_for_bed(&state.pool, bed.id).await?;

    let (paired, all_completed) = build_checklist(tasks, completions, |t| t.id, |c| c.task_id);
    let tasks = paired
        .into_iter()
        .map(|(task, completion)| TaskStatus {
            task,
            is_completed: completion.is_some(),
            completion_data: completion,
        })
        .collect();

    Ok(Json(DataResponse {
        data: BedChecklist {
            bed,
            tasks,
            all_completed,
        },
    }))
}

/// GET /api/v1/tasks/defaults
pub async fn list_default_tasks(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let tasks = BedTaskRepo::list_defaults(&state.pool).await?;
    Ok(Json(DataResponse { data: tasks }))
}

/// POST /api/v1/tasks/complete
///
/// Mark a task complete for today (upsert).
pub async fn complete_task(
    State(state): State<AppState>,
    AppJson(body): AppJson<CompleteTaskBody>,
) -> AppResult<impl IntoResponse> {
    let bed_id = require(body.bed_id, "bed_id")?;
    let task_id = require(body.task_id, "task_id")?;
    let completed_by = require(body.completed_by, "completed_by")?;
    validate_coordinates(body.gps_latitude, body.gps_longitude)?;

    if !BedRepo::exists(&state.pool, bed_id).await? {
        return Err(CoreError::NotFound {
            entity: "Bed",
            id: bed_id,
        }
        .into());
    }
    BedTaskRepo::find_by_id(&state.pool, task_id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "BedTask",
            id: task_id,
        })?;

    let input = CompleteTask {
        bed_id,
        task_id,
        completed_by,
        photo_url: optional_text(body.photo_url),
        notes: optional_text(body.notes),
        gps_latitude: body.gps_latitude,
        gps_longitude: body.gps_longitude,
    };
    let completion = TaskCompletionRepo::upsert_today(&state.pool, &input).await?;

    tracing::info!(
        bed_id,
        task_id,
        completed_by,
        completion_id = completion.id,
        "Task marked complete"
    );

    Ok(Json(DataResponse { data: completion }))
}

/// DELETE /api/v1/tasks/complete
///
/// Remove today's completion. Succeeds even when there was none.
pub async fn uncomplete_task(
    State(state): State<AppState>,
    AppJson(body): AppJson<UncompleteTaskBody>,
) -> AppResult<impl IntoResponse> {
    let bed_id = require(body.bed_id, "bed_id")?;
    let task_id = require(body.task_id, "task_id")?;

    let removed = TaskCompletionRepo::delete_today(&state.pool, bed_id, task_id).await?;

    tracing::info!(bed_id, task_id, removed, "Task unmarked");

    Ok(Json(DataResponse {
        data: UncompleteResult { removed },
    }))
}
