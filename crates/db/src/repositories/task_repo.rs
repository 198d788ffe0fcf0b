//! Repositories for the `bed_tasks` catalogue and `daily_task_completions`.
//!
//! Completion rows are keyed by (bed, task, calendar day). "Today" is the
//! database's `CURRENT_DATE`.

use smartseed_core::types::DbId;
use sqlx::PgPool;

use crate::models::task::{BedTask, CompleteTask, TaskCompletion};

const TASK_COLUMNS: &str = "id, task_name, task_description, is_default, sort_order";

const COMPLETION_COLUMNS: &str = "id, bed_id, task_id, completed_by, completion_date, \
    completion_time, photo_url, notes, gps_latitude, gps_longitude";

/// Read access to the task catalogue.
pub struct BedTaskRepo;

impl BedTaskRepo {
    /// List the default tasks in checklist order.
    pub async fn list_defaults(pool: &PgPool) -> Result<Vec<BedTask>, sqlx::Error> {
        let query = format!(
            "SELECT {TASK_COLUMNS} FROM bed_tasks
             WHERE is_default = TRUE
             ORDER BY sort_order ASC, id ASC"
        );
        sqlx::query_as::<_, BedTask>(&query).fetch_all(pool).await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<BedTask>, sqlx::Error> {
        let query = format!("SELECT {TASK_COLUMNS} FROM bed_tasks WHERE id = $1");
        sqlx::query_as::<_, BedTask>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}

/// Daily completion tracking.
pub struct TaskCompletionRepo;

impl TaskCompletionRepo {
    /// Mark a task complete for today.
    ///
    /// Upserts on (bed_id, task_id, completion_date): a second call on the
    /// same day overwrites the completer, time, photo, notes and GPS of the
    /// existing row instead of inserting another.
    pub async fn upsert_today(
        pool: &PgPool,
        input: &CompleteTask,
    ) -> Result<TaskCompletion, sqlx::Error> {
        let query = format!(
            "INSERT INTO daily_task_completions
                (bed_id, task_id, completed_by, completion_date, photo_url, notes,
                 gps_latitude, gps_longitude)
             VALUES ($1, $2, $3, CURRENT_DATE, $4, $5, $6, $7)
             ON CONFLICT (bed_id, task_id, completion_date) DO UPDATE SET
                 completed_by    = EXCLUDED.completed_by,
                 completion_time = NOW(),
                 photo_url       = EXCLUDED.photo_url,
                 notes           = EXCLUDED.notes,
                 gps_latitude    = EXCLUDED.gps_latitude,
                 gps_longitude   = EXCLUDED.gps_longitude
             RETURNING {COMPLETION_COLUMNS}"
        );
        sqlx::query_as::<_, TaskCompletion>(&query)
            .bind(input.bed_id)
            .bind(input.task_id)
            .bind(input.completed_by)
            .bind(&input.photo_url)
            .bind(&input.notes)
            .bind(input.gps_latitude)
            .bind(input.gps_longitude)
            .fetch_one(pool)
            .await
    }

    /// Remove today's completion for a bed/task. Earlier days are untouched.
    ///
    /// Returns `true` if a row was deleted.
    pub async fn delete_today(
        pool: &PgPool,
        bed_id: DbId,
        task_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "DELETE FROM daily_task_completions
             WHERE bed_id = $1 AND task_id = $2 AND completion_date = CURRENT_DATE",
        )
        .bind(bed_id)
        .bind(task_id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Today's completions for one bed.
    pub async fn list_today_for_bed(
        pool: &PgPool,
        bed_id: DbId,
    ) -> Result<Vec<TaskCompletion>, sqlx::Error> {
        let query = format!(
            "SELECT {COMPLETION_COLUMNS} FROM daily_task_completions
             WHERE bed_id = $1 AND completion_date = CURRENT_DATE
             ORDER BY task_id ASC"
        );
        sqlx::query_as::<_, TaskCompletion>(&query)
            .bind(bed_id)
            .fetch_all(pool)
            .await
    }

    /// Count all completion rows for a bed/task across every day.
    pub async fn count_for_bed_task(
        pool: &PgPool,
        bed_id: DbId,
        task_id: DbId,
    ) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM daily_task_completions WHERE bed_id = $1 AND task_id = $2",
        )
        .bind(bed_id)
        .bind(task_id)
        .fetch_one(pool)
        .await
    }
}
