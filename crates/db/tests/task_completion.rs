//! Daily task completion: one row per (bed, task, day), upsert and delete.

use sqlx::PgPool;

use smartseed_core::tasks::build_checklist;
use smartseed_db::models::bed::{BedFilter, CreateBed};
use smartseed_db::models::location::CreateLocation;
use smartseed_db::models::task::CompleteTask;
use smartseed_db::models::user::CreateUser;
use smartseed_db::repositories::{
    BedRepo, BedTaskRepo, LocationRepo, TaskCompletionRepo, UserRepo,
};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

struct Fixture {
    bed_id: i64,
    worker_a: i64,
    worker_b: i64,
}

async fn seed(pool: &PgPool) -> Fixture {
    let location = LocationRepo::create(
        pool,
        &CreateLocation {
            location_name: "Nursery A".to_string(),
            description: None,
        },
    )
    .await
    .unwrap();

    let mut workers = Vec::new();
    for (name, email) in [("Juan", "juan@example.com"), ("Ana", "ana@example.com")] {
        let user = UserRepo::create(
            pool,
            &CreateUser {
                name: name.to_string(),
                email: email.to_string(),
                password_hash: "unused".to_string(),
                role: "field_worker".to_string(),
                phone: None,
            },
        )
        .await
        .unwrap();
        workers.push(user.id);
    }

    let bed = BedRepo::create(
        pool,
        &CreateBed {
            location_id: location.id,
            bed_name: "A1".to_string(),
            species_category: "Forestry".to_string(),
            qr_code: "BED-A1-QR2024".to_string(),
            in_charge: Some(workers[0]),
            capacity: Some(200),
            notes: None,
        },
    )
    .await
    .unwrap();

    Fixture {
        bed_id: bed.id,
        worker_a: workers[0],
        worker_b: workers[1],
    }
}

fn completion(bed_id: i64, task_id: i64, by: i64, notes: &str) -> CompleteTask {
    CompleteTask {
        bed_id,
        task_id,
        completed_by: by,
        photo_url: None,
        notes: Some(notes.to_string()),
        gps_latitude: None,
        gps_longitude: None,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn completing_twice_keeps_one_row_with_latest_fields(pool: PgPool) {
    let fx = seed(&pool).await;
    let task = &BedTaskRepo::list_defaults(&pool).await.unwrap()[0];

    let first = TaskCompletionRepo::upsert_today(&pool, &completion(fx.bed_id, task.id, fx.worker_a, "first"))
        .await
        .unwrap();
    let second = TaskCompletionRepo::upsert_today(&pool, &completion(fx.bed_id, task.id, fx.worker_b, "second"))
        .await
        .unwrap();

    assert_eq!(first.id, second.id);
    assert_eq!(second.completed_by, Some(fx.worker_b));
    assert_eq!(second.notes.as_deref(), Some("second"));
    assert!(second.completion_time >= first.completion_time);

    let count = TaskCompletionRepo::count_for_bed_task(&pool, fx.bed_id, task.id)
        .await
        .unwrap();
    assert_eq!(count, 1);
}

#[sqlx::test(migrations = "./migrations")]
async fn uncompleting_without_completion_is_noop(pool: PgPool) {
    let fx = seed(&pool).await;
    let task = &BedTaskRepo::list_defaults(&pool).await.unwrap()[0];

    let removed = TaskCompletionRepo::delete_today(&pool, fx.bed_id, task.id)
        .await
        .unwrap();
    assert!(!removed);
    assert_eq!(
        TaskCompletionRepo::count_for_bed_task(&pool, fx.bed_id, task.id)
            .await
            .unwrap(),
        0
    );
}

#[sqlx::test(migrations = "./migrations")]
async fn uncompleting_only_touches_today(pool: PgPool) {
    let fx = seed(&pool).await;
    let task = &BedTaskRepo::list_defaults(&pool).await.unwrap()[0];

    sqlx::query(
        "INSERT INTO daily_task_completions (bed_id, task_id, completed_by, completion_date)
         VALUES ($1, $2, $3, CURRENT_DATE - 1)",
    )
    .bind(fx.bed_id)
    .bind(task.id)
    .bind(fx.worker_a)
    .execute(&pool)
    .await
    .unwrap();
    TaskCompletionRepo::upsert_today(&pool, &completion(fx.bed_id, task.id, fx.worker_a, "today"))
        .await
        .unwrap();

    assert!(TaskCompletionRepo::delete_today(&pool, fx.bed_id, task.id)
        .await
        .unwrap());
    assert_eq!(
        TaskCompletionRepo::count_for_bed_task(&pool, fx.bed_id, task.id)
            .await
            .unwrap(),
        1
    );
    assert!(TaskCompletionRepo::list_today_for_bed(&pool, fx.bed_id)
        .await
        .unwrap()
        .is_empty());
}

#[sqlx::test(migrations = "./migrations")]
async fn checklist_completes_after_every_default_task(pool: PgPool) {
    let fx = seed(&pool).await;
    let tasks = BedTaskRepo::list_defaults(&pool).await.unwrap();

    let bed = BedRepo::find_by_identifier(&pool, None, "BED-A1-QR2024")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(bed.id, fx.bed_id);
    assert!(!bed.tasks_completed_today);
    assert_eq!(bed.occupancy_percentage, Some(0.0));

    let today = TaskCompletionRepo::list_today_for_bed(&pool, fx.bed_id).await.unwrap();
    let (_, all) = build_checklist(tasks.clone(), today, |t| t.id, |c| c.task_id);
    assert!(!all);

    for task in &tasks {
        TaskCompletionRepo::upsert_today(&pool, &completion(fx.bed_id, task.id, fx.worker_a, "done"))
            .await
            .unwrap();
    }

    let today = TaskCompletionRepo::list_today_for_bed(&pool, fx.bed_id).await.unwrap();
    let (paired, all) = build_checklist(tasks, today, |t| t.id, |c| c.task_id);
    assert!(all);
    assert!(paired.iter().all(|(_, c)| c.is_some()));

    let bed = BedRepo::find_by_identifier(&pool, Some(fx.bed_id), &fx.bed_id.to_string())
        .await
        .unwrap()
        .unwrap();
    assert!(bed.tasks_completed_today);
}

#[sqlx::test(migrations = "./migrations")]
async fn bed_listing_filters_by_worker_and_qr(pool: PgPool) {
    let fx = seed(&pool).await;

    let mine = BedRepo::list(
        &pool,
        &BedFilter {
            assigned_to: Some(fx.worker_a),
            qr_code: None,
        },
    )
    .await
    .unwrap();
    assert_eq!(mine.len(), 1);
    assert_eq!(mine[0].location_name.as_deref(), Some("Nursery A"));
    assert_eq!(mine[0].person_in_charge_name.as_deref(), Some("Juan"));

    let theirs = BedRepo::list(
        &pool,
        &BedFilter {
            assigned_to: Some(fx.worker_b),
            qr_code: None,
        },
    )
    .await
    .unwrap();
    assert!(theirs.is_empty());

    let by_qr = BedRepo::list(
        &pool,
        &BedFilter {
            assigned_to: None,
            qr_code: Some("BED-A1-QR2024".to_string()),
        },
    )
    .await
    .unwrap();
    assert_eq!(by_qr.len(), 1);
}

#[sqlx::test(migrations = "./migrations")]
async fn unknown_identifier_finds_no_bed(pool: PgPool) {
    seed(&pool).await;
    let bed = BedRepo::find_by_identifier(&pool, None, "BED-ZZ-QR1999")
        .await
        .unwrap();
    assert!(bed.is_none());
}
