//! HTTP tests for the QR-driven daily task checklist.

mod common;

use axum::http::StatusCode;
use common::{build_test_app, delete_json, expect_status, get, post_json, seed_bed, seed_user};
use serde_json::json;
use sqlx::PgPool;

#[sqlx::test(migrations = "../db/migrations")]
async fn checklist_by_qr_code_completes_after_all_tasks(pool: PgPool) {
    let bed_id = seed_bed(&pool, "BED-A1-QR2024").await;
    let worker = seed_user(&pool, "worker@example.com", "field-pass-1", "field_worker").await;

    let before = expect_status(
        get(build_test_app(pool.clone()), "/api/v1/tasks/bed/BED-A1-QR2024").await,
        StatusCode::OK,
    )
    .await;
    assert_eq!(before["data"]["bed"]["id"], bed_id);
    assert_eq!(before["data"]["all_completed"], false);
    let tasks = before["data"]["tasks"].as_array().unwrap().clone();
    assert_eq!(tasks.len(), 5);
    assert!(tasks.iter().all(|t| t["is_completed"] == false));
    assert!(tasks.iter().all(|t| t["completion_data"].is_null()));

    for task in &tasks {
        expect_status(
            post_json(
                build_test_app(pool.clone()),
                "/api/v1/tasks/complete",
                json!({ "bed_id": bed_id, "task_id": task["id"], "completed_by": worker }),
            )
            .await,
            StatusCode::OK,
        )
        .await;
    }

    let after = expect_status(
        get(build_test_app(pool.clone()), "/api/v1/tasks/bed/BED-A1-QR2024").await,
        StatusCode::OK,
    )
    .await;
    assert_eq!(after["data"]["all_completed"], true);
    assert!(after["data"]["tasks"]
        .as_array()
        .unwrap()
        .iter()
        .all(|t| t["is_completed"] == true));

    // The same bed is reachable by primary key.
    let by_id = expect_status(
        get(build_test_app(pool), &format!("/api/v1/tasks/bed/{bed_id}")).await,
        StatusCode::OK,
    )
    .await;
    assert_eq!(by_id["data"]["all_completed"], true);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn unknown_bed_is_404(pool: PgPool) {
    let json = expect_status(
        get(build_test_app(pool), "/api/v1/tasks/bed/NO-SUCH-BED").await,
        StatusCode::NOT_FOUND,
    )
    .await;
    assert_eq!(json["code"], "NOT_FOUND");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn completing_twice_overwrites_then_uncomplete_resets(pool: PgPool) {
    let bed_id = seed_bed(&pool, "BED-B2-QR2024").await;
    let a = seed_user(&pool, "a@example.com", "password-a", "field_worker").await;
    let b = seed_user(&pool, "b@example.com", "password-b", "field_worker").await;
    let task_id: i64 = 1;

    let first = expect_status(
        post_json(
            build_test_app(pool.clone()),
            "/api/v1/tasks/complete",
            json!({ "bed_id": bed_id, "task_id": task_id, "completed_by": a, "notes": "dry" }),
        )
        .await,
        StatusCode::OK,
    )
    .await;
    let second = expect_status(
        post_json(
            build_test_app(pool.clone()),
            "/api/v1/tasks/complete",
            json!({ "bed_id": bed_id, "task_id": task_id, "completed_by": b, "notes": "watered" }),
        )
        .await,
        StatusCode::OK,
    )
    .await;
    assert_eq!(first["data"]["id"], second["data"]["id"]);
    assert_eq!(second["data"]["completed_by"], b);
    assert_eq!(second["data"]["notes"], "watered");

    let removed = expect_status(
        delete_json(
            build_test_app(pool.clone()),
            "/api/v1/tasks/complete",
            json!({ "bed_id": bed_id, "task_id": task_id }),
        )
        .await,
        StatusCode::OK,
    )
    .await;
    assert_eq!(removed["data"]["removed"], true);

    let again = expect_status(
        delete_json(
            build_test_app(pool.clone()),
            "/api/v1/tasks/complete",
            json!({ "bed_id": bed_id, "task_id": task_id }),
        )
        .await,
        StatusCode::OK,
    )
    .await;
    assert_eq!(again["data"]["removed"], false);

    let rows: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM daily_task_completions")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(rows, 0);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn complete_requires_ids_and_existing_rows(pool: PgPool) {
    let bed_id = seed_bed(&pool, "BED-C3-QR2024").await;
    let worker = seed_user(&pool, "c@example.com", "password-c", "field_worker").await;

    let json = expect_status(
        post_json(
            build_test_app(pool.clone()),
            "/api/v1/tasks/complete",
            json!({ "bed_id": bed_id, "task_id": 1 }),
        )
        .await,
        StatusCode::BAD_REQUEST,
    )
    .await;
    assert_eq!(json["error"], "completed_by is required");

    expect_status(
        post_json(
            build_test_app(pool.clone()),
            "/api/v1/tasks/complete",
            json!({ "bed_id": 9999, "task_id": 1, "completed_by": worker }),
        )
        .await,
        StatusCode::NOT_FOUND,
    )
    .await;

    expect_status(
        post_json(
            build_test_app(pool.clone()),
            "/api/v1/tasks/complete",
            json!({ "bed_id": bed_id, "task_id": 9999, "completed_by": worker }),
        )
        .await,
        StatusCode::NOT_FOUND,
    )
    .await;

    expect_status(
        delete_json(
            build_test_app(pool),
            "/api/v1/tasks/complete",
            json!({ "bed_id": bed_id }),
        )
        .await,
        StatusCode::BAD_REQUEST,
    )
    .await;
}

#[sqlx::test(migrations = "../db/migrations")]
async fn default_catalogue_is_listed(pool: PgPool) {
    let json = expect_status(
        get(build_test_app(pool), "/api/v1/tasks/defaults").await,
        StatusCode::OK,
    )
    .await;
    let tasks = json["data"].as_array().unwrap();
    assert_eq!(tasks.len(), 5);
    assert_eq!(tasks[0]["task_name"], "Check Soil Moisture");
}
