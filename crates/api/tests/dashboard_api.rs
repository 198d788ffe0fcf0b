mod common;

use axum::http::StatusCode;
use common::{build_test_app, expect_status, get, post_json, seed_bed, seed_user};
use serde_json::json;
use sqlx::PgPool;

#[sqlx::test(migrations = "../db/migrations")]
async fn empty_database_yields_full_length_series(pool: PgPool) {
    let json = expect_status(
        get(build_test_app(pool), "/api/v1/dashboard/stats").await,
        StatusCode::OK,
    )
    .await;
    let data = &json["data"];

    let growth = data["growth"].as_array().unwrap();
    assert_eq!(growth.len(), 30);
    assert!(growth.iter().all(|p| p["plants"] == 0));

    let tasks = data["tasks"].as_array().unwrap();
    assert_eq!(tasks.len(), 7);
    assert!(tasks.iter().all(|d| d["completed"] == 0 && d["pending"] == 0));

    assert!(data["species"].as_array().unwrap().is_empty());
    assert!(data["capacity"].as_array().unwrap().is_empty());
    assert_eq!(data["summary"]["total_batches"], 0);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn stats_reflect_batches_beds_and_completions(pool: PgPool) {
    let bed_id = seed_bed(&pool, "BED-A1-QR2024").await;
    let worker = seed_user(&pool, "w@example.com", "worker-pass", "field_worker").await;

    for count in [100, 40] {
        expect_status(
            post_json(
                build_test_app(pool.clone()),
                "/api/v1/batches",
                json!({ "source_location": "Mt. Makiling", "wildlings_count": count }),
            )
            .await,
            StatusCode::CREATED,
        )
        .await;
    }
    sqlx::query("UPDATE beds SET current_occupancy = 50 WHERE id = $1")
        .bind(bed_id)
        .execute(&pool)
        .await
        .unwrap();
    expect_status(
        post_json(
            build_test_app(pool.clone()),
            "/api/v1/tasks/complete",
            json!({ "bed_id": bed_id, "task_id": 1, "completed_by": worker }),
        )
        .await,
        StatusCode::OK,
    )
    .await;

    let json = expect_status(
        get(build_test_app(pool), "/api/v1/dashboard/stats").await,
        StatusCode::OK,
    )
    .await;
    let data = &json["data"];

    let growth = data["growth"].as_array().unwrap();
    assert_eq!(growth.last().unwrap()["plants"], 140);

    let today = data["tasks"].as_array().unwrap().last().unwrap().clone();
    assert_eq!(today["completed"], 1);
    assert_eq!(today["pending"], 4);

    let capacity = data["capacity"].as_array().unwrap();
    assert_eq!(capacity[0]["percentage"], 25.0);

    let species = data["species"].as_array().unwrap();
    assert_eq!(species[0]["name"], "Forestry");
    assert_eq!(species[0]["color"], "#22c55e");

    let summary = &data["summary"];
    assert_eq!(summary["total_batches"], 2);
    assert_eq!(summary["total_plants"], 140);
    assert_eq!(summary["plants_in_beds"], 50);
    assert_eq!(summary["active_workers"], 1);
}
