//! Schema bootstrap: migrations apply, seed rows exist, helpers work.

use sqlx::PgPool;

#[sqlx::test(migrations = "./migrations")]
async fn health_check_succeeds(pool: PgPool) {
    smartseed_db::health_check(&pool).await.unwrap();
}

#[sqlx::test(migrations = "./migrations")]
async fn default_task_catalogue_is_seeded_in_order(pool: PgPool) {
    let tasks = smartseed_db::repositories::BedTaskRepo::list_defaults(&pool)
        .await
        .unwrap();
    let names: Vec<&str> = tasks.iter().map(|t| t.task_name.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "Check Soil Moisture",
            "Inspect for Pests",
            "Water Plants",
            "Check Temperature",
            "Record Observations",
        ]
    );
    assert!(tasks.iter().all(|t| t.is_default));
}

#[sqlx::test(migrations = "./migrations")]
async fn batch_codes_come_from_the_database(pool: PgPool) {
    let code: String = sqlx::query_scalar("SELECT generate_batch_code()")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert!(code.starts_with("BATCH-"), "unexpected code {code}");
    assert_eq!(code.len(), "BATCH-2024-0001".len());
}

#[sqlx::test(migrations = "./migrations")]
async fn unique_constraints_use_uq_prefix(pool: PgPool) {
    let names: Vec<String> = sqlx::query_scalar(
        "SELECT c.conname::TEXT FROM pg_constraint c
         JOIN pg_namespace n ON n.oid = c.connamespace
         WHERE c.contype = 'u' AND n.nspname = 'public'
         ORDER BY c.conname",
    )
    .fetch_all(&pool)
    .await
    .unwrap();
    assert!(!names.is_empty());
    for name in names {
        assert!(name.starts_with("uq_"), "unique constraint {name} lacks uq_ prefix");
    }
}
