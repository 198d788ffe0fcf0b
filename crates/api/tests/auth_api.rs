mod common;

use axum::http::StatusCode;
use common::{build_test_app, expect_status, post_json, seed_user};
use serde_json::json;
use sqlx::PgPool;

#[sqlx::test(migrations = "../db/migrations")]
async fn login_returns_user_without_hash(pool: PgPool) {
    let id = seed_user(&pool, "staff@example.com", "correct-horse", "nursery_staff").await;

    let json = expect_status(
        post_json(
            build_test_app(pool),
            "/api/v1/auth/login",
            json!({ "email": "Staff@Example.com", "password": "correct-horse" }),
        )
        .await,
        StatusCode::OK,
    )
    .await;
    assert_eq!(json["data"]["id"], id);
    assert_eq!(json["data"]["role"], "nursery_staff");
    assert!(json["data"].get("password_hash").is_none());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn login_failures(pool: PgPool) {
    let id = seed_user(&pool, "staff@example.com", "correct-horse", "nursery_staff").await;

    let missing = expect_status(
        post_json(
            build_test_app(pool.clone()),
            "/api/v1/auth/login",
            json!({ "email": "staff@example.com" }),
        )
        .await,
        StatusCode::BAD_REQUEST,
    )
    .await;
    assert_eq!(missing["error"], "Email and password are required");

    for body in [
        json!({ "email": "staff@example.com", "password": "wrong" }),
        json!({ "email": "nobody@example.com", "password": "correct-horse" }),
    ] {
        let json = expect_status(
            post_json(build_test_app(pool.clone()), "/api/v1/auth/login", body).await,
            StatusCode::UNAUTHORIZED,
        )
        .await;
        assert_eq!(json["error"], "Invalid email or password");
    }

    sqlx::query("UPDATE users SET is_active = FALSE WHERE id = $1")
        .bind(id)
        .execute(&pool)
        .await
        .unwrap();
    let disabled = expect_status(
        post_json(
            build_test_app(pool),
            "/api/v1/auth/login",
            json!({ "email": "staff@example.com", "password": "correct-horse" }),
        )
        .await,
        StatusCode::FORBIDDEN,
    )
    .await;
    assert_eq!(disabled["error"], "Account is disabled");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn duplicate_email_is_conflict(pool: PgPool) {
    seed_user(&pool, "dup@example.com", "first-password", "admin").await;
    expect_status(
        post_json(
            build_test_app(pool),
            "/api/v1/users",
            json!({ "name": "Again", "email": "dup@example.com", "password": "second-password", "role": "admin" }),
        )
        .await,
        StatusCode::CONFLICT,
    )
    .await;
}
