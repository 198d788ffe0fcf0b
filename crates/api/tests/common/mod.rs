#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, Response, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use sqlx::PgPool;
use tower::ServiceExt;

use smartseed_api::app::build_app;
use smartseed_api::config::ServerConfig;
use smartseed_api::state::AppState;

/// Test configuration matching the development defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        database_url: "postgres://unused".to_string(),
        db_max_connections: 5,
    }
}

/// The production router and middleware stack over the test pool.
pub fn build_test_app(pool: PgPool) -> Router {
    build_app(AppState {
        pool,
        config: Arc::new(test_config()),
    })
}

async fn send(app: Router, method: Method, uri: &str, body: Option<Value>) -> Response<Body> {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None).await
}

pub async fn post_json(app: Router, uri: &str, body: Value) -> Response<Body> {
    send(app, Method::POST, uri, Some(body)).await
}

pub async fn patch_json(app: Router, uri: &str, body: Value) -> Response<Body> {
    send(app, Method::PATCH, uri, Some(body)).await
}

pub async fn delete_json(app: Router, uri: &str, body: Value) -> Response<Body> {
    send(app, Method::DELETE, uri, Some(body)).await
}

/// POST a raw body, for requests that are not valid JSON.
pub async fn post_raw(app: Router, uri: &str, content_type: &str, body: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", content_type)
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Send a request, assert the status, and return the parsed body.
pub async fn expect_status(response: Response<Body>, status: StatusCode) -> Value {
    let actual = response.status();
    let json = body_json(response).await;
    assert_eq!(actual, status, "unexpected status, body: {json}");
    json
}

/// Create a location and a bed with the given QR code; returns the bed id.
pub async fn seed_bed(pool: &PgPool, qr_code: &str) -> i64 {
    let app = build_test_app(pool.clone());
    let location = expect_status(
        post_json(
            app.clone(),
            "/api/v1/locations",
            serde_json::json!({ "location_name": format!("Nursery for {qr_code}") }),
        )
        .await,
        StatusCode::CREATED,
    )
    .await;

    let bed = expect_status(
        post_json(
            app,
            "/api/v1/beds",
            serde_json::json!({
                "bed_name": "A1",
                "location_id": location["data"]["id"],
                "species_category": "Forestry",
                "qr_code": qr_code,
                "capacity": 200,
            }),
        )
        .await,
        StatusCode::CREATED,
    )
    .await;
    bed["data"]["id"].as_i64().unwrap()
}

/// Create a user through the API and return its id.
pub async fn seed_user(pool: &PgPool, email: &str, password: &str, role: &str) -> i64 {
    let app = build_test_app(pool.clone());
    let user = expect_status(
        post_json(
            app,
            "/api/v1/users",
            serde_json::json!({
                "name": "Test User",
                "email": email,
                "password": password,
                "role": role,
            }),
        )
        .await,
        StatusCode::CREATED,
    )
    .await;
    user["data"]["id"].as_i64().unwrap()
}
