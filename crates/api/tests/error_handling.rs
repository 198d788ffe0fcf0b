//! `AppError` to HTTP response mapping, without a server.

use axum::http::StatusCode;
use axum::response::IntoResponse;
use http_body_util::BodyExt;
use smartseed_api::error::AppError;
use smartseed_core::error::CoreError;

async fn error_to_response(err: AppError) -> (StatusCode, serde_json::Value) {
    let response = err.into_response();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

#[tokio::test]
async fn not_found_maps_to_404() {
    let (status, json) = error_to_response(AppError::Core(CoreError::NotFound {
        entity: "SeedlingRequest",
        id: 42,
    }))
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["code"], "NOT_FOUND");
    assert_eq!(json["error"], "SeedlingRequest with id 42 not found");
}

#[tokio::test]
async fn not_found_by_key_maps_to_404() {
    let (status, json) = error_to_response(AppError::Core(CoreError::NotFoundByKey {
        entity: "Bed",
        key: "BED-X".into(),
    }))
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"], "Bed 'BED-X' not found");
}

#[tokio::test]
async fn validation_maps_to_400() {
    let (status, json) =
        error_to_response(AppError::Core(CoreError::Validation("hectarage is required".into())))
            .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"], "hectarage is required");
}

#[tokio::test]
async fn precondition_maps_to_400_with_own_code() {
    let (status, json) = error_to_response(AppError::Core(CoreError::Precondition(
        "Request must be approved before releasing".into(),
    )))
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "PRECONDITION_FAILED");
}

#[tokio::test]
async fn auth_errors_map_to_401_and_403() {
    let (status, _) =
        error_to_response(AppError::Core(CoreError::Unauthorized("nope".into()))).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, json) =
        error_to_response(AppError::Core(CoreError::Forbidden("disabled".into()))).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(json["code"], "FORBIDDEN");
}

#[tokio::test]
async fn internal_errors_hide_details() {
    let (status, json) =
        error_to_response(AppError::InternalError("connection string leaked".into())).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"], "An internal error occurred");
}

#[tokio::test]
async fn row_not_found_maps_to_404() {
    let (status, _) = error_to_response(AppError::Database(sqlx::Error::RowNotFound)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
