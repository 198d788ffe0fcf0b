//! Seedling request and release routes.

use axum::routing::get;
use axum::Router;

use crate::handlers::{releases, seedling_requests};
use crate::state::AppState;

/// ```text
/// GET    /seedling-requests         -> list_requests
/// POST   /seedling-requests         -> submit_request
/// GET    /seedling-requests/{id}    -> get_request
/// PATCH  /seedling-requests/{id}    -> review_request
/// GET    /releases                  -> list_releases
/// POST   /releases                  -> create_release
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/seedling-requests",
            get(seedling_requests::list_requests).post(seedling_requests::submit_request),
        )
        .route(
            "/seedling-requests/{id}",
            get(seedling_requests::get_request).patch(seedling_requests::review_request),
        )
        .route(
            "/releases",
            get(releases::list_releases).post(releases::create_release),
        )
}
