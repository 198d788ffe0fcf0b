//! Nursery inventory routes: locations, beds and wildling batches.

use axum::routing::get;
use axum::Router;

use crate::handlers::{batches, beds, locations};
use crate::state::AppState;

/// ```text
/// GET    /locations    -> list_locations
/// POST   /locations    -> create_location
/// GET    /beds         -> list_beds (?assigned_to, ?qr_code)
/// POST   /beds         -> create_bed
/// GET    /batches      -> list_batches
/// POST   /batches      -> create_batch
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/locations",
            get(locations::list_locations).post(locations::create_location),
        )
        .route("/beds", get(beds::list_beds).post(beds::create_bed))
        .route(
            "/batches",
            get(batches::list_batches).post(batches::create_batch),
        )
}
