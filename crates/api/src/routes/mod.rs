pub mod auth;
pub mod dashboard;
pub mod health;
pub mod inventory;
pub mod monitoring;
pub mod requests;
pub mod tasks;
pub mod users;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/login                          login (POST)
///
/// /users                               list (?role=), create
///
/// /locations                           list, create
/// /beds                                list (?assigned_to, ?qr_code), create
/// /batches                             list, create
///
/// /seedling-requests                   list, submit
/// /seedling-requests/{id}              get, review (PATCH)
/// /releases                            list, create
///
/// /monitoring/visits                   list, schedule
/// /monitoring/visits/{id}              record (PATCH)
/// /monitoring/sites                    geotagged sites (GET)
/// /blacklist                           active entries (GET)
/// /sms                                 list, send (simulated)
///
/// /tasks/defaults                      default task catalogue (GET)
/// /tasks/bed/{identifier}              checklist by bed id or QR code (GET)
/// /tasks/complete                      complete (POST), uncomplete (DELETE)
///
/// /dashboard/stats                     chart data and summary (GET)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/users", users::router())
        .merge(inventory::router())
        .merge(requests::router())
        .nest("/monitoring", monitoring::router())
        .merge(monitoring::blacklist_and_sms_router())
        .nest("/tasks", tasks::router())
        .nest("/dashboard", dashboard::router())
}
