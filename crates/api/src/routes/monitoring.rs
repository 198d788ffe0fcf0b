//! Post-release monitoring routes.

use axum::routing::{get, patch};
use axum::Router;

use crate::handlers::{blacklist, monitoring, sms};
use crate::state::AppState;

/// Routes mounted at `/monitoring`.
///
/// ```text
/// GET    /visits         -> list_visits
/// POST   /visits         -> schedule_visit
/// PATCH  /visits/{id}    -> record_visit
/// GET    /sites          -> list_sites
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/visits",
            get(monitoring::list_visits).post(monitoring::schedule_visit),
        )
        .route("/visits/{id}", patch(monitoring::record_visit))
        .route("/sites", get(monitoring::list_sites))
}

/// Root-level follow-up routes.
///
/// ```text
/// GET    /blacklist      -> list_blacklist
/// GET    /sms            -> list_sms
/// POST   /sms            -> send_sms
/// ```
pub fn blacklist_and_sms_router() -> Router<AppState> {
    Router::new()
        .route("/blacklist", get(blacklist::list_blacklist))
        .route("/sms", get(sms::list_sms).post(sms::send_sms))
}
