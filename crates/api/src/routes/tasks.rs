use axum::routing::{get, post};
use axum::Router;

use crate::handlers::tasks;
use crate::state::AppState;

/// Routes mounted at `/tasks`.
///
/// ```text
/// GET    /defaults             -> list_default_tasks
/// GET    /bed/{identifier}     -> get_bed_tasks
/// POST   /complete             -> complete_task
/// DELETE /complete             -> uncomplete_task
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/defaults", get(tasks::list_default_tasks))
        .route("/bed/{identifier}", get(tasks::get_bed_tasks))
        .route(
            "/complete",
            post(tasks::complete_task).delete(tasks::uncomplete_task),
        )
}
