//! Route definitions for the `/enrollment` resource.
//!
//! Enrollments are created and deleted, never updated; there is no PUT
//! route.

use axum::routing::get;
use axum::Router;

use crate::handlers::enrollment;
use crate::state::AppState;

/// Routes mounted at `/enrollment`.
///
/// ```text
/// GET    /        -> list
/// POST   /        -> create
/// GET    /{id}    -> get_by_id
/// DELETE /{id}    -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(enrollment::list).post(enrollment::create))
        .route(
            "/{id}",
            get(enrollment::get_by_id).delete(enrollment::delete),
        )
}
