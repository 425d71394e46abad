//! Route definitions for the `/instructor` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::instructor;
use crate::state::AppState;

/// Routes mounted at `/instructor`.
///
/// ```text
/// GET    /        -> list
/// POST   /        -> create
/// GET    /{id}    -> get_by_id
/// PUT    /{id}    -> update
/// DELETE /{id}    -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(instructor::list).post(instructor::create))
        .route(
            "/{id}",
            get(instructor::get_by_id)
                .put(instructor::update)
                .delete(instructor::delete),
        )
}
