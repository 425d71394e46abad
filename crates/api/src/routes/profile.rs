//! Route definitions for the `/profile` resource.
//!
//! Profiles are never listed or deleted directly: a profile is removed by
//! the owning student's cascade delete.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::profile;
use crate::state::AppState;

/// Routes mounted at `/profile`.
///
/// ```text
/// POST   /        -> create
/// GET    /{id}    -> get_by_id
/// PUT    /{id}    -> update
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(profile::create))
        .route("/{id}", get(profile::get_by_id).put(profile::update))
}
