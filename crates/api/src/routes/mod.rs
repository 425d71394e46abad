pub mod course;
pub mod enrollment;
pub mod health;
pub mod instructor;
pub mod profile;
pub mod student;

use axum::routing::get;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the resource route tree, mounted at the root path.
///
/// Route hierarchy:
///
/// ```text
/// /course                 list, create
/// /course/{id}            get, update, delete (cascades enrollments)
///
/// /student                list, create
/// /student/{id}           get, update, delete (cascades profile + enrollments)
/// /student_count          total student count
///
/// /instructor             list, create
/// /instructor/{id}        get, update, delete (cascades courses -> enrollments)
///
/// /enrollment             list, create
/// /enrollment/{id}        get, delete
///
/// /profile                create
/// /profile/{id}           get, update
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/course", course::router())
        .nest("/student", student::router())
        .route("/student_count", get(handlers::student::count))
        .nest("/instructor", instructor::router())
        .nest("/enrollment", enrollment::router())
        .nest("/profile", profile::router())
}
