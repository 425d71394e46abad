use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Health/info response payload.
#[derive(Serialize)]
pub struct InfoResponse {
    /// Human-readable service description.
    pub message: &'static str,
    /// Crate version from Cargo.toml.
    pub version: &'static str,
    /// Whether the database is reachable.
    pub db_healthy: bool,
}

/// GET / -- returns a service info message and database health.
async fn info(State(state): State<AppState>) -> Json<InfoResponse> {
    let db_healthy = registrar_db::health_check(&state.pool).await.is_ok();

    Json(InfoResponse {
        message: "Course enrollment API",
        version: env!("CARGO_PKG_VERSION"),
        db_healthy,
    })
}

/// Mount the health/info route at the root path.
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(info))
}
