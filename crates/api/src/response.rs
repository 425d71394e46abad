//! Shared response payload types for API handlers.
//!
//! Use these instead of ad-hoc `serde_json::json!` literals to get
//! compile-time type safety and consistent serialization.

use serde::Serialize;

/// Confirmation payload returned by delete handlers.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Payload for `GET /student_count`.
#[derive(Debug, Serialize)]
pub struct CountResponse {
    pub count: i64,
}
