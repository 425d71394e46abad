//! Handlers for the `/student` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use registrar_core::error::CoreError;
use registrar_core::types::DbId;
use registrar_db::models::student::{CreateStudent, StudentDetail, UpdateStudent};
use registrar_db::repositories::StudentRepo;

use crate::error::{AppError, AppResult};
use crate::response::{CountResponse, MessageResponse};
use crate::state::AppState;

/// GET /student
///
/// An empty collection is reported as 404, not an empty array.
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<StudentDetail>>> {
    let students = StudentRepo::list_detail(&state.pool).await?;
    if students.is_empty() {
        return Err(AppError::NotFound("No students found".to_string()));
    }
    Ok(Json(students))
}

/// GET /student/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<StudentDetail>> {
    let student = StudentRepo::find_detail(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Student",
            id,
        }))?;
    Ok(Json(student))
}

/// POST /student
///
/// A duplicate email is rejected by `uq_students_email` and surfaces as
/// a 409.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateStudent>,
) -> AppResult<(StatusCode, Json<StudentDetail>)> {
    let student = StudentRepo::create(&state.pool, &input).await?;
    // A fresh student has no profile or enrollments yet.
    let detail = StudentDetail {
        student,
        profile: None,
        enrollments: Vec::new(),
    };
    Ok((StatusCode::CREATED, Json(detail)))
}

/// PUT /student/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateStudent>,
) -> AppResult<Json<StudentDetail>> {
    let student = StudentRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Student",
            id,
        }))?;
    let detail = StudentRepo::find_detail(&state.pool, student.id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Student",
            id,
        }))?;
    Ok(Json(detail))
}

/// DELETE /student/{id}
///
/// Removes the student's profile and enrollments along with the student
/// row, in one transaction.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<MessageResponse>> {
    let deleted = StudentRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Student",
            id,
        }));
    }
    Ok(Json(MessageResponse {
        message: format!("Student {id} deleted"),
    }))
}

/// GET /student_count
///
/// A zero count is reported as 404, matching the empty-collection rule
/// for lists.
pub async fn count(State(state): State<AppState>) -> AppResult<Json<CountResponse>> {
    let count = StudentRepo::count(&state.pool).await?;
    if count == 0 {
        return Err(AppError::NotFound("No students found".to_string()));
    }
    Ok(Json(CountResponse { count }))
}
