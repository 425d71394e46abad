//! Handlers for the `/enrollment` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use registrar_core::error::CoreError;
use registrar_core::types::DbId;
use registrar_db::models::enrollment::{CreateEnrollment, EnrollmentDetail};
use registrar_db::repositories::{CourseRepo, EnrollmentRepo, StudentRepo};

use crate::error::{AppError, AppResult};
use crate::response::MessageResponse;
use crate::state::AppState;

/// GET /enrollment
///
/// An empty collection is reported as 404, not an empty array.
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<EnrollmentDetail>>> {
    let enrollments = EnrollmentRepo::list_detail(&state.pool).await?;
    if enrollments.is_empty() {
        return Err(AppError::NotFound("No enrollments found".to_string()));
    }
    Ok(Json(enrollments))
}

/// GET /enrollment/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<EnrollmentDetail>> {
    let enrollment = EnrollmentRepo::find_detail(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Enrollment",
            id,
        }))?;
    Ok(Json(enrollment))
}

/// POST /enrollment
///
/// Preconditions, checked in order before any write:
/// - `student_id` and `course_id` must be present (400)
/// - the referenced student and course must exist (404)
/// - the student must not already be enrolled in the course (409)
///
/// The unique constraint on `(student_id, course_id)` backstops the last
/// check under concurrent writers.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateEnrollment>,
) -> AppResult<(StatusCode, Json<EnrollmentDetail>)> {
    let student_id = input
        .student_id
        .ok_or_else(|| AppError::BadRequest("student_id is required".to_string()))?;
    let course_id = input
        .course_id
        .ok_or_else(|| AppError::BadRequest("course_id is required".to_string()))?;

    StudentRepo::find_by_id(&state.pool, student_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Student",
            id: student_id,
        }))?;
    CourseRepo::find_by_id(&state.pool, course_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Course",
            id: course_id,
        }))?;

    if EnrollmentRepo::find_by_pair(&state.pool, student_id, course_id)
        .await?
        .is_some()
    {
        return Err(AppError::Core(CoreError::Conflict(format!(
            "Student {student_id} is already enrolled in course {course_id}"
        ))));
    }

    let enrollment =
        EnrollmentRepo::create(&state.pool, student_id, course_id, input.grade.as_deref()).await?;
    let detail = EnrollmentRepo::find_detail(&state.pool, enrollment.id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Enrollment",
            id: enrollment.id,
        }))?;
    Ok((StatusCode::CREATED, Json(detail)))
}

/// DELETE /enrollment/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<MessageResponse>> {
    let deleted = EnrollmentRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Enrollment",
            id,
        }));
    }
    Ok(Json(MessageResponse {
        message: format!("Enrollment {id} deleted"),
    }))
}
