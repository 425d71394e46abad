//! Handlers for the `/course` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use registrar_core::error::CoreError;
use registrar_core::types::DbId;
use registrar_db::models::course::{CourseDetail, CreateCourse, UpdateCourse};
use registrar_db::models::instructor::InstructorSummary;
use registrar_db::repositories::{CourseRepo, InstructorRepo};

use crate::error::{AppError, AppResult};
use crate::response::MessageResponse;
use crate::state::AppState;

/// GET /course
///
/// An empty collection is reported as 404, not an empty array.
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<CourseDetail>>> {
    let courses = CourseRepo::list_detail(&state.pool).await?;
    if courses.is_empty() {
        return Err(AppError::NotFound("No courses found".to_string()));
    }
    Ok(Json(courses))
}

/// GET /course/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<CourseDetail>> {
    let course = CourseRepo::find_detail(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Course",
            id,
        }))?;
    Ok(Json(course))
}

/// POST /course
///
/// When `instructor_id` is present it must reference an existing
/// instructor.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateCourse>,
) -> AppResult<(StatusCode, Json<CourseDetail>)> {
    let instructor = match input.instructor_id {
        Some(instructor_id) => Some(
            InstructorRepo::find_by_id(&state.pool, instructor_id)
                .await?
                .ok_or(AppError::Core(CoreError::NotFound {
                    entity: "Instructor",
                    id: instructor_id,
                }))?,
        ),
        None => None,
    };

    let course = CourseRepo::create(&state.pool, &input).await?;
    // A fresh course has no enrollments yet.
    let detail = CourseDetail {
        id: course.id,
        title: course.title,
        instructor: instructor.map(|i| InstructorSummary {
            id: i.id,
            name: i.name,
        }),
        student_count: 0,
    };
    Ok((StatusCode::CREATED, Json(detail)))
}

/// PUT /course/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateCourse>,
) -> AppResult<Json<CourseDetail>> {
    if let Some(instructor_id) = input.instructor_id {
        InstructorRepo::find_by_id(&state.pool, instructor_id)
            .await?
            .ok_or(AppError::Core(CoreError::NotFound {
                entity: "Instructor",
                id: instructor_id,
            }))?;
    }

    let course = CourseRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Course",
            id,
        }))?;
    let detail = CourseRepo::find_detail(&state.pool, course.id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Course",
            id,
        }))?;
    Ok(Json(detail))
}

/// DELETE /course/{id}
///
/// Removes the course's enrollments along with the course row, in one
/// transaction.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<MessageResponse>> {
    let deleted = CourseRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Course",
            id,
        }));
    }
    Ok(Json(MessageResponse {
        message: format!("Course {id} deleted"),
    }))
}
