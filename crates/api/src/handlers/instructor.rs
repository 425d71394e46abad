//! Handlers for the `/instructor` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use registrar_core::error::CoreError;
use registrar_core::types::DbId;
use registrar_db::models::instructor::{CreateInstructor, InstructorDetail, UpdateInstructor};
use registrar_db::repositories::InstructorRepo;

use crate::error::{AppError, AppResult};
use crate::response::MessageResponse;
use crate::state::AppState;

/// GET /instructor
///
/// An empty collection is reported as 404, not an empty array.
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<InstructorDetail>>> {
    let instructors = InstructorRepo::list_detail(&state.pool).await?;
    if instructors.is_empty() {
        return Err(AppError::NotFound("No instructors found".to_string()));
    }
    Ok(Json(instructors))
}

/// GET /instructor/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<InstructorDetail>> {
    let instructor = InstructorRepo::find_detail(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Instructor",
            id,
        }))?;
    Ok(Json(instructor))
}

/// POST /instructor
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateInstructor>,
) -> AppResult<(StatusCode, Json<InstructorDetail>)> {
    let instructor = InstructorRepo::create(&state.pool, &input).await?;
    // A fresh instructor has no courses yet.
    let detail = InstructorDetail {
        instructor,
        courses: Vec::new(),
    };
    Ok((StatusCode::CREATED, Json(detail)))
}

/// PUT /instructor/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateInstructor>,
) -> AppResult<Json<InstructorDetail>> {
    let instructor = InstructorRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Instructor",
            id,
        }))?;
    let detail = InstructorRepo::find_detail(&state.pool, instructor.id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Instructor",
            id,
        }))?;
    Ok(Json(detail))
}

/// DELETE /instructor/{id}
///
/// Removes the instructor's courses and their enrollments along with the
/// instructor row, in one transaction.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<MessageResponse>> {
    let deleted = InstructorRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Instructor",
            id,
        }));
    }
    Ok(Json(MessageResponse {
        message: format!("Instructor {id} deleted"),
    }))
}
