//! Handlers for the `/profile` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use registrar_core::error::CoreError;
use registrar_core::types::DbId;
use registrar_db::models::profile::{CreateProfile, ProfileSummary, UpdateProfile};
use registrar_db::repositories::{ProfileRepo, StudentRepo};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// POST /profile
///
/// The referenced student must exist, and a student can own at most one
/// profile.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateProfile>,
) -> AppResult<(StatusCode, Json<ProfileSummary>)> {
    StudentRepo::find_by_id(&state.pool, input.student_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Student",
            id: input.student_id,
        }))?;

    if ProfileRepo::find_by_student_id(&state.pool, input.student_id)
        .await?
        .is_some()
    {
        return Err(AppError::Core(CoreError::Conflict(format!(
            "Student {} already has a profile",
            input.student_id
        ))));
    }

    let profile = ProfileRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(ProfileSummary::from(profile))))
}

/// GET /profile/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<ProfileSummary>> {
    let profile = ProfileRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Profile",
            id,
        }))?;
    Ok(Json(ProfileSummary::from(profile)))
}

/// PUT /profile/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateProfile>,
) -> AppResult<Json<ProfileSummary>> {
    let profile = ProfileRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Profile",
            id,
        }))?;
    Ok(Json(ProfileSummary::from(profile)))
}
