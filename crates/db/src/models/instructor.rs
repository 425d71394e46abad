//! Instructor entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use registrar_core::types::DbId;

use crate::models::course::CourseSummary;

/// An instructor row from the `instructors` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Instructor {
    pub id: DbId,
    pub name: String,
}

/// DTO for creating a new instructor.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateInstructor {
    pub name: String,
}

/// DTO for updating an existing instructor.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UpdateInstructor {
    pub name: Option<String>,
}

/// An instructor with its courses expanded one level.
///
/// Courses appear without their enrollments, and the instructor side of
/// each course is reduced to the `instructor_id` scalar.
#[derive(Debug, Clone, Serialize)]
pub struct InstructorDetail {
    #[serde(flatten)]
    pub instructor: Instructor,
    pub courses: Vec<CourseSummary>,
}

/// The scalar form of an instructor used inside course payloads.
#[derive(Debug, Clone, Serialize)]
pub struct InstructorSummary {
    pub id: DbId,
    pub name: String,
}
