//! Course entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use registrar_core::types::DbId;

use crate::models::instructor::InstructorSummary;

/// A course row from the `courses` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Course {
    pub id: DbId,
    pub title: String,
    pub instructor_id: Option<DbId>,
}

/// DTO for creating a new course. `instructor_id` may be omitted for a
/// course that has no instructor yet.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCourse {
    pub title: String,
    pub instructor_id: Option<DbId>,
}

/// DTO for updating an existing course.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UpdateCourse {
    pub title: Option<String>,
    pub instructor_id: Option<DbId>,
}

/// The scalar form of a course used inside instructor payloads: the
/// instructor back-reference stays an id, enrollments are omitted.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CourseSummary {
    pub id: DbId,
    pub title: String,
    pub instructor_id: Option<DbId>,
}

/// A course with its instructor expanded and its student body reduced to
/// a count.
#[derive(Debug, Clone, Serialize)]
pub struct CourseDetail {
    pub id: DbId,
    pub title: String,
    pub instructor: Option<InstructorSummary>,
    pub student_count: i64,
}

/// Flat row produced by the course detail query (LEFT JOIN on
/// `instructors` plus an enrollment count).
#[derive(Debug, Clone, FromRow)]
pub struct CourseDetailRow {
    pub id: DbId,
    pub title: String,
    pub instructor_id: Option<DbId>,
    pub instructor_name: Option<String>,
    pub student_count: i64,
}

impl CourseDetailRow {
    /// Fold the joined instructor columns into the nested view.
    pub fn into_detail(self) -> CourseDetail {
        let instructor = self
            .instructor_id
            .zip(self.instructor_name)
            .map(|(id, name)| InstructorSummary { id, name });
        CourseDetail {
            id: self.id,
            title: self.title,
            instructor,
            student_count: self.student_count,
        }
    }
}
