//! Student entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use registrar_core::types::DbId;

use crate::models::enrollment::EnrollmentDetail;
use crate::models::profile::ProfileSummary;

/// A student row from the `students` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Student {
    pub id: DbId,
    pub name: String,
    pub email: String,
}

/// DTO for creating a new student.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateStudent {
    pub name: String,
    pub email: String,
}

/// DTO for updating an existing student. Only listed fields are writable;
/// unknown keys are rejected at deserialization.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UpdateStudent {
    pub name: Option<String>,
    pub email: Option<String>,
}

/// A student with its profile and enrollments expanded.
///
/// The profile appears without a nested student, and each enrollment
/// carries the student only as a scalar `student_id`.
#[derive(Debug, Clone, Serialize)]
pub struct StudentDetail {
    #[serde(flatten)]
    pub student: Student,
    pub profile: Option<ProfileSummary>,
    pub enrollments: Vec<EnrollmentDetail>,
}
