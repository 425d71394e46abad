//! Enrollment entity model and DTOs.
//!
//! An enrollment joins one student to one course;
//! `uq_enrollments_student_id_course_id` guarantees a student enrolls in a
//! given course at most once.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use registrar_core::types::{DbId, Timestamp};

use crate::models::instructor::InstructorSummary;

/// An enrollment row from the `enrollments` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Enrollment {
    pub id: DbId,
    pub student_id: DbId,
    pub course_id: DbId,
    pub date_enrolled: Timestamp,
    pub grade: String,
}

/// DTO for creating a new enrollment.
///
/// `student_id` and `course_id` are declared optional so their absence can
/// be reported as a 400 with a descriptive message instead of a
/// deserialization rejection; the handler requires both.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateEnrollment {
    pub student_id: Option<DbId>,
    pub course_id: Option<DbId>,
    pub grade: Option<String>,
}

/// A course as embedded in an enrollment payload: instructor expanded one
/// level, enrollments omitted.
#[derive(Debug, Clone, Serialize)]
pub struct CourseWithInstructor {
    pub id: DbId,
    pub title: String,
    pub instructor_id: Option<DbId>,
    pub instructor: Option<InstructorSummary>,
}

/// An enrollment with its course expanded.
///
/// The student side stays a scalar `student_id`. `course` is `None` when
/// the course row is absent; the foreign key makes that unreachable in
/// practice, but the serializer does not rely on it.
#[derive(Debug, Clone, Serialize)]
pub struct EnrollmentDetail {
    #[serde(flatten)]
    pub enrollment: Enrollment,
    pub course: Option<CourseWithInstructor>,
}

/// Flat row produced by the enrollment detail query (LEFT JOINs on
/// `courses` and `instructors`).
#[derive(Debug, Clone, FromRow)]
pub struct EnrollmentDetailRow {
    pub id: DbId,
    pub student_id: DbId,
    pub course_id: DbId,
    pub date_enrolled: Timestamp,
    pub grade: String,
    pub joined_course_id: Option<DbId>,
    pub course_title: Option<String>,
    pub course_instructor_id: Option<DbId>,
    pub joined_instructor_id: Option<DbId>,
    pub instructor_name: Option<String>,
}

impl EnrollmentDetailRow {
    /// Fold the joined course and instructor columns into the nested view.
    pub fn into_detail(self) -> EnrollmentDetail {
        let instructor = self
            .joined_instructor_id
            .zip(self.instructor_name)
            .map(|(id, name)| InstructorSummary { id, name });
        let course = self
            .joined_course_id
            .zip(self.course_title)
            .map(|(id, title)| CourseWithInstructor {
                id,
                title,
                instructor_id: self.course_instructor_id,
                instructor,
            });
        EnrollmentDetail {
            enrollment: Enrollment {
                id: self.id,
                student_id: self.student_id,
                course_id: self.course_id,
                date_enrolled: self.date_enrolled,
                grade: self.grade,
            },
            course,
        }
    }
}
