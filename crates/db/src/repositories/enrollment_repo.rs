//! Repository for the `enrollments` table.

use sqlx::PgPool;

use registrar_core::types::DbId;

use crate::models::enrollment::{Enrollment, EnrollmentDetail, EnrollmentDetailRow};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, student_id, course_id, date_enrolled, grade";

/// Column list for detail queries: the course and its instructor are
/// LEFT JOINed so a dangling reference maps to `null` instead of failing.
const DETAIL_COLUMNS: &str = "e.id, e.student_id, e.course_id, e.date_enrolled, e.grade, \
    c.id AS joined_course_id, c.title AS course_title, \
    c.instructor_id AS course_instructor_id, \
    i.id AS joined_instructor_id, i.name AS instructor_name";

/// Shared FROM clause for detail queries.
const DETAIL_FROM: &str = "FROM enrollments e \
    LEFT JOIN courses c ON c.id = e.course_id \
    LEFT JOIN instructors i ON i.id = c.instructor_id";

/// Provides CRUD operations for enrollments.
pub struct EnrollmentRepo;

impl EnrollmentRepo {
    /// Insert a new enrollment, returning the created row.
    ///
    /// `grade` defaults to `"N/A"` and `date_enrolled` to the insertion
    /// time. Fails with a unique violation on
    /// `uq_enrollments_student_id_course_id` if the student is already
    /// enrolled in the course.
    pub async fn create(
        pool: &PgPool,
        student_id: DbId,
        course_id: DbId,
        grade: Option<&str>,
    ) -> Result<Enrollment, sqlx::Error> {
        let query = format!(
            "INSERT INTO enrollments (student_id, course_id, grade)
             VALUES ($1, $2, COALESCE($3, 'N/A'))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Enrollment>(&query)
            .bind(student_id)
            .bind(course_id)
            .bind(grade)
            .fetch_one(pool)
            .await
    }

    /// Find an enrollment by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Enrollment>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM enrollments WHERE id = $1");
        sqlx::query_as::<_, Enrollment>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find the enrollment joining a student to a course, if any.
    pub async fn find_by_pair(
        pool: &PgPool,
        student_id: DbId,
        course_id: DbId,
    ) -> Result<Option<Enrollment>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM enrollments WHERE student_id = $1 AND course_id = $2");
        sqlx::query_as::<_, Enrollment>(&query)
            .bind(student_id)
            .bind(course_id)
            .fetch_optional(pool)
            .await
    }

    /// Delete an enrollment by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM enrollments WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Find an enrollment with its course (and the course's instructor)
    /// expanded.
    pub async fn find_detail(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<EnrollmentDetail>, sqlx::Error> {
        let query = format!("SELECT {DETAIL_COLUMNS} {DETAIL_FROM} WHERE e.id = $1");
        let row = sqlx::query_as::<_, EnrollmentDetailRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(row.map(EnrollmentDetailRow::into_detail))
    }

    /// List all enrollments with courses expanded.
    pub async fn list_detail(pool: &PgPool) -> Result<Vec<EnrollmentDetail>, sqlx::Error> {
        let query = format!("SELECT {DETAIL_COLUMNS} {DETAIL_FROM} ORDER BY e.id");
        let rows = sqlx::query_as::<_, EnrollmentDetailRow>(&query)
            .fetch_all(pool)
            .await?;
        Ok(rows
            .into_iter()
            .map(EnrollmentDetailRow::into_detail)
            .collect())
    }

    /// List a student's enrollments with courses expanded.
    pub async fn list_detail_by_student(
        pool: &PgPool,
        student_id: DbId,
    ) -> Result<Vec<EnrollmentDetail>, sqlx::Error> {
        let query =
            format!("SELECT {DETAIL_COLUMNS} {DETAIL_FROM} WHERE e.student_id = $1 ORDER BY e.id");
        let rows = sqlx::query_as::<_, EnrollmentDetailRow>(&query)
            .bind(student_id)
            .fetch_all(pool)
            .await?;
        Ok(rows
            .into_iter()
            .map(EnrollmentDetailRow::into_detail)
            .collect())
    }
}
