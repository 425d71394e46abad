//! Repository for the `courses` table.

use sqlx::PgPool;

use registrar_core::types::DbId;

use crate::models::course::{Course, CourseDetail, CourseDetailRow, CreateCourse, UpdateCourse};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, instructor_id";

/// Column list for the detail query: the instructor is joined in and the
/// student body is reduced to an enrollment count.
const DETAIL_COLUMNS: &str = "c.id, c.title, c.instructor_id, i.name AS instructor_name, \
    (SELECT COUNT(*) FROM enrollments e WHERE e.course_id = c.id) AS student_count";

/// Provides CRUD operations for courses.
pub struct CourseRepo;

impl CourseRepo {
    /// Insert a new course, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateCourse) -> Result<Course, sqlx::Error> {
        let query = format!(
            "INSERT INTO courses (title, instructor_id)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Course>(&query)
            .bind(&input.title)
            .bind(input.instructor_id)
            .fetch_one(pool)
            .await
    }

    /// Find a course by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Course>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM courses WHERE id = $1");
        sqlx::query_as::<_, Course>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all courses ordered by ID.
    pub async fn list(pool: &PgPool) -> Result<Vec<Course>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM courses ORDER BY id");
        sqlx::query_as::<_, Course>(&query).fetch_all(pool).await
    }

    /// Update a course. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateCourse,
    ) -> Result<Option<Course>, sqlx::Error> {
        let query = format!(
            "UPDATE courses SET
                title = COALESCE($2, title),
                instructor_id = COALESCE($3, instructor_id)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Course>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(input.instructor_id)
            .fetch_optional(pool)
            .await
    }

    /// Delete a course along with its enrollments.
    ///
    /// Enrollments are removed first, then the course row, inside one
    /// transaction. Returns `true` if the course row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let mut tx = pool.begin().await?;

        sqlx::query("DELETE FROM enrollments WHERE course_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        let result = sqlx::query("DELETE FROM courses WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(result.rows_affected() > 0)
    }

    /// Find a course with its instructor expanded and student count.
    pub async fn find_detail(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<CourseDetail>, sqlx::Error> {
        let query = format!(
            "SELECT {DETAIL_COLUMNS}
             FROM courses c
             LEFT JOIN instructors i ON i.id = c.instructor_id
             WHERE c.id = $1"
        );
        let row = sqlx::query_as::<_, CourseDetailRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(row.map(CourseDetailRow::into_detail))
    }

    /// List all courses with instructors expanded and student counts.
    pub async fn list_detail(pool: &PgPool) -> Result<Vec<CourseDetail>, sqlx::Error> {
        let query = format!(
            "SELECT {DETAIL_COLUMNS}
             FROM courses c
             LEFT JOIN instructors i ON i.id = c.instructor_id
             ORDER BY c.id"
        );
        let rows = sqlx::query_as::<_, CourseDetailRow>(&query)
            .fetch_all(pool)
            .await?;
        Ok(rows.into_iter().map(CourseDetailRow::into_detail).collect())
    }
}
