//! Repository for the `instructors` table.

use std::collections::HashMap;

use sqlx::PgPool;

use registrar_core::types::DbId;

use crate::models::course::CourseSummary;
use crate::models::instructor::{
    CreateInstructor, Instructor, InstructorDetail, UpdateInstructor,
};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name";

/// Column list for course summaries embedded in instructor payloads.
const COURSE_COLUMNS: &str = "id, title, instructor_id";

/// Provides CRUD operations for instructors.
pub struct InstructorRepo;

impl InstructorRepo {
    /// Insert a new instructor, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateInstructor,
    ) -> Result<Instructor, sqlx::Error> {
        let query = format!(
            "INSERT INTO instructors (name)
             VALUES ($1)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Instructor>(&query)
            .bind(&input.name)
            .fetch_one(pool)
            .await
    }

    /// Find an instructor by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Instructor>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM instructors WHERE id = $1");
        sqlx::query_as::<_, Instructor>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all instructors ordered by ID.
    pub async fn list(pool: &PgPool) -> Result<Vec<Instructor>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM instructors ORDER BY id");
        sqlx::query_as::<_, Instructor>(&query)
            .fetch_all(pool)
            .await
    }

    /// Update an instructor. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateInstructor,
    ) -> Result<Option<Instructor>, sqlx::Error> {
        let query = format!(
            "UPDATE instructors SET
                name = COALESCE($2, name)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Instructor>(&query)
            .bind(id)
            .bind(&input.name)
            .fetch_optional(pool)
            .await
    }

    /// Delete an instructor along with its courses and their enrollments.
    ///
    /// The cascade runs depth-first (enrollments, then courses, then the
    /// instructor row) inside one transaction. Returns `true` if the
    /// instructor row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let mut tx = pool.begin().await?;

        sqlx::query(
            "DELETE FROM enrollments
             WHERE course_id IN (SELECT id FROM courses WHERE instructor_id = $1)",
        )
        .bind(id)
        .execute(&mut *tx)
        .await?;

        sqlx::query("DELETE FROM courses WHERE instructor_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        let result = sqlx::query("DELETE FROM instructors WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(result.rows_affected() > 0)
    }

    /// Find an instructor with its courses expanded.
    pub async fn find_detail(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<InstructorDetail>, sqlx::Error> {
        let Some(instructor) = Self::find_by_id(pool, id).await? else {
            return Ok(None);
        };
        let query = format!(
            "SELECT {COURSE_COLUMNS} FROM courses WHERE instructor_id = $1 ORDER BY id"
        );
        let courses = sqlx::query_as::<_, CourseSummary>(&query)
            .bind(instructor.id)
            .fetch_all(pool)
            .await?;
        Ok(Some(InstructorDetail {
            instructor,
            courses,
        }))
    }

    /// List all instructors with courses expanded.
    ///
    /// Courses are fetched in bulk and grouped in memory rather than
    /// queried per instructor.
    pub async fn list_detail(pool: &PgPool) -> Result<Vec<InstructorDetail>, sqlx::Error> {
        let instructors = Self::list(pool).await?;

        let query = format!(
            "SELECT {COURSE_COLUMNS} FROM courses WHERE instructor_id IS NOT NULL ORDER BY id"
        );
        let courses = sqlx::query_as::<_, CourseSummary>(&query)
            .fetch_all(pool)
            .await?;

        let mut courses_by_instructor: HashMap<DbId, Vec<CourseSummary>> = HashMap::new();
        for course in courses {
            if let Some(instructor_id) = course.instructor_id {
                courses_by_instructor
                    .entry(instructor_id)
                    .or_default()
                    .push(course);
            }
        }

        Ok(instructors
            .into_iter()
            .map(|instructor| {
                let courses = courses_by_instructor
                    .remove(&instructor.id)
                    .unwrap_or_default();
                InstructorDetail {
                    instructor,
                    courses,
                }
            })
            .collect())
    }
}
