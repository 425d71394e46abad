//! Repository for the `students` table.

use std::collections::HashMap;

use sqlx::PgPool;

use registrar_core::types::DbId;

use crate::models::enrollment::EnrollmentDetail;
use crate::models::profile::ProfileSummary;
use crate::models::student::{CreateStudent, Student, StudentDetail, UpdateStudent};
use crate::repositories::{EnrollmentRepo, ProfileRepo};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, email";

/// Provides CRUD operations for students.
pub struct StudentRepo;

impl StudentRepo {
    /// Insert a new student, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateStudent) -> Result<Student, sqlx::Error> {
        let query = format!(
            "INSERT INTO students (name, email)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Student>(&query)
            .bind(&input.name)
            .bind(&input.email)
            .fetch_one(pool)
            .await
    }

    /// Find a student by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Student>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM students WHERE id = $1");
        sqlx::query_as::<_, Student>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all students ordered by ID.
    pub async fn list(pool: &PgPool) -> Result<Vec<Student>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM students ORDER BY id");
        sqlx::query_as::<_, Student>(&query).fetch_all(pool).await
    }

    /// Count all students.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM students")
            .fetch_one(pool)
            .await
    }

    /// Update a student. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateStudent,
    ) -> Result<Option<Student>, sqlx::Error> {
        let query = format!(
            "UPDATE students SET
                name = COALESCE($2, name),
                email = COALESCE($3, email)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Student>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.email)
            .fetch_optional(pool)
            .await
    }

    /// Delete a student along with its profile and enrollments.
    ///
    /// Children are removed first, then the student row, all inside one
    /// transaction. Returns `true` if the student row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let mut tx = pool.begin().await?;

        sqlx::query("DELETE FROM enrollments WHERE student_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        sqlx::query("DELETE FROM profiles WHERE student_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        let result = sqlx::query("DELETE FROM students WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(result.rows_affected() > 0)
    }

    /// Find a student with its profile and enrollments expanded.
    pub async fn find_detail(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<StudentDetail>, sqlx::Error> {
        let Some(student) = Self::find_by_id(pool, id).await? else {
            return Ok(None);
        };
        let profile = ProfileRepo::find_by_student_id(pool, student.id)
            .await?
            .map(ProfileSummary::from);
        let enrollments = EnrollmentRepo::list_detail_by_student(pool, student.id).await?;
        Ok(Some(StudentDetail {
            student,
            profile,
            enrollments,
        }))
    }

    /// List all students with profiles and enrollments expanded.
    ///
    /// Profiles and enrollments are fetched in bulk and grouped in memory
    /// rather than queried per student.
    pub async fn list_detail(pool: &PgPool) -> Result<Vec<StudentDetail>, sqlx::Error> {
        let students = Self::list(pool).await?;

        let profiles =
            sqlx::query_as::<_, ProfileSummary>("SELECT age, bio, student_id FROM profiles")
                .fetch_all(pool)
                .await?;
        let mut profiles_by_student: HashMap<DbId, ProfileSummary> = profiles
            .into_iter()
            .map(|p| (p.student_id, p))
            .collect();

        let mut enrollments_by_student: HashMap<DbId, Vec<EnrollmentDetail>> = HashMap::new();
        for detail in EnrollmentRepo::list_detail(pool).await? {
            enrollments_by_student
                .entry(detail.enrollment.student_id)
                .or_default()
                .push(detail);
        }

        Ok(students
            .into_iter()
            .map(|student| {
                let profile = profiles_by_student.remove(&student.id);
                let enrollments = enrollments_by_student.remove(&student.id).unwrap_or_default();
                StudentDetail {
                    student,
                    profile,
                    enrollments,
                }
            })
            .collect())
    }
}
