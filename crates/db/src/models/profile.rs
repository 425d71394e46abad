//! Profile entity model and DTOs.
//!
//! A profile belongs to exactly one student; `uq_profiles_student_id`
//! enforces the 1:1 relationship at the storage layer.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use registrar_core::types::DbId;

/// A profile row from the `profiles` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Profile {
    pub id: DbId,
    pub age: i32,
    pub bio: String,
    pub student_id: DbId,
}

/// DTO for creating a new profile.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProfile {
    pub age: i32,
    pub bio: String,
    pub student_id: DbId,
}

/// DTO for updating an existing profile. The owning student is immutable.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UpdateProfile {
    pub age: Option<i32>,
    pub bio: Option<String>,
}

/// The serialized form of a profile: the student side of the relationship
/// is reduced to the `student_id` scalar.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ProfileSummary {
    pub age: i32,
    pub bio: String,
    pub student_id: DbId,
}

impl From<Profile> for ProfileSummary {
    fn from(profile: Profile) -> Self {
        ProfileSummary {
            age: profile.age,
            bio: profile.bio,
            student_id: profile.student_id,
        }
    }
}
