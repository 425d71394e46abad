//! Request handlers, one submodule per resource.
//!
//! Each submodule provides async handler functions (list, get_by_id,
//! create, update, delete as applicable) for a single entity type.
//! Handlers validate preconditions inline before any write, delegate to
//! the corresponding repository in `registrar_db`, and map errors via
//! [`crate::error::AppError`].

pub mod course;
pub mod enrollment;
pub mod instructor;
pub mod profile;
pub mod student;
