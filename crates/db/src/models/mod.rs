//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - A `Deserialize` update DTO (all `Option` fields) for partial updates
//! - View structs implementing the response serialization contract: nested
//!   relationships are expanded one level with back-references reduced to
//!   scalar ids, so no payload can re-enter the entity being serialized

pub mod course;
pub mod enrollment;
pub mod instructor;
pub mod profile;
pub mod student;
