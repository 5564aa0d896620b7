//! Row structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the table row
//! - A create DTO with required fields already resolved
//! - A `Deserialize` update DTO (all `Option` fields)

pub mod chapter;
pub mod character;
pub mod note;
pub mod novel;
pub mod setting;
pub mod user;
