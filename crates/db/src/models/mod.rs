//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` struct matching the database row
//! - The plain record handed to callers
//! - `Deserialize` create/update DTOs where the entity is writable

pub mod genre;
pub mod movie;
