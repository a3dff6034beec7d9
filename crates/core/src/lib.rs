//! Storage-agnostic building blocks for the movie catalog.
//!
//! - [`uuid_codec`] converts movie identifiers between their canonical text
//!   form and the 16-byte form used for storage and indexing.
//! - [`genre`] normalizes genre names before they are bound as parameters.
//! - [`error::CoreError`] is the error raised by both.

pub mod error;
pub mod genre;
pub mod types;
pub mod uuid_codec;
