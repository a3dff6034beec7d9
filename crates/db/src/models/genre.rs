//! Genre reference model.
//!
//! Genres are seeded by migration and never written by the catalog; they are
//! only resolved by name and joined to movies through `movie_genres`.

use movies_core::types::DbId;
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `genres` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Genre {
    pub id: DbId,
    pub name: String,
}
