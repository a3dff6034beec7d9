//! Movie entity model and DTOs.
//!
//! Rows carry the identifier in its 16-byte storage form; [`Movie`] is the
//! record handed to callers, with the identifier as text and the movie's
//! genre names attached.

use movies_core::error::CoreError;
use movies_core::uuid_codec;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `movies` table.
#[derive(Debug, Clone, FromRow)]
pub struct MovieRow {
    pub id: Vec<u8>,
    pub title: String,
    pub year: i32,
    pub director: String,
    pub duration: i32,
    pub poster: String,
    pub rate: f64,
}

impl MovieRow {
    /// Convert into a caller-facing record with the given genre names.
    pub fn into_movie(self, genre: Vec<String>) -> Result<Movie, CoreError> {
        Ok(Movie {
            id: uuid_codec::decode_slice(&self.id)?,
            title: self.title,
            year: self.year,
            director: self.director,
            duration: self.duration,
            poster: self.poster,
            rate: self.rate,
            genre,
        })
    }
}

/// A movie as seen outside the storage layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Movie {
    /// Lowercase hyphenated UUID.
    pub id: String,
    pub title: String,
    pub year: i32,
    pub director: String,
    /// Running time in minutes.
    pub duration: i32,
    /// Poster image URL.
    pub poster: String,
    pub rate: f64,
    /// Genre names, unordered.
    pub genre: Vec<String>,
}

/// DTO for creating a new movie.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateMovie {
    pub title: String,
    pub year: i32,
    pub director: String,
    pub duration: i32,
    pub rate: f64,
    pub poster: String,
    /// Genre names to associate. Names that match no genre are dropped.
    #[serde(default)]
    pub genre: Vec<String>,
}

/// DTO for a partial movie update. Only `Some` fields are applied.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateMovie {
    pub title: Option<String>,
    pub year: Option<i32>,
    pub director: Option<String>,
    pub duration: Option<i32>,
    pub rate: Option<f64>,
    pub poster: Option<String>,
    /// If `Some`, replaces all genre associations (an empty list clears them).
    /// If `None`, leaves them unchanged.
    pub genre: Option<Vec<String>>,
}

/// Filter for listing movies.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MovieFilter {
    /// Case-insensitive genre name.
    pub genre: Option<String>,
}
