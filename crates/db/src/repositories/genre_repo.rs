//! Repository for the `genres` reference table.
//!
//! Translates between genre names and genre ids. Every name comparison is
//! made against `LOWER(name)`, which is backed by the unique
//! `uq_genres_name_lower` index.

use std::collections::HashMap;

use movies_core::genre::{normalize_genre_name, normalize_genre_names};
use movies_core::types::{BinaryUuid, DbId};
use sqlx::{PgConnection, PgPool};

use crate::models::genre::Genre;
use crate::repositories::MovieGenreRepo;

/// Column list for the `genres` table.
const COLUMNS: &str = "id, name";

/// Resolves genre names to ids and back.
pub struct GenreRepo;

impl GenreRepo {
    /// List every genre, ordered by name.
    pub async fn list(pool: &PgPool) -> Result<Vec<Genre>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM genres ORDER BY name");
        sqlx::query_as::<_, Genre>(&query).fetch_all(pool).await
    }

    /// Find a genre by case-insensitive name.
    pub async fn find_by_name(pool: &PgPool, name: &str) -> Result<Option<Genre>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM genres WHERE LOWER(name) = LOWER($1)");
        sqlx::query_as::<_, Genre>(&query)
            .bind(normalize_genre_name(name))
            .fetch_optional(pool)
            .await
    }

    /// Resolve a single genre name to its id.
    ///
    /// Returns `None` when no genre matches, ignoring letter case.
    pub async fn resolve_id_by_name(
        conn: &mut PgConnection,
        name: &str,
    ) -> Result<Option<DbId>, sqlx::Error> {
        sqlx::query_scalar("SELECT id FROM genres WHERE LOWER(name) = LOWER($1)")
            .bind(normalize_genre_name(name))
            .fetch_optional(&mut *conn)
            .await
    }

    /// Resolve many genre names in one round trip.
    ///
    /// The returned map is keyed by the names exactly as supplied. Names that
    /// match no genre are absent from the map; genres are never created here.
    pub async fn resolve_ids_by_names(
        conn: &mut PgConnection,
        names: &[String],
    ) -> Result<HashMap<String, DbId>, sqlx::Error> {
        if names.is_empty() {
            return Ok(HashMap::new());
        }

        let normalized = normalize_genre_names(names);
        let rows: Vec<(DbId, String)> =
            sqlx::query_as("SELECT id, LOWER(name) FROM genres WHERE LOWER(name) = ANY($1)")
                .bind(&normalized)
                .fetch_all(&mut *conn)
                .await?;

        let by_lowered: HashMap<String, DbId> =
            rows.into_iter().map(|(id, lowered)| (lowered, id)).collect();

        Ok(names
            .iter()
            .filter_map(|name| {
                by_lowered
                    .get(&normalize_genre_name(name))
                    .map(|&id| (name.clone(), id))
            })
            .collect())
    }

    /// Names of the genres associated with a movie.
    ///
    /// A movie with no genres, or no movie at all, yields an empty list.
    pub async fn names_for_movie(
        conn: &mut PgConnection,
        movie_id: &BinaryUuid,
    ) -> Result<Vec<String>, sqlx::Error> {
        sqlx::query_scalar(
            "SELECT g.name \
             FROM genres g \
             JOIN movie_genres mg ON mg.genre_id = g.id \
             WHERE mg.movie_id = $1",
        )
        .bind(movie_id.as_slice())
        .fetch_all(&mut *conn)
        .await
    }

    /// Ids of all movies associated with the named genre.
    ///
    /// An unknown genre and a genre without movies both yield an empty list.
    pub async fn movie_ids_for_genre_name(
        conn: &mut PgConnection,
        name: &str,
    ) -> Result<Vec<BinaryUuid>, sqlx::Error> {
        match Self::resolve_id_by_name(conn, name).await? {
            Some(genre_id) => MovieGenreRepo::movie_ids_for_genre(conn, genre_id).await,
            None => {
                tracing::debug!(genre = name, "Genre filter matched no genre");
                Ok(Vec::new())
            }
        }
    }
}
