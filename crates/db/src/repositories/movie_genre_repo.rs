//! Repository for the `movie_genres` junction table.
//!
//! Owns the association rows between movies and genres. Genre rows are only
//! ever read here; a movie's genre set is always replaced wholesale.

use std::collections::BTreeSet;

use movies_core::types::{BinaryUuid, DbId};
use movies_core::uuid_codec;
use sqlx::{PgConnection, PgPool};

use crate::repositories::GenreRepo;

/// Maintains movie/genre associations.
pub struct MovieGenreRepo;

impl MovieGenreRepo {
    /// Replace all genre associations for a movie in a transaction of its own.
    ///
    /// Returns the number of associations written.
    pub async fn replace_genres(
        pool: &PgPool,
        movie_id: &BinaryUuid,
        genre_names: &[String],
    ) -> Result<usize, sqlx::Error> {
        let mut tx = pool.begin().await?;
        let written = Self::replace_genres_in(&mut tx, movie_id, genre_names).await?;
        tx.commit().await?;
        Ok(written)
    }

    /// Replace all genre associations for a movie on the given connection.
    ///
    /// Deletes the existing rows, then inserts one row per distinct genre the
    /// names resolve to. Unresolved names are skipped. Callers that need the
    /// delete and insert to be atomic pass an open transaction.
    ///
    /// The movie row is locked first, so concurrent replacements for the same
    /// movie serialize and the last one to commit wins.
    pub async fn replace_genres_in(
        conn: &mut PgConnection,
        movie_id: &BinaryUuid,
        genre_names: &[String],
    ) -> Result<usize, sqlx::Error> {
        sqlx::query("SELECT 1 FROM movies WHERE id = $1 FOR UPDATE")
            .bind(movie_id.as_slice())
            .fetch_optional(&mut *conn)
            .await?;

        Self::delete_all_for_movie(conn, movie_id).await?;

        let resolved = GenreRepo::resolve_ids_by_names(conn, genre_names).await?;
        let unresolved: Vec<&str> = genre_names
            .iter()
            .filter(|name| !resolved.contains_key(*name))
            .map(String::as_str)
            .collect();
        if !unresolved.is_empty() {
            tracing::warn!(
                movie_id = %uuid_codec::decode(movie_id),
                ?unresolved,
                "Skipping unknown genres"
            );
        }

        let genre_ids: BTreeSet<DbId> = resolved.into_values().collect();
        for &genre_id in &genre_ids {
            sqlx::query(
                "INSERT INTO movie_genres (movie_id, genre_id) VALUES ($1, $2) \
                 ON CONFLICT DO NOTHING",
            )
            .bind(movie_id.as_slice())
            .bind(genre_id)
            .execute(&mut *conn)
            .await?;
        }

        Ok(genre_ids.len())
    }

    /// Delete every association for a movie.
    ///
    /// Returns the number of rows removed; a movie without genres yields `0`.
    pub async fn delete_all_for_movie(
        conn: &mut PgConnection,
        movie_id: &BinaryUuid,
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM movie_genres WHERE movie_id = $1")
            .bind(movie_id.as_slice())
            .execute(&mut *conn)
            .await?;
        Ok(result.rows_affected())
    }

    /// Ids of the genres associated with a movie, ascending.
    pub async fn genre_ids_for_movie(
        conn: &mut PgConnection,
        movie_id: &BinaryUuid,
    ) -> Result<Vec<DbId>, sqlx::Error> {
        sqlx::query_scalar(
            "SELECT genre_id FROM movie_genres WHERE movie_id = $1 ORDER BY genre_id",
        )
        .bind(movie_id.as_slice())
        .fetch_all(&mut *conn)
        .await
    }

    /// Ids of the movies associated with a genre.
    pub async fn movie_ids_for_genre(
        conn: &mut PgConnection,
        genre_id: DbId,
    ) -> Result<Vec<BinaryUuid>, sqlx::Error> {
        let ids: Vec<Vec<u8>> =
            sqlx::query_scalar("SELECT movie_id FROM movie_genres WHERE genre_id = $1")
                .bind(genre_id)
                .fetch_all(&mut *conn)
                .await?;

        ids.iter()
            .map(|id| uuid_codec::to_binary(id).map_err(|e| sqlx::Error::Decode(Box::new(e))))
            .collect()
    }
}
