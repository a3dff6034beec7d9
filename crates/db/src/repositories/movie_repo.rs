//! Repository for the `movies` table.
//!
//! The public surface of the catalog. Identifiers arrive and leave as text
//! and are converted with [`uuid_codec`] at this boundary; genre reads and
//! writes are delegated to [`GenreRepo`] and [`MovieGenreRepo`].

use movies_core::types::BinaryUuid;
use movies_core::uuid_codec;
use sqlx::{PgConnection, PgPool};

use crate::error::{CatalogError, CatalogResult};
use crate::models::movie::{CreateMovie, Movie, MovieFilter, MovieRow, UpdateMovie};
use crate::repositories::{GenreRepo, MovieGenreRepo};

/// Column list for the `movies` table.
const COLUMNS: &str = "id, title, year, director, duration, poster, rate";

/// Provides CRUD operations for movies and their genre sets.
pub struct MovieRepo;

impl MovieRepo {
    /// List movies with their genre names attached.
    ///
    /// With a genre filter, only movies in that genre (matched ignoring case)
    /// are returned; an unknown genre yields an empty list. Order is whatever
    /// storage returns.
    pub async fn list(pool: &PgPool, filter: &MovieFilter) -> CatalogResult<Vec<Movie>> {
        let mut conn = pool.acquire().await?;

        let rows = match filter.genre.as_deref() {
            None => {
                let query = format!("SELECT {COLUMNS} FROM movies");
                sqlx::query_as::<_, MovieRow>(&query)
                    .fetch_all(&mut *conn)
                    .await?
            }
            Some(genre) => {
                let ids = GenreRepo::movie_ids_for_genre_name(&mut conn, genre).await?;
                if ids.is_empty() {
                    return Ok(Vec::new());
                }
                let ids: Vec<Vec<u8>> = ids.iter().map(|id| id.to_vec()).collect();
                let query = format!("SELECT {COLUMNS} FROM movies WHERE id = ANY($1)");
                sqlx::query_as::<_, MovieRow>(&query)
                    .bind(&ids)
                    .fetch_all(&mut *conn)
                    .await?
            }
        };

        let movies = Self::attach_genres(&mut conn, rows).await?;
        tracing::debug!(count = movies.len(), genre = ?filter.genre, "Listed movies");
        Ok(movies)
    }

    /// Find a movie by its textual identifier.
    ///
    /// Returns `None` if no movie has that identifier.
    pub async fn find_by_id(pool: &PgPool, id: &str) -> CatalogResult<Option<Movie>> {
        let key = uuid_codec::encode(id)?;
        let mut conn = pool.acquire().await?;

        let Some(row) = Self::fetch_row(&mut conn, &key).await? else {
            return Ok(None);
        };
        let genre = GenreRepo::names_for_movie(&mut conn, &key).await?;
        Ok(Some(row.into_movie(genre)?))
    }

    /// Whether a movie with the given identifier exists.
    pub async fn exists(pool: &PgPool, id: &str) -> CatalogResult<bool> {
        let key = uuid_codec::encode(id)?;
        let found: bool = sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM movies WHERE id = $1)")
            .bind(key.as_slice())
            .fetch_one(pool)
            .await?;
        Ok(found)
    }

    /// Insert a new movie under a freshly generated identifier and associate
    /// its genres, in one transaction.
    ///
    /// The returned record lists the genres as supplied, including any that
    /// did not resolve. Every failure is reported as
    /// [`CatalogError::CreationFailed`].
    pub async fn create(pool: &PgPool, input: &CreateMovie) -> CatalogResult<Movie> {
        let key = uuid_codec::generate();
        let row = Self::insert_with_genres(pool, &key, input)
            .await
            .map_err(CatalogError::creation_failed)?;

        let movie = row.into_movie(input.genre.clone())?;
        tracing::info!(id = %movie.id, title = %movie.title, "Movie created");
        Ok(movie)
    }

    /// Apply a partial update. Only `Some` fields are changed.
    ///
    /// If `genre` is `Some`, the movie's genre set is replaced in the same
    /// transaction and the returned record lists it as supplied; otherwise
    /// the record carries the movie's current genres.
    /// Returns `None` if no movie has that identifier.
    pub async fn update(
        pool: &PgPool,
        id: &str,
        input: &UpdateMovie,
    ) -> CatalogResult<Option<Movie>> {
        let key = uuid_codec::encode(id)?;
        let mut tx = pool.begin().await?;

        let query = format!(
            "UPDATE movies SET \
                title = COALESCE($2, title), \
                year = COALESCE($3, year), \
                director = COALESCE($4, director), \
                duration = COALESCE($5, duration), \
                poster = COALESCE($6, poster), \
                rate = COALESCE($7, rate), \
                updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        let row = sqlx::query_as::<_, MovieRow>(&query)
            .bind(key.as_slice())
            .bind(&input.title)
            .bind(input.year)
            .bind(&input.director)
            .bind(input.duration)
            .bind(&input.poster)
            .bind(input.rate)
            .fetch_optional(&mut *tx)
            .await?;

        let Some(row) = row else {
            return Ok(None);
        };

        let genre = match &input.genre {
            Some(names) => {
                MovieGenreRepo::replace_genres_in(&mut tx, &key, names).await?;
                names.clone()
            }
            None => GenreRepo::names_for_movie(&mut tx, &key).await?,
        };

        tx.commit().await?;

        let movie = row.into_movie(genre)?;
        tracing::info!(id = %movie.id, genres_replaced = input.genre.is_some(), "Movie updated");
        Ok(Some(movie))
    }

    /// Delete a movie together with its genre associations.
    ///
    /// Returns `true` if a movie was removed, `false` if none existed.
    pub async fn delete(pool: &PgPool, id: &str) -> CatalogResult<bool> {
        let key = uuid_codec::encode(id)?;
        let mut tx = pool.begin().await?;

        MovieGenreRepo::delete_all_for_movie(&mut tx, &key).await?;
        let result = sqlx::query("DELETE FROM movies WHERE id = $1")
            .bind(key.as_slice())
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        let deleted = result.rows_affected() > 0;
        if deleted {
            tracing::info!(id, "Movie deleted");
        }
        Ok(deleted)
    }

    // -----------------------------------------------------------------------
    // Internal helpers
    // -----------------------------------------------------------------------

    async fn fetch_row(
        conn: &mut PgConnection,
        key: &BinaryUuid,
    ) -> Result<Option<MovieRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM movies WHERE id = $1");
        sqlx::query_as::<_, MovieRow>(&query)
            .bind(key.as_slice())
            .fetch_optional(&mut *conn)
            .await
    }

    /// Look up genre names for each row, keeping rows in their fetched order.
    async fn attach_genres(
        conn: &mut PgConnection,
        rows: Vec<MovieRow>,
    ) -> CatalogResult<Vec<Movie>> {
        let mut movies = Vec::with_capacity(rows.len());
        for row in rows {
            let key = uuid_codec::to_binary(&row.id)?;
            let genre = GenreRepo::names_for_movie(conn, &key).await?;
            movies.push(row.into_movie(genre)?);
        }
        Ok(movies)
    }

    async fn insert_with_genres(
        pool: &PgPool,
        key: &BinaryUuid,
        input: &CreateMovie,
    ) -> Result<MovieRow, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "INSERT INTO movies (id, title, year, director, duration, poster, rate) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) \
             RETURNING {COLUMNS}"
        );
        let row = sqlx::query_as::<_, MovieRow>(&query)
            .bind(key.as_slice())
            .bind(&input.title)
            .bind(input.year)
            .bind(&input.director)
            .bind(input.duration)
            .bind(&input.poster)
            .bind(input.rate)
            .fetch_one(&mut *tx)
            .await?;

        MovieGenreRepo::replace_genres_in(&mut tx, key, &input.genre).await?;

        tx.commit().await?;
        Ok(row)
    }
}
