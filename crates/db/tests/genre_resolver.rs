//! Integration tests for genre resolution.
//!
//! Exercises `GenreRepo` against a real database:
//! - Case-insensitive name lookup
//! - Batch resolution keyed by the supplied names, unknown names dropped
//! - Genre names for a movie (empty when none)
//! - Movie ids for a genre name (empty for unknown and for unused genres)

use movies_core::uuid_codec;
use movies_db::models::movie::CreateMovie;
use movies_db::repositories::{GenreRepo, MovieRepo};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_movie(title: &str, genre: &[&str]) -> CreateMovie {
    CreateMovie {
        title: title.to_string(),
        year: 1999,
        director: "Lana Wachowski".to_string(),
        duration: 136,
        rate: 8.7,
        poster: "https://example.com/poster.jpg".to_string(),
        genre: genre.iter().map(|g| g.to_string()).collect(),
    }
}

fn sorted(mut names: Vec<String>) -> Vec<String> {
    names.sort();
    names
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_resolve_id_by_name_ignores_case(pool: PgPool) {
    let mut conn = pool.acquire().await.unwrap();

    let exact = GenreRepo::resolve_id_by_name(&mut conn, "Sci-Fi")
        .await
        .unwrap()
        .expect("Sci-Fi is seeded");
    let lower = GenreRepo::resolve_id_by_name(&mut conn, "sci-fi")
        .await
        .unwrap();
    let upper = GenreRepo::resolve_id_by_name(&mut conn, "SCI-FI")
        .await
        .unwrap();

    assert_eq!(lower, Some(exact));
    assert_eq!(upper, Some(exact));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_resolve_id_by_name_unknown(pool: PgPool) {
    let mut conn = pool.acquire().await.unwrap();
    let id = GenreRepo::resolve_id_by_name(&mut conn, "Unobtainium")
        .await
        .unwrap();
    assert!(id.is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_resolve_ids_by_names_drops_unknown(pool: PgPool) {
    let mut conn = pool.acquire().await.unwrap();
    let names = vec![
        "action".to_string(),
        "Unobtainium".to_string(),
        "DRAMA".to_string(),
    ];

    let resolved = GenreRepo::resolve_ids_by_names(&mut conn, &names)
        .await
        .unwrap();

    assert_eq!(resolved.len(), 2);
    assert!(resolved.contains_key("action"));
    assert!(resolved.contains_key("DRAMA"));
    assert!(!resolved.contains_key("Unobtainium"));

    let action = GenreRepo::find_by_name(&pool, "Action")
        .await
        .unwrap()
        .expect("Action is seeded");
    assert_eq!(resolved["action"], action.id);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_resolve_ids_by_names_empty_input(pool: PgPool) {
    let mut conn = pool.acquire().await.unwrap();
    let resolved = GenreRepo::resolve_ids_by_names(&mut conn, &[])
        .await
        .unwrap();
    assert!(resolved.is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_and_find_by_name(pool: PgPool) {
    let genres = GenreRepo::list(&pool).await.unwrap();
    assert_eq!(genres.len(), 9);
    let names: Vec<&str> = genres.iter().map(|g| g.name.as_str()).collect();
    assert!(names.contains(&"Sci-Fi"));
    assert!(names.contains(&"Romance"));

    let found = GenreRepo::find_by_name(&pool, "romance")
        .await
        .unwrap()
        .expect("romance should match Romance");
    assert_eq!(found.name, "Romance");

    assert!(GenreRepo::find_by_name(&pool, "Western")
        .await
        .unwrap()
        .is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_names_for_movie(pool: PgPool) {
    let with_genres = MovieRepo::create(&pool, &new_movie("The Matrix", &["Action", "Sci-Fi"]))
        .await
        .unwrap();
    let without_genres = MovieRepo::create(&pool, &new_movie("Untitled", &[]))
        .await
        .unwrap();

    let mut conn = pool.acquire().await.unwrap();

    let key = uuid_codec::encode(&with_genres.id).unwrap();
    let names = GenreRepo::names_for_movie(&mut conn, &key).await.unwrap();
    assert_eq!(sorted(names), vec!["Action", "Sci-Fi"]);

    let key = uuid_codec::encode(&without_genres.id).unwrap();
    let names = GenreRepo::names_for_movie(&mut conn, &key).await.unwrap();
    assert!(names.is_empty());

    // A movie that never existed is not an error either.
    let names = GenreRepo::names_for_movie(&mut conn, &uuid_codec::generate())
        .await
        .unwrap();
    assert!(names.is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_movie_ids_for_genre_name(pool: PgPool) {
    let matrix = MovieRepo::create(&pool, &new_movie("The Matrix", &["Action", "Sci-Fi"]))
        .await
        .unwrap();
    let heat = MovieRepo::create(&pool, &new_movie("Heat", &["Action", "Crime"]))
        .await
        .unwrap();

    let mut conn = pool.acquire().await.unwrap();

    let mut action: Vec<String> = GenreRepo::movie_ids_for_genre_name(&mut conn, "ACTION")
        .await
        .unwrap()
        .iter()
        .map(uuid_codec::decode)
        .collect();
    action.sort();
    let mut expected = vec![matrix.id.clone(), heat.id.clone()];
    expected.sort();
    assert_eq!(action, expected);

    let crime = GenreRepo::movie_ids_for_genre_name(&mut conn, "crime")
        .await
        .unwrap();
    assert_eq!(crime.len(), 1);
    assert_eq!(uuid_codec::decode(&crime[0]), heat.id);

    // Unknown genre and unused genre are indistinguishable here.
    let unknown = GenreRepo::movie_ids_for_genre_name(&mut conn, "Unobtainium")
        .await
        .unwrap();
    let unused = GenreRepo::movie_ids_for_genre_name(&mut conn, "Romance")
        .await
        .unwrap();
    assert!(unknown.is_empty());
    assert!(unused.is_empty());
}
