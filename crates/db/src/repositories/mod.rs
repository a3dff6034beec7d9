//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods. Public
//! entry points accept `&PgPool` as the first argument; helpers that must
//! compose inside a caller's transaction accept `&mut PgConnection`.

pub mod genre_repo;
pub mod movie_genre_repo;
pub mod movie_repo;

pub use genre_repo::GenreRepo;
pub use movie_genre_repo::MovieGenreRepo;
pub use movie_repo::MovieRepo;
