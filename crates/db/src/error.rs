//! Error taxonomy exposed by the repositories.
//!
//! Storage failures are surfaced with a fixed message so that schema names,
//! constraint names and connection details never reach an untrusted caller.
//! The driver error is kept as the [`source`](std::error::Error::source) and
//! logged when it is wrapped.

use movies_core::error::CoreError;

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// A movie identifier is not a well-formed UUID.
    #[error("Invalid identifier: {0}")]
    InvalidIdentifier(String),

    /// Any failure while inserting a movie or its genre associations.
    #[error("Error creating movie")]
    CreationFailed(#[source] sqlx::Error),

    /// The session failed (connectivity, timeout, cancellation, statement error).
    #[error("Storage unavailable")]
    StorageUnavailable(#[source] sqlx::Error),
}

/// Convenience alias for repository return values.
pub type CatalogResult<T> = Result<T, CatalogError>;

impl CatalogError {
    /// Wrap a failure raised while creating a movie.
    pub fn creation_failed(err: sqlx::Error) -> Self {
        tracing::error!(error = %err, "Movie creation failed");
        CatalogError::CreationFailed(err)
    }
}

impl From<CoreError> for CatalogError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::InvalidIdentifier(id) => CatalogError::InvalidIdentifier(id),
        }
    }
}

impl From<sqlx::Error> for CatalogError {
    fn from(err: sqlx::Error) -> Self {
        tracing::error!(error = %err, "Storage error");
        CatalogError::StorageUnavailable(err)
    }
}
