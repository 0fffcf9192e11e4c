//! Error types for the local vote store.
use thiserror::Error;

/// Represents errors that can occur while reading or writing local vote records.
#[derive(Debug, Error)]
pub enum VoteStoreError {
    #[error("Database error: {0}")]
    DatabaseError(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    MigrationError(#[from] sqlx::migrate::MigrateError),

    #[error("Store lock poisoned")]
    LockPoisoned,
}
