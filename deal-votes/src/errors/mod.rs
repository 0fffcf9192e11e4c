//! Error types for the Deal Votes application.
//! Consolidates the errors of the store, the remote endpoint, and the vote
//! controller with configuration and startup failures.
use deal_votes_pipeline::errors::{EndpointError, VoteError};
use deal_votes_repository::VoteStoreError;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("Vote store error: {0}")]
    Store(#[from] VoteStoreError),
    #[error("Endpoint error: {0}")]
    Endpoint(#[from] EndpointError),
    #[error("Vote error: {0}")]
    Vote(#[from] VoteError),
}

impl AppError {
    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
