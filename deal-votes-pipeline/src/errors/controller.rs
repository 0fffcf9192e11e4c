//! Error types for the vote controller.
use deal_votes_repository::VoteStoreError;
use deal_votes_shared::types::EntityKey;
use thiserror::Error;

use crate::errors::ReconcileError;

/// Notification shown to the user for every failed vote action.
pub const VOTE_FAILED_MESSAGE: &str = "Failed to record vote. Please try again.";

/// Represents errors that can end a vote action.
#[derive(Debug, Error)]
pub enum VoteError {
    #[error("A vote on {0} is already in progress")]
    InFlight(EntityKey),

    #[error("Unknown entity: {0}")]
    UnknownEntity(EntityKey),

    #[error("Vote store error: {0}")]
    Store(#[from] VoteStoreError),

    #[error("Remote error: {0}")]
    Remote(#[from] ReconcileError),

    #[error("Vote task aborted: {0}")]
    Aborted(String),
}

impl VoteError {
    /// Message to surface to the user. The control stays in its previous state,
    /// so a retry is always offered.
    pub fn user_message(&self) -> &'static str {
        VOTE_FAILED_MESSAGE
    }

    /// Remote operations that were applied before the action failed.
    pub fn remote_committed(&self) -> usize {
        match self {
            VoteError::Remote(err) => err.committed(),
            _ => 0,
        }
    }
}
