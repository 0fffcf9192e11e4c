//! Error types for the vote store.
mod vote_store;

pub use vote_store::VoteStoreError;
