//! SQLite implementation of the local vote store.
//!
//! Persists one row per voted entity in the `vote_records` table so the client
//! remembers its votes across restarts.
mod vote_store;

pub use vote_store::SqliteVoteStore;
