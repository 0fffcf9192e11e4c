//! # Deal Votes Repository
//! This crate provides the `VoteStore` port through which the client records its
//! own vote per entity, plus an in-memory implementation for tests and a SQLite
//! implementation that survives restarts.
pub mod errors;
pub mod interfaces;
pub mod memory;
pub mod sqlite;

pub use errors::VoteStoreError;
pub use interfaces::VoteStore;
pub use memory::MemoryVoteStore;
pub use sqlite::SqliteVoteStore;
