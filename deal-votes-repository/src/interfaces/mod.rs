//! This module defines and re-exports the interfaces of the vote store.
mod vote_store;

pub use vote_store::VoteStore;
