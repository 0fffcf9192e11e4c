//! # Deal Votes Shared
//! This crate defines the data structures shared across the vote tracking crates.
//! It includes vote directions, entity keys, delta operations, vote plans, and the
//! votable entities whose scores the remote service owns.
pub mod types;
