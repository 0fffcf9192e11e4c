//! # Deal Votes Pipeline
//! This crate turns a user's vote click into remote score changes.
//! It includes the transition planner, the remote vote endpoint and the
//! sequencer that drives it, and the vote controller that ties both to the local
//! vote store, along with error handling.
pub mod controller;
pub mod planner;
pub mod remote;

pub mod errors;
