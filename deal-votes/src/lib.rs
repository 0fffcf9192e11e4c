//! Deal Votes Library
//!
//! This library wires the vote controller to its environment: configuration
//! from env vars, construction of the local vote store and the remote endpoint,
//! logging setup, and the command-line surface.

pub mod cli;
pub mod config;
pub mod errors;

pub use config::{Config, Dependencies};
pub use errors::AppError;
