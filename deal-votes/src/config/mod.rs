//! Configuration module for Deal Votes.
//! Reads settings from the environment and builds the application dependencies.
mod dependencies;
mod settings;

pub use dependencies::Dependencies;
pub use settings::{ApiTarget, Config, LogFormat, StoreTarget};
