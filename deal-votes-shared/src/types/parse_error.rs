use thiserror::Error;

/// Returned when a textual token cannot be parsed into one of the shared types.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParseTypeError {
    #[error("Unknown entity kind: {0}")]
    UnknownEntityKind(String),

    #[error("Unknown vote direction: {0}")]
    UnknownVoteChoice(String),
}
