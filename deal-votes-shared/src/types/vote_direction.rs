use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::types::ParseTypeError;

/// The vote a client currently holds on an entity.
///
/// `None` is never persisted. A store reports it when no record exists for a key.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum VoteDirection {
    /// No vote recorded.
    #[default]
    None,
    /// An upvote.
    Up,
    /// A downvote.
    Down,
}

impl VoteDirection {
    /// Returns the literal token stored for this direction, or `None` for the
    /// absence of a vote.
    pub fn token(self) -> Option<&'static str> {
        match self {
            VoteDirection::Up => Some("up"),
            VoteDirection::Down => Some("down"),
            VoteDirection::None => None,
        }
    }

    /// Reads a stored token back. Anything other than `up` or `down` is
    /// treated as no vote.
    pub fn from_token(token: &str) -> Self {
        match token {
            "up" => VoteDirection::Up,
            "down" => VoteDirection::Down,
            _ => VoteDirection::None,
        }
    }

    pub fn is_none(self) -> bool {
        self == VoteDirection::None
    }
}

impl fmt::Display for VoteDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token().unwrap_or("none"))
    }
}

/// The direction a user asks for when clicking a vote control.
///
/// Unlike [`VoteDirection`] a request always names a direction.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum VoteChoice {
    Up,
    Down,
}

impl From<VoteChoice> for VoteDirection {
    fn from(choice: VoteChoice) -> Self {
        match choice {
            VoteChoice::Up => VoteDirection::Up,
            VoteChoice::Down => VoteDirection::Down,
        }
    }
}

impl FromStr for VoteChoice {
    type Err = ParseTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "up" | "upvote" => Ok(VoteChoice::Up),
            "down" | "downvote" => Ok(VoteChoice::Down),
            _ => Err(ParseTypeError::UnknownVoteChoice(s.to_string())),
        }
    }
}

impl fmt::Display for VoteChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        VoteDirection::from(*self).fmt(f)
    }
}
