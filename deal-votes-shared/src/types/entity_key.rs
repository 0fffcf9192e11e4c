use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::types::ParseTypeError;

/// Prefix of every locally persisted vote key.
pub const VOTE_KEY_PREFIX: &str = "voted_";

/// The votable collection an identifier belongs to.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Deal,
    Comment,
    Business,
}

impl EntityKind {
    /// Path segment of the remote collection, e.g. `deals` in `/deals/{id}/vote`.
    pub fn collection(self) -> &'static str {
        match self {
            EntityKind::Deal => "deals",
            EntityKind::Comment => "comments",
            EntityKind::Business => "businesses",
        }
    }

    /// Segment used inside the persisted vote key.
    pub fn key_segment(self) -> &'static str {
        match self {
            EntityKind::Deal => "deal",
            EntityKind::Comment => "comment",
            EntityKind::Business => "business",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key_segment())
    }
}

impl FromStr for EntityKind {
    type Err = ParseTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "deal" | "deals" => Ok(EntityKind::Deal),
            "comment" | "comments" => Ok(EntityKind::Comment),
            "business" | "businesses" => Ok(EntityKind::Business),
            _ => Err(ParseTypeError::UnknownEntityKind(s.to_string())),
        }
    }
}

/// Identifies one votable entity: its kind plus its numeric id.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct EntityKey {
    pub kind: EntityKind,
    pub id: i64,
}

impl EntityKey {
    pub fn new(kind: EntityKind, id: i64) -> Self {
        Self { kind, id }
    }

    pub fn deal(id: i64) -> Self {
        Self::new(EntityKind::Deal, id)
    }

    pub fn comment(id: i64) -> Self {
        Self::new(EntityKind::Comment, id)
    }

    pub fn business(id: i64) -> Self {
        Self::new(EntityKind::Business, id)
    }

    /// Renders the key under which the client's vote is persisted,
    /// e.g. `voted_deal_12`.
    pub fn storage_key(&self) -> String {
        format!("{}{}_{}", VOTE_KEY_PREFIX, self.kind.key_segment(), self.id)
    }
}

impl fmt::Display for EntityKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.kind.collection(), self.id)
    }
}
