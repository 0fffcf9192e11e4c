use serde::{Deserialize, Serialize};

use crate::types::{EntityKey, VoteDirection};

/// Result of a successful vote action.
///
/// `score` is the aggregate reported by the remote after the last operation;
/// `direction` is what is now recorded locally for `key`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScoreUpdate {
    pub key: EntityKey,
    pub score: i64,
    pub direction: VoteDirection,
}
