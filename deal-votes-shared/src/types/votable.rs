use serde::{Deserialize, Serialize};

use crate::types::{EntityKey, EntityKind};

/// Capability shared by every entity the client can vote on.
///
/// Vote logic only needs the entity's key and its score; the kind inside the key
/// picks the remote endpoint.
pub trait Votable {
    fn key(&self) -> EntityKey;
    fn score(&self) -> i64;
    fn set_score(&mut self, score: i64);
}

/// A deal as returned by the deals API.
///
/// The enriched listing exposes the aggregate as `vote_count` while the vote
/// endpoint returns `vote_score`; both deserialize into `vote_score`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Deal {
    pub id: i64,
    #[serde(default)]
    pub deal_description: String,
    #[serde(alias = "vote_count")]
    pub vote_score: i64,
}

/// A comment attached to a deal or a business.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Comment {
    pub id: i64,
    #[serde(default)]
    pub deal_id: Option<i64>,
    #[serde(default, alias = "comment_text")]
    pub text: String,
    #[serde(alias = "vote_count")]
    pub vote_score: i64,
}

/// A business listing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Business {
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(alias = "vote_count")]
    pub vote_score: i64,
}

macro_rules! impl_votable {
    ($ty:ty, $kind:expr) => {
        impl Votable for $ty {
            fn key(&self) -> EntityKey {
                EntityKey::new($kind, self.id)
            }

            fn score(&self) -> i64 {
                self.vote_score
            }

            fn set_score(&mut self, score: i64) {
                self.vote_score = score;
            }
        }
    };
}

impl_votable!(Deal, EntityKind::Deal);
impl_votable!(Comment, EntityKind::Comment);
impl_votable!(Business, EntityKind::Business);
