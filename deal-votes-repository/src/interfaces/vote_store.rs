//! This module defines the `VoteStore` trait, the port through which the client
//! persists the direction of its own vote on each entity.
//! The store is a client-side guard against double voting and never an authority
//! over the aggregate score.
use std::collections::HashMap;

use deal_votes_shared::types::{EntityKey, VoteDirection};

use crate::errors::VoteStoreError;

/// A trait that defines the interface of the local vote store.
///
/// At most one record exists per entity key. `VoteDirection::None` is never
/// persisted: it is what `get` reports for a key without a record.
#[async_trait::async_trait]
pub trait VoteStore: Send + Sync {
    /// Returns the recorded direction for `key`, or `VoteDirection::None` if the
    /// client has not voted on it.
    async fn get(&self, key: &EntityKey) -> Result<VoteDirection, VoteStoreError>;

    /// Overwrites the record for `key`.
    ///
    /// Setting `VoteDirection::None` removes the record, like [`VoteStore::clear`].
    async fn set(&self, key: &EntityKey, direction: VoteDirection) -> Result<(), VoteStoreError>;

    /// Removes the record for `key`. Clearing a missing key is not an error.
    async fn clear(&self, key: &EntityKey) -> Result<(), VoteStoreError>;

    /// Returns the recorded direction of every key in `keys`.
    ///
    /// Keys without a record map to `VoteDirection::None`. Used to restore vote
    /// state for a whole page of entities at once.
    async fn get_many(
        &self,
        keys: &[EntityKey],
    ) -> Result<HashMap<EntityKey, VoteDirection>, VoteStoreError> {
        let mut directions = HashMap::with_capacity(keys.len());
        for key in keys {
            directions.insert(*key, self.get(key).await?);
        }
        Ok(directions)
    }
}
