//! In-memory vote store.
//!
//! Records live for the lifetime of the process only. Used by tests and by
//! local runs configured with `VOTE_STORE_URL=memory`.
use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use deal_votes_shared::types::{EntityKey, VoteDirection};

use crate::{VoteStore, VoteStoreError};

/// Vote store backed by a map of storage key to direction token.
#[derive(Debug, Default)]
pub struct MemoryVoteStore {
    records: RwLock<HashMap<String, String>>,
}

impl MemoryVoteStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with the given records.
    pub fn with_records(records: impl IntoIterator<Item = (EntityKey, VoteDirection)>) -> Self {
        let store = Self::new();
        if let Ok(mut map) = store.records.write() {
            for (key, direction) in records {
                if let Some(token) = direction.token() {
                    map.insert(key.storage_key(), token.to_string());
                }
            }
        }
        store
    }

    /// Stores a raw token under a raw key, bypassing validation.
    ///
    /// Lets tests reproduce records written by older or foreign clients.
    pub fn insert_raw(&self, storage_key: &str, token: &str) -> Result<(), VoteStoreError> {
        self.records
            .write()
            .map_err(|_| VoteStoreError::LockPoisoned)?
            .insert(storage_key.to_string(), token.to_string());
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.records.read().map(|r| r.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl VoteStore for MemoryVoteStore {
    async fn get(&self, key: &EntityKey) -> Result<VoteDirection, VoteStoreError> {
        let records = self.records.read().map_err(|_| VoteStoreError::LockPoisoned)?;
        Ok(records
            .get(&key.storage_key())
            .map(|token| VoteDirection::from_token(token))
            .unwrap_or_default())
    }

    async fn set(&self, key: &EntityKey, direction: VoteDirection) -> Result<(), VoteStoreError> {
        let Some(token) = direction.token() else {
            return self.clear(key).await;
        };
        self.records
            .write()
            .map_err(|_| VoteStoreError::LockPoisoned)?
            .insert(key.storage_key(), token.to_string());
        Ok(())
    }

    async fn clear(&self, key: &EntityKey) -> Result<(), VoteStoreError> {
        self.records
            .write()
            .map_err(|_| VoteStoreError::LockPoisoned)?
            .remove(&key.storage_key());
        Ok(())
    }
}
