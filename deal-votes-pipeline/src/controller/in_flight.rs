use std::collections::HashSet;
use std::sync::{Arc, Mutex, PoisonError};

use deal_votes_shared::types::EntityKey;

/// Set of entity keys with a vote action in progress.
#[derive(Debug, Clone, Default)]
pub(crate) struct InFlight {
    keys: Arc<Mutex<HashSet<EntityKey>>>,
}

impl InFlight {
    /// Marks `key` as busy. Returns `None` if it already is.
    pub(crate) fn try_acquire(&self, key: EntityKey) -> Option<InFlightGuard> {
        let mut keys = self.keys.lock().unwrap_or_else(PoisonError::into_inner);
        keys.insert(key).then(|| InFlightGuard {
            keys: self.keys.clone(),
            key,
        })
    }

    pub(crate) fn contains(&self, key: &EntityKey) -> bool {
        self.keys
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .contains(key)
    }
}

/// Releases its key when dropped.
#[derive(Debug)]
pub(crate) struct InFlightGuard {
    keys: Arc<Mutex<HashSet<EntityKey>>>,
    key: EntityKey,
}

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        self.keys
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(&self.key);
    }
}
