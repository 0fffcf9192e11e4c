//! Mock vote endpoint for testing and local development.
//!
//! The `MockVoteEndpoint` keeps scores in memory, records every delta it
//! applies, and can be told to fail specific calls or to hold calls until
//! released, so tests can observe partial plans and in-flight actions.
//!
//! # Example
//!
//! ```ignore
//! let endpoint = MockVoteEndpoint::new();
//! endpoint.set_score(EntityKey::deal(1), 5);
//! endpoint.fail_call(1);
//! ```

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use deal_votes_shared::types::{DeltaOp, EntityKey};
use tokio::sync::Semaphore;

use crate::errors::EndpointError;
use crate::remote::VoteEndpoint;

#[derive(Debug, Default)]
struct MockState {
    scores: HashMap<EntityKey, i64>,
    applied: Vec<(EntityKey, DeltaOp)>,
    failing_calls: HashSet<usize>,
    malformed_calls: HashSet<usize>,
    attempts: usize,
}

/// In-memory vote endpoint.
///
/// Unknown entities are rejected with `NotFound`, like the real API answers 404.
#[derive(Debug, Default)]
pub struct MockVoteEndpoint {
    state: Mutex<MockState>,
    gate: Option<Arc<Semaphore>>,
}

impl MockVoteEndpoint {
    /// Create a new endpoint with no known entities.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an endpoint pre-populated with the given scores.
    pub fn with_scores(scores: HashMap<EntityKey, i64>) -> Self {
        let endpoint = Self::new();
        for (key, score) in scores {
            endpoint.set_score(key, score);
        }
        endpoint
    }

    /// Create an endpoint whose calls block until [`MockVoteEndpoint::release`]
    /// hands out permits, one per call.
    pub fn gated() -> Self {
        Self {
            state: Mutex::new(MockState::default()),
            gate: Some(Arc::new(Semaphore::new(0))),
        }
    }

    /// Lets `calls` blocked or future calls through the gate.
    pub fn release(&self, calls: usize) {
        if let Some(gate) = &self.gate {
            gate.add_permits(calls);
        }
    }

    pub fn set_score(&self, key: EntityKey, score: i64) {
        self.lock().scores.insert(key, score);
    }

    pub fn score(&self, key: &EntityKey) -> Option<i64> {
        self.lock().scores.get(key).copied()
    }

    /// Makes the call with the given zero-based index fail with a network error.
    /// Indices count every call ever made to this endpoint.
    pub fn fail_call(&self, call_index: usize) {
        self.lock().failing_calls.insert(call_index);
    }

    /// Makes the call with the given zero-based index answer without a score.
    pub fn malformed_call(&self, call_index: usize) {
        self.lock().malformed_calls.insert(call_index);
    }

    /// Number of calls received so far, including failed ones.
    pub fn attempts(&self) -> usize {
        self.lock().attempts
    }

    /// Signed values of the deltas applied to `key`, in order.
    pub fn deltas_for(&self, key: &EntityKey) -> Vec<i32> {
        self.lock()
            .applied
            .iter()
            .filter(|(k, _)| k == key)
            .map(|(_, op)| op.value())
            .collect()
    }

    fn lock(&self) -> MutexGuard<'_, MockState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl VoteEndpoint for MockVoteEndpoint {
    async fn apply_delta(&self, key: &EntityKey, op: DeltaOp) -> Result<i64, EndpointError> {
        let call_index = {
            let mut state = self.lock();
            state.attempts += 1;
            state.attempts - 1
        };

        if let Some(gate) = &self.gate {
            gate.acquire()
                .await
                .map_err(|e| EndpointError::network(e.to_string()))?
                .forget();
        }

        let mut state = self.lock();
        if state.failing_calls.contains(&call_index) {
            return Err(EndpointError::network(format!("injected failure on call {call_index}")));
        }
        if state.malformed_calls.contains(&call_index) {
            return Err(EndpointError::malformed("missing vote_score"));
        }

        let score = state
            .scores
            .get_mut(key)
            .ok_or_else(|| EndpointError::NotFound(key.to_string()))?;
        *score += i64::from(op.value());
        let score = *score;
        state.applied.push((*key, op));
        Ok(score)
    }
}
