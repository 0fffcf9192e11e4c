//! Remote side of vote reconciliation.
//!
//! This module provides:
//! - [`VoteEndpoint`] trait for applying one delta to a remote aggregate score
//! - [`HttpVoteEndpoint`] production client for the deals API
//! - [`MockVoteEndpoint`] in-memory endpoint for tests and offline runs
//! - [`EndpointSource`] config enum for choosing between the two
//! - [`Reconciler`] which executes a whole vote plan, one delta at a time
//!
//! ## Usage
//!
//! ```ignore
//! use deal_votes_pipeline::remote::{EndpointSource, Reconciler};
//!
//! let endpoint = EndpointSource::live("http://localhost:8000", timeout).into_endpoint()?;
//! let reconciler = Reconciler::new(endpoint.into());
//! let reconciled = reconciler.execute(&EntityKey::deal(4), &plan.ops).await?;
//! ```
mod http;
mod mock;
mod reconciler;

pub use http::HttpVoteEndpoint;
pub use mock::MockVoteEndpoint;
pub use reconciler::{Reconciled, Reconciler};

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use deal_votes_shared::types::{DeltaOp, EntityKey};

use crate::errors::EndpointError;

/// Trait for applying a unit delta to a remote aggregate score.
///
/// The remote owns the score. Implementations return the score the remote
/// reports after applying the delta; callers never compute it themselves.
#[async_trait]
pub trait VoteEndpoint: Send + Sync {
    /// Applies `op` to the score of `key` and returns the updated score.
    async fn apply_delta(&self, key: &EntityKey, op: DeltaOp) -> Result<i64, EndpointError>;
}

/// Configuration for the remote vote endpoint.
///
/// Follows the same mock/live split as the other data sources.
#[derive(Debug, Clone)]
pub enum EndpointSource {
    /// Use an in-memory endpoint seeded with the given scores.
    Mock(HashMap<EntityKey, i64>),

    /// Talk to a live deals API.
    Live {
        /// Base URL of the API, e.g. "http://localhost:8000"
        base_url: String,
        /// Timeout applied to every request
        timeout: Duration,
    },
}

impl EndpointSource {
    pub fn mock(scores: HashMap<EntityKey, i64>) -> Self {
        Self::Mock(scores)
    }

    pub fn live(base_url: impl Into<String>, timeout: Duration) -> Self {
        Self::Live {
            base_url: base_url.into(),
            timeout,
        }
    }

    /// Create the matching `VoteEndpoint` implementation.
    pub fn into_endpoint(self) -> Result<Box<dyn VoteEndpoint>, EndpointError> {
        match self {
            Self::Mock(scores) => Ok(Box::new(MockVoteEndpoint::with_scores(scores))),
            Self::Live { base_url, timeout } => {
                Ok(Box::new(HttpVoteEndpoint::new(&base_url, timeout)?))
            }
        }
    }
}
