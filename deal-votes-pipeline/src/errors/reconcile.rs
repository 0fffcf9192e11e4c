//! Error types for the reconciler that executes vote plans.
use deal_votes_shared::types::{DeltaOp, EntityKey};
use thiserror::Error;

use crate::errors::EndpointError;

/// Represents the ways executing a vote plan against the remote can fail.
#[derive(Debug, Error)]
pub enum ReconcileError {
    #[error("Empty vote plan for {0}")]
    EmptyPlan(EntityKey),

    #[error("Delta {failed_op} on {key} failed after {committed} of {planned} operations: {source}")]
    OperationFailed {
        key: EntityKey,
        committed: usize,
        planned: usize,
        failed_op: DeltaOp,
        #[source]
        source: EndpointError,
    },
}

impl ReconcileError {
    /// Number of operations the remote already applied before the failure.
    ///
    /// Non-zero only when a multi-step plan fails part way through.
    pub fn committed(&self) -> usize {
        match self {
            ReconcileError::EmptyPlan(_) => 0,
            ReconcileError::OperationFailed { committed, .. } => *committed,
        }
    }
}
