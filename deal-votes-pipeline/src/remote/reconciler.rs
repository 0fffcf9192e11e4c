use std::sync::Arc;

use deal_votes_shared::types::{DeltaOp, EntityKey};
use tracing::{debug, instrument, warn};

use crate::errors::ReconcileError;
use crate::remote::VoteEndpoint;

/// Outcome of a fully applied plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reconciled {
    /// Score reported by the remote after the last operation.
    pub score: i64,
    /// Number of operations applied.
    pub applied: usize,
}

/// `Reconciler` sends the operations of a vote plan to the remote one at a time.
///
/// Each operation waits for the previous response, so the remote sees the
/// cancel half of a switch before the apply half. There are no retries: the
/// first failure aborts the rest of the plan.
pub struct Reconciler {
    endpoint: Arc<dyn VoteEndpoint>,
}

impl Reconciler {
    pub fn new(endpoint: Arc<dyn VoteEndpoint>) -> Self {
        Self { endpoint }
    }

    /// Executes `ops` against the remote score of `key`, in order.
    ///
    /// # Arguments
    ///
    /// * `key` - The entity whose score is changed
    /// * `ops` - Operations from a `VotePlan`
    ///
    /// # Returns
    ///
    /// The score from the last response, or a `ReconcileError` carrying how many
    /// operations the remote had already applied.
    #[instrument(skip(self, ops), fields(entity = %key, planned = ops.len()))]
    pub async fn execute(&self, key: &EntityKey, ops: &[DeltaOp]) -> Result<Reconciled, ReconcileError> {
        let mut score = None;

        for (committed, op) in ops.iter().enumerate() {
            match self.endpoint.apply_delta(key, *op).await {
                Ok(new_score) => {
                    debug!(delta = op.value(), score = new_score, "Remote applied delta");
                    score = Some(new_score);
                }
                Err(source) => {
                    if committed > 0 {
                        warn!(
                            committed,
                            planned = ops.len(),
                            error = %source,
                            "Vote plan failed part way; the remote keeps the applied deltas"
                        );
                    }
                    return Err(ReconcileError::OperationFailed {
                        key: *key,
                        committed,
                        planned: ops.len(),
                        failed_op: *op,
                        source,
                    });
                }
            }
        }

        score
            .map(|score| Reconciled {
                score,
                applied: ops.len(),
            })
            .ok_or(ReconcileError::EmptyPlan(*key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::EndpointError;
    use crate::remote::MockVoteEndpoint;

    fn reconciler_with(endpoint: &Arc<MockVoteEndpoint>) -> Reconciler {
        Reconciler::new(endpoint.clone())
    }

    #[tokio::test]
    async fn test_returns_last_score() {
        let endpoint = Arc::new(MockVoteEndpoint::new());
        endpoint.set_score(EntityKey::deal(1), 5);
        let reconciler = reconciler_with(&endpoint);

        let reconciled = reconciler
            .execute(&EntityKey::deal(1), &[DeltaOp::Decrement, DeltaOp::Decrement])
            .await
            .unwrap();

        assert_eq!(reconciled, Reconciled { score: 3, applied: 2 });
        assert_eq!(endpoint.deltas_for(&EntityKey::deal(1)), vec![-1, -1]);
    }

    #[tokio::test]
    async fn test_first_failure_commits_nothing() {
        let endpoint = Arc::new(MockVoteEndpoint::new());
        endpoint.set_score(EntityKey::comment(2), 1);
        endpoint.fail_call(0);
        let reconciler = reconciler_with(&endpoint);

        let err = reconciler
            .execute(&EntityKey::comment(2), &[DeltaOp::Increment, DeltaOp::Increment])
            .await
            .unwrap_err();

        assert_eq!(err.committed(), 0);
        assert_eq!(endpoint.attempts(), 1);
        assert_eq!(endpoint.score(&EntityKey::comment(2)), Some(1));
    }

    #[tokio::test]
    async fn test_failure_mid_plan_reports_committed_ops() {
        let endpoint = Arc::new(MockVoteEndpoint::new());
        endpoint.set_score(EntityKey::deal(1), 5);
        endpoint.fail_call(1);
        let reconciler = reconciler_with(&endpoint);

        let err = reconciler
            .execute(&EntityKey::deal(1), &[DeltaOp::Decrement, DeltaOp::Decrement])
            .await
            .unwrap_err();

        match err {
            ReconcileError::OperationFailed { committed, planned, failed_op, source, .. } => {
                assert_eq!(committed, 1);
                assert_eq!(planned, 2);
                assert_eq!(failed_op, DeltaOp::Decrement);
                assert!(matches!(source, EndpointError::NetworkError(_)));
            }
            other => panic!("Expected OperationFailed, got {other:?}"),
        }
        assert_eq!(endpoint.score(&EntityKey::deal(1)), Some(4));
    }

    #[tokio::test]
    async fn test_empty_plan_is_rejected() {
        let endpoint = Arc::new(MockVoteEndpoint::new());
        let reconciler = reconciler_with(&endpoint);

        let err = reconciler.execute(&EntityKey::deal(1), &[]).await.unwrap_err();

        assert!(matches!(err, ReconcileError::EmptyPlan(_)));
        assert_eq!(endpoint.attempts(), 0);
    }

    #[tokio::test]
    async fn test_malformed_response_fails() {
        let endpoint = Arc::new(MockVoteEndpoint::new());
        endpoint.set_score(EntityKey::deal(1), 5);
        endpoint.malformed_call(0);
        let reconciler = reconciler_with(&endpoint);

        let err = reconciler.execute(&EntityKey::deal(1), &[DeltaOp::Increment]).await.unwrap_err();

        assert!(matches!(
            err,
            ReconcileError::OperationFailed { source: EndpointError::MalformedResponse(_), .. }
        ));
    }
}
