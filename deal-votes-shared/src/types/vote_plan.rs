use crate::types::{DeltaOp, VoteDirection};

/// Ordered remote operations required to move a client's vote from its current
/// direction to `next`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VotePlan {
    pub ops: Vec<DeltaOp>,
    pub next: VoteDirection,
}

impl VotePlan {
    /// Sum of all operations in the plan.
    pub fn net_delta(&self) -> i32 {
        self.ops.iter().map(|op| op.value()).sum()
    }

    /// A switch cancels one direction and applies the other in two calls.
    pub fn is_switch(&self) -> bool {
        self.ops.len() > 1
    }
}
