//! This module defines the transition planner, which decides what the remote
//! must be told when the client clicks a vote control.
//! It is a pure function of the recorded direction and the requested one.
use deal_votes_shared::types::{DeltaOp, VoteChoice, VoteDirection, VotePlan};

/// Computes the remote operations and the next local state for a vote click.
///
/// Clicking the recorded direction again retracts the vote. Clicking the other
/// direction first cancels the recorded vote and then applies the new one, as
/// two unit operations, because the remote only accepts unit deltas.
///
/// # Arguments
///
/// * `current` - The direction recorded in the local vote store
/// * `requested` - The direction the user clicked
///
/// # Returns
///
/// A `VotePlan` whose operations must be sent in order.
pub fn plan_transition(current: VoteDirection, requested: VoteChoice) -> VotePlan {
    let (ops, next) = match (current, requested) {
        (VoteDirection::None, VoteChoice::Up)   => (vec![DeltaOp::Increment], VoteDirection::Up),
        (VoteDirection::None, VoteChoice::Down) => (vec![DeltaOp::Decrement], VoteDirection::Down),
        (VoteDirection::Up, VoteChoice::Up)     => (vec![DeltaOp::Decrement], VoteDirection::None),
        (VoteDirection::Down, VoteChoice::Down) => (vec![DeltaOp::Increment], VoteDirection::None),
        (VoteDirection::Up, VoteChoice::Down)   => (vec![DeltaOp::Decrement, DeltaOp::Decrement], VoteDirection::Down),
        (VoteDirection::Down, VoteChoice::Up)   => (vec![DeltaOp::Increment, DeltaOp::Increment], VoteDirection::Up),
    };

    VotePlan { ops, next }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(plan: &VotePlan) -> Vec<i32> {
        plan.ops.iter().map(|op| op.value()).collect()
    }

    #[test]
    fn test_first_upvote() {
        let plan = plan_transition(VoteDirection::None, VoteChoice::Up);
        assert_eq!(values(&plan), vec![1]);
        assert_eq!(plan.next, VoteDirection::Up);
    }

    #[test]
    fn test_first_downvote() {
        let plan = plan_transition(VoteDirection::None, VoteChoice::Down);
        assert_eq!(values(&plan), vec![-1]);
        assert_eq!(plan.next, VoteDirection::Down);
    }

    #[test]
    fn test_toggle_off_upvote() {
        let plan = plan_transition(VoteDirection::Up, VoteChoice::Up);
        assert_eq!(values(&plan), vec![-1]);
        assert_eq!(plan.next, VoteDirection::None);
    }

    #[test]
    fn test_toggle_off_downvote() {
        let plan = plan_transition(VoteDirection::Down, VoteChoice::Down);
        assert_eq!(values(&plan), vec![1]);
        assert_eq!(plan.next, VoteDirection::None);
    }

    #[test]
    fn test_switch_up_to_down_cancels_then_applies() {
        let plan = plan_transition(VoteDirection::Up, VoteChoice::Down);
        assert_eq!(plan.ops, vec![DeltaOp::Decrement, DeltaOp::Decrement]);
        assert_eq!(values(&plan), vec![-1, -1]);
        assert_eq!(plan.next, VoteDirection::Down);
        assert!(plan.is_switch());
    }

    #[test]
    fn test_switch_down_to_up_cancels_then_applies() {
        let plan = plan_transition(VoteDirection::Down, VoteChoice::Up);
        assert_eq!(plan.ops, vec![DeltaOp::Increment, DeltaOp::Increment]);
        assert_eq!(values(&plan), vec![1, 1]);
        assert_eq!(plan.next, VoteDirection::Up);
    }

    #[test]
    fn test_every_plan_moves_score_by_new_minus_old() {
        let weight = |d: VoteDirection| match d {
            VoteDirection::Up => 1,
            VoteDirection::Down => -1,
            VoteDirection::None => 0,
        };
        for current in [VoteDirection::None, VoteDirection::Up, VoteDirection::Down] {
            for requested in [VoteChoice::Up, VoteChoice::Down] {
                let plan = plan_transition(current, requested);
                assert_eq!(plan.net_delta(), weight(plan.next) - weight(current));
                assert!(!plan.ops.is_empty());
            }
        }
    }

    #[test]
    fn test_up_then_toggle_nets_to_zero() {
        let first = plan_transition(VoteDirection::None, VoteChoice::Up);
        let second = plan_transition(first.next, VoteChoice::Up);
        assert_eq!(second.next, VoteDirection::None);
        assert_eq!(first.net_delta() + second.net_delta(), 0);
    }
}
