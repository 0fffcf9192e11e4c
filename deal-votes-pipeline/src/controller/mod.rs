//! This module defines the `VoteController` responsible for carrying out one
//! user vote action end to end.
//! It reads the local vote store, plans the transition, reconciles the plan with
//! the remote, and only then commits the new score and the new local record.
mod in_flight;

use std::collections::HashMap;
use std::sync::Arc;

use deal_votes_repository::VoteStore;
use deal_votes_shared::types::{
    CommentThread, EntityKey, EntityKind, ScoreUpdate, Votable, VoteChoice, VoteDirection,
};
use tracing::{info, instrument, warn};

use crate::errors::VoteError;
use crate::planner::plan_transition;
use crate::remote::{Reconciler, VoteEndpoint};
use in_flight::InFlight;

/// `VoteController` orchestrates vote actions for every entity kind.
///
/// The displayed score is never changed before the remote confirms, and the local
/// record is only written after the whole plan succeeded. A failure at any step
/// leaves both exactly as they were.
///
/// Only one action per entity may run at a time; a second click while the first
/// is in flight is refused with `VoteError::InFlight`. Each action runs on its own
/// task, so dropping the returned future does not stop a plan half way.
#[derive(Clone)]
pub struct VoteController {
    store: Arc<dyn VoteStore>,
    reconciler: Arc<Reconciler>,
    in_flight: InFlight,
}

impl VoteController {
    /// Creates a new `VoteController`.
    ///
    /// # Arguments
    ///
    /// * `store` - The local vote store
    /// * `endpoint` - The remote vote endpoint
    pub fn new(store: Arc<dyn VoteStore>, endpoint: Arc<dyn VoteEndpoint>) -> Self {
        Self {
            store,
            reconciler: Arc::new(Reconciler::new(endpoint)),
            in_flight: InFlight::default(),
        }
    }

    /// Casts, switches, or retracts the client's vote on one entity.
    ///
    /// # Returns
    ///
    /// The remote's score after the last operation and the direction now
    /// recorded locally, or a `VoteError`.
    pub async fn cast_vote(
        &self,
        kind: EntityKind,
        id: i64,
        choice: VoteChoice,
    ) -> Result<ScoreUpdate, VoteError> {
        let key = EntityKey::new(kind, id);
        let guard = self
            .in_flight
            .try_acquire(key)
            .ok_or(VoteError::InFlight(key))?;

        let store = self.store.clone();
        let reconciler = self.reconciler.clone();
        let action = tokio::spawn(async move {
            let _guard = guard;
            run_vote(store.as_ref(), &reconciler, key, choice).await
        });

        action
            .await
            .map_err(|e| VoteError::Aborted(e.to_string()))?
    }

    /// Returns the direction recorded locally for one entity.
    pub async fn recorded_direction(
        &self,
        kind: EntityKind,
        id: i64,
    ) -> Result<VoteDirection, VoteError> {
        Ok(self.store.get(&EntityKey::new(kind, id)).await?)
    }

    /// Returns the recorded direction of every id in `ids`, for restoring the
    /// vote controls of a freshly loaded page.
    pub async fn restore_directions(
        &self,
        kind: EntityKind,
        ids: &[i64],
    ) -> Result<HashMap<i64, VoteDirection>, VoteError> {
        let keys: Vec<EntityKey> = ids.iter().map(|id| EntityKey::new(kind, *id)).collect();
        let directions = self.store.get_many(&keys).await?;
        Ok(directions
            .into_iter()
            .map(|(key, direction)| (key.id, direction))
            .collect())
    }

    /// Whether an action on `key` is still running.
    pub fn is_in_flight(&self, key: &EntityKey) -> bool {
        self.in_flight.contains(key)
    }

    /// Votes on `entity` and, on success, stores the remote score in it.
    pub async fn vote_on<E: Votable>(
        &self,
        entity: &mut E,
        choice: VoteChoice,
    ) -> Result<ScoreUpdate, VoteError> {
        let key = entity.key();
        let update = self.cast_vote(key.kind, key.id, choice).await?;
        entity.set_score(update.score);
        Ok(update)
    }

    /// Votes on one comment of `thread`; on success the thread takes the remote
    /// score and is re-sorted by descending score.
    pub async fn vote_on_comment(
        &self,
        thread: &mut CommentThread,
        comment_id: i64,
        choice: VoteChoice,
    ) -> Result<ScoreUpdate, VoteError> {
        let key = EntityKey::comment(comment_id);
        if thread.get(comment_id).is_none() {
            return Err(VoteError::UnknownEntity(key));
        }

        let update = self.cast_vote(key.kind, key.id, choice).await?;
        thread.apply_score(comment_id, update.score);
        Ok(update)
    }
}

#[instrument(skip(store, reconciler), fields(entity = %key, choice = %choice))]
async fn run_vote(
    store: &dyn VoteStore,
    reconciler: &Reconciler,
    key: EntityKey,
    choice: VoteChoice,
) -> Result<ScoreUpdate, VoteError> {
    let current = store.get(&key).await?;
    let plan = plan_transition(current, choice);

    let reconciled = reconciler.execute(&key, &plan.ops).await?;

    let recorded = match plan.next {
        VoteDirection::None => store.clear(&key).await,
        next => store.set(&key, next).await,
    };
    if let Err(e) = recorded {
        warn!(error = %e, "Remote accepted the vote but the local record could not be written");
        return Err(e.into());
    }

    info!(
        from = %current,
        to = %plan.next,
        switch = plan.is_switch(),
        score = reconciled.score,
        "Vote recorded"
    );

    Ok(ScoreUpdate {
        key,
        score: reconciled.score,
        direction: plan.next,
    })
}
