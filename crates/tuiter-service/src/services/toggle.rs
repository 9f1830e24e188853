//! Toggle reconciler
//!
//! Flips one user's like or dislike on a tuit, removes the opposite reaction
//! when present and rewrites the tuit's counters.
//!
//! The reconciler reads both record counts and the stored counters first,
//! mutates records, then writes absolute counter values. Nothing serializes
//! concurrent toggles on the same tuit, so two of them can leave the counters
//! out of step with the records; [`ReactionService::recount_stats`] restores
//! them. A failed counter write is not compensated: the record change stays.
//!
//! [`ReactionService::recount_stats`]: super::ReactionService::recount_stats

use serde::Serialize;
use tracing::{info, instrument};
use tuiter_core::{DomainError, Id, ReactionKind, ReactionState, TuitStats};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Result of a successful toggle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ToggleOutcome {
    /// The user's state towards the tuit after the toggle
    pub state: ReactionState,
    /// Counters as written to the tuit
    pub stats: TuitStats,
}

/// Toggle reconciler
pub struct ToggleReconciler<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ToggleReconciler<'a> {
    /// Create a new ToggleReconciler
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Toggle the user's dislike on a tuit
    pub async fn toggle_dislike(&self, user_id: Id, tuit_id: Id) -> ServiceResult<ToggleOutcome> {
        self.toggle(ReactionKind::Dislike, user_id, tuit_id).await
    }

    /// Toggle the user's like on a tuit
    pub async fn toggle_like(&self, user_id: Id, tuit_id: Id) -> ServiceResult<ToggleOutcome> {
        self.toggle(ReactionKind::Like, user_id, tuit_id).await
    }

    /// Toggle a reaction of `kind`.
    ///
    /// - holding `kind`: the record is removed and its counter becomes the
    ///   record count minus one; the other counter keeps its stored value
    /// - otherwise: an opposite record is removed first (its counter becomes
    ///   the record count minus one), then a `kind` record is created and its
    ///   counter becomes the record count plus one
    ///
    /// # Errors
    /// `TuitNotFound` when the tuit does not exist, or the first store error;
    /// steps after a failure are not run.
    #[instrument(skip(self))]
    pub async fn toggle(
        &self,
        kind: ReactionKind,
        user_id: Id,
        tuit_id: Id,
    ) -> ServiceResult<ToggleOutcome> {
        let own = self.ctx.reaction_repo(kind);
        let opposite = self.ctx.reaction_repo(kind.opposite());

        let already_own = own.find(user_id, tuit_id).await?.is_some();
        let already_opposite = opposite.find(user_id, tuit_id).await?.is_some();
        let own_count = own.count_for_tuit(tuit_id).await?;
        let opposite_count = opposite.count_for_tuit(tuit_id).await?;

        let tuit = self
            .ctx
            .tuit_repo()
            .find_by_id(tuit_id)
            .await?
            .ok_or(DomainError::TuitNotFound(tuit_id))?;

        let prior = prior_state(kind, already_own, already_opposite);
        let mut stats = tuit.stats;

        if already_own {
            own.delete(tuit_id, user_id).await?;
            stats.set(kind, own_count - 1);
        } else {
            if already_opposite {
                opposite.delete(tuit_id, user_id).await?;
                stats.set(kind.opposite(), opposite_count - 1);
            }
            own.create(tuit_id, user_id).await?;
            stats.set(kind, own_count + 1);
        }

        self.ctx.tuit_repo().update_stats(tuit_id, stats).await?;

        // Both records present: only `kind` was removed
        let state = if already_own && already_opposite {
            ReactionState::holding(kind.opposite())
        } else {
            prior.toggled(kind)
        };

        info!(
            user_id = %user_id,
            tuit_id = %tuit_id,
            kind = %kind,
            ?prior,
            ?state,
            likes = stats.likes,
            dislikes = stats.dislikes,
            "Reaction toggled"
        );

        Ok(ToggleOutcome { state, stats })
    }
}

fn prior_state(kind: ReactionKind, has_own: bool, has_opposite: bool) -> ReactionState {
    match kind {
        ReactionKind::Like => ReactionState::from_records(has_own, has_opposite),
        ReactionKind::Dislike => ReactionState::from_records(has_opposite, has_own),
    }
}
