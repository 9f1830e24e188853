//! Reaction service
//!
//! Listing, plain create/delete, counting and counter repair for likes and
//! dislikes. Plain create/delete leave the tuit counters alone; toggling goes
//! through [`ToggleReconciler`](super::ToggleReconciler).

use tracing::{info, instrument};
use tuiter_core::{DomainError, Id, Reaction, ReactionKind, ReactionState, Tuit, TuitStats};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Reaction service
pub struct ReactionService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ReactionService<'a> {
    /// Create a new ReactionService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Tuits the user reacted to with `kind`, most recent reaction first.
    /// Records pointing at tuits that no longer exist are skipped.
    #[instrument(skip(self))]
    pub async fn tuits_reacted_by_user(
        &self,
        kind: ReactionKind,
        user_id: Id,
    ) -> ServiceResult<Vec<Tuit>> {
        let tuit_ids = self
            .ctx
            .reaction_repo(kind)
            .find_tuit_ids_by_user(user_id)
            .await?;
        let tuits = self.ctx.tuit_repo().find_by_ids(&tuit_ids).await?;
        Ok(tuits)
    }

    /// Users who reacted to the tuit with `kind`, oldest first
    #[instrument(skip(self))]
    pub async fn users_reacting_to_tuit(
        &self,
        kind: ReactionKind,
        tuit_id: Id,
    ) -> ServiceResult<Vec<Id>> {
        let user_ids = self
            .ctx
            .reaction_repo(kind)
            .find_user_ids_by_tuit(tuit_id)
            .await?;
        Ok(user_ids)
    }

    /// Record a reaction without touching counters
    ///
    /// # Errors
    /// `DuplicateReaction` naming the kind the user already holds, whether
    /// it is `kind` or its opposite. Switching sides goes through a toggle.
    #[instrument(skip(self))]
    pub async fn react(
        &self,
        kind: ReactionKind,
        user_id: Id,
        tuit_id: Id,
    ) -> ServiceResult<Reaction> {
        let opposite = kind.opposite();
        if self
            .ctx
            .reaction_repo(opposite)
            .find(user_id, tuit_id)
            .await?
            .is_some()
        {
            return Err(DomainError::DuplicateReaction { kind: opposite }.into());
        }

        let reaction = self.ctx.reaction_repo(kind).create(tuit_id, user_id).await?;

        info!(user_id = %user_id, tuit_id = %tuit_id, kind = %kind, "Reaction recorded");

        Ok(reaction)
    }

    /// Remove a reaction without touching counters
    ///
    /// # Errors
    /// `ReactionNotFound` if there was nothing to remove
    #[instrument(skip(self))]
    pub async fn unreact(&self, kind: ReactionKind, user_id: Id, tuit_id: Id) -> ServiceResult<()> {
        let removed = self.ctx.reaction_repo(kind).delete(tuit_id, user_id).await?;
        if !removed {
            return Err(DomainError::ReactionNotFound { kind }.into());
        }

        info!(user_id = %user_id, tuit_id = %tuit_id, kind = %kind, "Reaction removed");

        Ok(())
    }

    /// Number of `kind` records on a tuit
    #[instrument(skip(self))]
    pub async fn count(&self, kind: ReactionKind, tuit_id: Id) -> ServiceResult<i64> {
        Ok(self.ctx.reaction_repo(kind).count_for_tuit(tuit_id).await?)
    }

    /// The user's current state towards a tuit, derived from the records
    #[instrument(skip(self))]
    pub async fn reaction_state(&self, user_id: Id, tuit_id: Id) -> ServiceResult<ReactionState> {
        let liked = self.ctx.like_repo().find(user_id, tuit_id).await?.is_some();
        let disliked = self.ctx.dislike_repo().find(user_id, tuit_id).await?.is_some();
        Ok(ReactionState::from_records(liked, disliked))
    }

    /// Recompute both counters from the records and store them
    ///
    /// # Errors
    /// `TuitNotFound` if the tuit does not exist
    #[instrument(skip(self))]
    pub async fn recount_stats(&self, tuit_id: Id) -> ServiceResult<TuitStats> {
        let stats = TuitStats::new(
            self.count(ReactionKind::Like, tuit_id).await?,
            self.count(ReactionKind::Dislike, tuit_id).await?,
        );
        self.ctx.tuit_repo().update_stats(tuit_id, stats).await?;

        info!(
            tuit_id = %tuit_id,
            likes = stats.likes,
            dislikes = stats.dislikes,
            "Tuit stats recounted"
        );

        Ok(stats)
    }
}
