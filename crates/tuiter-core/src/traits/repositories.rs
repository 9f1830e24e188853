//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation.

use async_trait::async_trait;

use crate::entities::{Reaction, ReactionKind, Tuit, TuitStats};
use crate::error::DomainError;
use crate::value_objects::Id;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// Reaction Repository
// ============================================================================

/// Store for one kind of reaction record.
///
/// Likes and dislikes are separate collections, so an application holds two
/// instances of this trait, one per [`ReactionKind`].
#[async_trait]
pub trait ReactionRepository: Send + Sync {
    /// Kind of record this store holds
    fn kind(&self) -> ReactionKind;

    /// Count records referencing a tuit
    async fn count_for_tuit(&self, tuit_id: Id) -> RepoResult<i64>;

    /// Find the record for a (user, tuit) pair
    async fn find(&self, user_id: Id, tuit_id: Id) -> RepoResult<Option<Reaction>>;

    /// Tuits the user reacted to, newest reaction first
    async fn find_tuit_ids_by_user(&self, user_id: Id) -> RepoResult<Vec<Id>>;

    /// Users who reacted to the tuit, oldest reaction first
    async fn find_user_ids_by_tuit(&self, tuit_id: Id) -> RepoResult<Vec<Id>>;

    /// Insert a record; `DuplicateReaction` if the pair already has one
    async fn create(&self, tuit_id: Id, user_id: Id) -> RepoResult<Reaction>;

    /// Delete the record for a pair, returning whether one was removed
    async fn delete(&self, tuit_id: Id, user_id: Id) -> RepoResult<bool>;
}

// ============================================================================
// Tuit Repository
// ============================================================================

#[async_trait]
pub trait TuitRepository: Send + Sync {
    /// Find tuit by ID
    async fn find_by_id(&self, id: Id) -> RepoResult<Option<Tuit>>;

    /// Find several tuits; unknown ids are skipped, input order is kept
    async fn find_by_ids(&self, ids: &[Id]) -> RepoResult<Vec<Tuit>>;

    /// Overwrite the reaction counters; `TuitNotFound` if the tuit is missing
    async fn update_stats(&self, id: Id, stats: TuitStats) -> RepoResult<()>;

    /// Check that the backing store answers
    async fn health_check(&self) -> RepoResult<()>;
}
