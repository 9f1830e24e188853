//! Test fixtures: a memory-backed context plus store wrappers that force
//! interleavings and failures

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Barrier;
use tuiter_core::{
    DomainError, Id, Reaction, ReactionKind, ReactionRepository, RepoResult, Tuit,
    TuitRepository, TuitStats,
};
use tuiter_db::MemoryStore;

use super::context::ServiceContext;

pub(crate) const TUIT: Id = Id::new(10);
pub(crate) const ALICE: Id = Id::new(1);
pub(crate) const BOB: Id = Id::new(2);

/// Store with one tuit carrying the given counters
pub(crate) fn store_with_tuit(stats: TuitStats) -> MemoryStore {
    let store = MemoryStore::new();
    store.insert_tuit(Tuit::new(TUIT, "hello tuiter".to_string(), Id::new(99)).with_stats(stats));
    store
}

pub(crate) fn context(store: &MemoryStore) -> ServiceContext {
    ServiceContext::builder()
        .like_repo(Arc::new(store.likes()))
        .dislike_repo(Arc::new(store.dislikes()))
        .tuit_repo(Arc::new(store.tuits()))
        .build()
        .unwrap()
}

/// Holds every `count_for_tuit` call until `parties` callers have counted
pub(crate) struct BarrierCounts<R> {
    pub(crate) inner: R,
    pub(crate) barrier: Arc<Barrier>,
}

#[async_trait]
impl<R: ReactionRepository> ReactionRepository for BarrierCounts<R> {
    fn kind(&self) -> ReactionKind {
        self.inner.kind()
    }

    async fn count_for_tuit(&self, tuit_id: Id) -> RepoResult<i64> {
        let count = self.inner.count_for_tuit(tuit_id).await?;
        self.barrier.wait().await;
        Ok(count)
    }

    async fn find(&self, user_id: Id, tuit_id: Id) -> RepoResult<Option<Reaction>> {
        self.inner.find(user_id, tuit_id).await
    }

    async fn find_tuit_ids_by_user(&self, user_id: Id) -> RepoResult<Vec<Id>> {
        self.inner.find_tuit_ids_by_user(user_id).await
    }

    async fn find_user_ids_by_tuit(&self, tuit_id: Id) -> RepoResult<Vec<Id>> {
        self.inner.find_user_ids_by_tuit(tuit_id).await
    }

    async fn create(&self, tuit_id: Id, user_id: Id) -> RepoResult<Reaction> {
        self.inner.create(tuit_id, user_id).await
    }

    async fn delete(&self, tuit_id: Id, user_id: Id) -> RepoResult<bool> {
        self.inner.delete(tuit_id, user_id).await
    }
}

/// Tuit store whose counter writes always fail
pub(crate) struct FailingStats<R> {
    pub(crate) inner: R,
}

#[async_trait]
impl<R: TuitRepository> TuitRepository for FailingStats<R> {
    async fn find_by_id(&self, id: Id) -> RepoResult<Option<Tuit>> {
        self.inner.find_by_id(id).await
    }

    async fn find_by_ids(&self, ids: &[Id]) -> RepoResult<Vec<Tuit>> {
        self.inner.find_by_ids(ids).await
    }

    async fn update_stats(&self, _id: Id, _stats: TuitStats) -> RepoResult<()> {
        Err(DomainError::StoreUnavailable("counter write refused".to_string()))
    }

    async fn health_check(&self) -> RepoResult<()> {
        self.inner.health_check().await
    }
}
