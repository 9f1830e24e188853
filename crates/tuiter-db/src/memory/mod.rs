//! In-process store
//!
//! Implements the repository traits over shared maps behind a
//! `parking_lot::RwLock`. Every handle created from one [`MemoryStore`] sees
//! the same data, so a like repository, a dislike repository and a tuit
//! repository can be wired into a service context just like the PostgreSQL
//! ones. Contents are lost when the process exits.

use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::instrument;

use tuiter_core::{
    DomainError, Id, Reaction, ReactionKind, ReactionRepository, RepoResult, Tuit,
    TuitRepository, TuitStats,
};

/// Record plus its insertion sequence, used as an ordering tiebreak
#[derive(Debug, Clone)]
struct StoredReaction {
    seq: u64,
    reaction: Reaction,
}

#[derive(Debug, Default)]
struct MemoryState {
    tuits: HashMap<Id, Tuit>,
    likes: HashMap<(Id, Id), StoredReaction>,
    dislikes: HashMap<(Id, Id), StoredReaction>,
    next_seq: u64,
}

impl MemoryState {
    fn records(&self, kind: ReactionKind) -> &HashMap<(Id, Id), StoredReaction> {
        match kind {
            ReactionKind::Like => &self.likes,
            ReactionKind::Dislike => &self.dislikes,
        }
    }

    fn records_mut(&mut self, kind: ReactionKind) -> &mut HashMap<(Id, Id), StoredReaction> {
        match kind {
            ReactionKind::Like => &mut self.likes,
            ReactionKind::Dislike => &mut self.dislikes,
        }
    }
}

#[derive(Debug)]
struct Shared {
    state: RwLock<MemoryState>,
    online: AtomicBool,
}

/// Shared in-memory backing for tuits, likes and dislikes
#[derive(Debug, Clone)]
pub struct MemoryStore {
    shared: Arc<Shared>,
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryStore {
    /// Create an empty, online store
    pub fn new() -> Self {
        Self {
            shared: Arc::new(Shared {
                state: RwLock::new(MemoryState::default()),
                online: AtomicBool::new(true),
            }),
        }
    }

    /// Reaction repository for one kind over this store
    pub fn reactions(&self, kind: ReactionKind) -> MemoryReactionRepository {
        MemoryReactionRepository {
            store: self.clone(),
            kind,
        }
    }

    /// Like repository over this store
    pub fn likes(&self) -> MemoryReactionRepository {
        self.reactions(ReactionKind::Like)
    }

    /// Dislike repository over this store
    pub fn dislikes(&self) -> MemoryReactionRepository {
        self.reactions(ReactionKind::Dislike)
    }

    /// Tuit repository over this store
    pub fn tuits(&self) -> MemoryTuitRepository {
        MemoryTuitRepository {
            store: self.clone(),
        }
    }

    /// Insert or replace a tuit
    pub fn insert_tuit(&self, tuit: Tuit) {
        self.shared.state.write().tuits.insert(tuit.id, tuit);
    }

    /// Take the store offline (or back online). While offline every
    /// repository call fails with `StoreUnavailable`.
    pub fn set_online(&self, online: bool) {
        self.shared.online.store(online, Ordering::SeqCst);
    }

    fn ensure_online(&self) -> RepoResult<()> {
        if self.shared.online.load(Ordering::SeqCst) {
            Ok(())
        } else {
            Err(DomainError::StoreUnavailable(
                "memory store is offline".to_string(),
            ))
        }
    }
}

/// [`ReactionRepository`] over a [`MemoryStore`]
#[derive(Debug, Clone)]
pub struct MemoryReactionRepository {
    store: MemoryStore,
    kind: ReactionKind,
}

#[async_trait]
impl ReactionRepository for MemoryReactionRepository {
    fn kind(&self) -> ReactionKind {
        self.kind
    }

    #[instrument(skip(self), fields(kind = %self.kind))]
    async fn count_for_tuit(&self, tuit_id: Id) -> RepoResult<i64> {
        self.store.ensure_online()?;
        let state = self.store.shared.state.read();
        let count = state
            .records(self.kind)
            .keys()
            .filter(|(tid, _)| *tid == tuit_id)
            .count();
        Ok(i64::try_from(count).unwrap_or(i64::MAX))
    }

    #[instrument(skip(self), fields(kind = %self.kind))]
    async fn find(&self, user_id: Id, tuit_id: Id) -> RepoResult<Option<Reaction>> {
        self.store.ensure_online()?;
        let state = self.store.shared.state.read();
        Ok(state
            .records(self.kind)
            .get(&(tuit_id, user_id))
            .map(|stored| stored.reaction.clone()))
    }

    #[instrument(skip(self), fields(kind = %self.kind))]
    async fn find_tuit_ids_by_user(&self, user_id: Id) -> RepoResult<Vec<Id>> {
        self.store.ensure_online()?;
        let state = self.store.shared.state.read();
        let mut matching: Vec<&StoredReaction> = state
            .records(self.kind)
            .values()
            .filter(|stored| stored.reaction.user_id == user_id)
            .collect();
        matching.sort_by_key(|stored| std::cmp::Reverse(stored.seq));
        Ok(matching.iter().map(|stored| stored.reaction.tuit_id).collect())
    }

    #[instrument(skip(self), fields(kind = %self.kind))]
    async fn find_user_ids_by_tuit(&self, tuit_id: Id) -> RepoResult<Vec<Id>> {
        self.store.ensure_online()?;
        let state = self.store.shared.state.read();
        let mut matching: Vec<&StoredReaction> = state
            .records(self.kind)
            .values()
            .filter(|stored| stored.reaction.tuit_id == tuit_id)
            .collect();
        matching.sort_by_key(|stored| stored.seq);
        Ok(matching.iter().map(|stored| stored.reaction.user_id).collect())
    }

    #[instrument(skip(self), fields(kind = %self.kind))]
    async fn create(&self, tuit_id: Id, user_id: Id) -> RepoResult<Reaction> {
        self.store.ensure_online()?;
        let mut state = self.store.shared.state.write();
        if !state.tuits.contains_key(&tuit_id) {
            return Err(DomainError::TuitNotFound(tuit_id));
        }
        if state.records(self.kind).contains_key(&(tuit_id, user_id)) {
            return Err(DomainError::DuplicateReaction { kind: self.kind });
        }

        let seq = state.next_seq;
        state.next_seq += 1;
        let reaction = Reaction::new(self.kind, tuit_id, user_id);
        state.records_mut(self.kind).insert(
            (tuit_id, user_id),
            StoredReaction {
                seq,
                reaction: reaction.clone(),
            },
        );
        Ok(reaction)
    }

    #[instrument(skip(self), fields(kind = %self.kind))]
    async fn delete(&self, tuit_id: Id, user_id: Id) -> RepoResult<bool> {
        self.store.ensure_online()?;
        let mut state = self.store.shared.state.write();
        Ok(state
            .records_mut(self.kind)
            .remove(&(tuit_id, user_id))
            .is_some())
    }
}

/// [`TuitRepository`] over a [`MemoryStore`]
#[derive(Debug, Clone)]
pub struct MemoryTuitRepository {
    store: MemoryStore,
}

#[async_trait]
impl TuitRepository for MemoryTuitRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Id) -> RepoResult<Option<Tuit>> {
        self.store.ensure_online()?;
        Ok(self.store.shared.state.read().tuits.get(&id).cloned())
    }

    #[instrument(skip(self, ids), fields(count = ids.len()))]
    async fn find_by_ids(&self, ids: &[Id]) -> RepoResult<Vec<Tuit>> {
        self.store.ensure_online()?;
        let state = self.store.shared.state.read();
        Ok(ids
            .iter()
            .filter_map(|id| state.tuits.get(id).cloned())
            .collect())
    }

    #[instrument(skip(self))]
    async fn update_stats(&self, id: Id, stats: TuitStats) -> RepoResult<()> {
        self.store.ensure_online()?;
        let mut state = self.store.shared.state.write();
        let tuit = state
            .tuits
            .get_mut(&id)
            .ok_or(DomainError::TuitNotFound(id))?;
        tuit.stats = stats;
        Ok(())
    }

    #[instrument(skip(self))]
    async fn health_check(&self) -> RepoResult<()> {
        self.store.ensure_online()
    }
}
