//! Service context - dependency container for services
//!
//! Holds the like, dislike and tuit stores. Built once at startup and shared
//! behind an `Arc` by the HTTP state.

use std::sync::Arc;

use tuiter_core::{ReactionKind, ReactionRepository, TuitRepository};

use super::error::{ServiceError, ServiceResult};

/// Service context containing all dependencies
#[derive(Clone)]
pub struct ServiceContext {
    like_repo: Arc<dyn ReactionRepository>,
    dislike_repo: Arc<dyn ReactionRepository>,
    tuit_repo: Arc<dyn TuitRepository>,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    pub fn new(
        like_repo: Arc<dyn ReactionRepository>,
        dislike_repo: Arc<dyn ReactionRepository>,
        tuit_repo: Arc<dyn TuitRepository>,
    ) -> Self {
        Self {
            like_repo,
            dislike_repo,
            tuit_repo,
        }
    }

    /// Start a builder
    pub fn builder() -> ServiceContextBuilder {
        ServiceContextBuilder::new()
    }

    // === Repositories ===

    /// Get the like store
    pub fn like_repo(&self) -> &dyn ReactionRepository {
        self.like_repo.as_ref()
    }

    /// Get the dislike store
    pub fn dislike_repo(&self) -> &dyn ReactionRepository {
        self.dislike_repo.as_ref()
    }

    /// Get the store holding records of `kind`
    pub fn reaction_repo(&self, kind: ReactionKind) -> &dyn ReactionRepository {
        match kind {
            ReactionKind::Like => self.like_repo(),
            ReactionKind::Dislike => self.dislike_repo(),
        }
    }

    /// Get the tuit store
    pub fn tuit_repo(&self) -> &dyn TuitRepository {
        self.tuit_repo.as_ref()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("repositories", &"...")
            .finish()
    }
}

/// Builder for creating ServiceContext
#[derive(Default)]
pub struct ServiceContextBuilder {
    like_repo: Option<Arc<dyn ReactionRepository>>,
    dislike_repo: Option<Arc<dyn ReactionRepository>>,
    tuit_repo: Option<Arc<dyn TuitRepository>>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn like_repo(mut self, repo: Arc<dyn ReactionRepository>) -> Self {
        self.like_repo = Some(repo);
        self
    }

    pub fn dislike_repo(mut self, repo: Arc<dyn ReactionRepository>) -> Self {
        self.dislike_repo = Some(repo);
        self
    }

    pub fn tuit_repo(mut self, repo: Arc<dyn TuitRepository>) -> Self {
        self.tuit_repo = Some(repo);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if a store is missing or a reaction
    /// store holds the wrong kind of record
    pub fn build(self) -> ServiceResult<ServiceContext> {
        let like_repo = self
            .like_repo
            .ok_or_else(|| ServiceError::validation("like_repo is required"))?;
        let dislike_repo = self
            .dislike_repo
            .ok_or_else(|| ServiceError::validation("dislike_repo is required"))?;
        let tuit_repo = self
            .tuit_repo
            .ok_or_else(|| ServiceError::validation("tuit_repo is required"))?;

        if like_repo.kind() != ReactionKind::Like {
            return Err(ServiceError::validation("like_repo must hold likes"));
        }
        if dislike_repo.kind() != ReactionKind::Dislike {
            return Err(ServiceError::validation("dislike_repo must hold dislikes"));
        }

        Ok(ServiceContext::new(like_repo, dislike_repo, tuit_repo))
    }
}
