//! Tuit entity - the post users react to

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::reaction::ReactionKind;
use crate::value_objects::Id;

/// Denormalized reaction counters stored on a tuit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TuitStats {
    pub likes: i64,
    pub dislikes: i64,
}

impl TuitStats {
    /// Create stats with the given counters
    pub const fn new(likes: i64, dislikes: i64) -> Self {
        Self { likes, dislikes }
    }

    /// Counter for a reaction kind
    #[inline]
    pub fn get(&self, kind: ReactionKind) -> i64 {
        match kind {
            ReactionKind::Like => self.likes,
            ReactionKind::Dislike => self.dislikes,
        }
    }

    /// Overwrite the counter for a reaction kind. Negative values clamp to zero.
    #[inline]
    pub fn set(&mut self, kind: ReactionKind, value: i64) {
        let value = value.max(0);
        match kind {
            ReactionKind::Like => self.likes = value,
            ReactionKind::Dislike => self.dislikes = value,
        }
    }
}

/// Tuit entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tuit {
    pub id: Id,
    pub tuit: String,
    pub posted_by: Id,
    pub posted_on: DateTime<Utc>,
    pub stats: TuitStats,
}

impl Tuit {
    /// Create a new Tuit with zeroed stats
    pub fn new(id: Id, tuit: String, posted_by: Id) -> Self {
        Self {
            id,
            tuit,
            posted_by,
            posted_on: Utc::now(),
            stats: TuitStats::default(),
        }
    }

    /// Builder-style stats override
    pub fn with_stats(mut self, stats: TuitStats) -> Self {
        self.stats = stats;
        self
    }
}
