//! Test fixtures
//!
//! Seeded tuits, well-known user ids and the response shapes the tests read.

use serde::Deserialize;
use tuiter_core::{Id, Tuit, TuitStats};
use tuiter_db::MemoryStore;

/// Author of every seeded tuit
pub const AUTHOR: Id = Id::new(900);
pub const ALICE: Id = Id::new(1);
pub const BOB: Id = Id::new(2);
pub const CAROL: Id = Id::new(3);

/// A tuit id no fixture seeds
pub const MISSING_TUIT: Id = Id::new(404_404);

/// Seed one tuit with the given counters
pub fn seed_tuit(store: &MemoryStore, id: i64, likes: i64, dislikes: i64) -> Id {
    let id = Id::new(id);
    store.insert_tuit(
        Tuit::new(id, format!("tuit number {id}"), AUTHOR)
            .with_stats(TuitStats::new(likes, dislikes)),
    );
    id
}

/// Reaction counters as returned by the API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct StatsBody {
    pub likes: i64,
    pub dislikes: i64,
}

/// Toggle response
#[derive(Debug, Deserialize)]
pub struct ToggleBody {
    pub state: String,
    pub stats: StatsBody,
}

/// Tuit as returned by listings
#[derive(Debug, Deserialize)]
pub struct TuitBody {
    pub id: String,
    pub tuit: String,
    pub posted_by: String,
    pub posted_on: chrono::DateTime<chrono::Utc>,
    pub stats: StatsBody,
}

/// A single reaction record
#[derive(Debug, Deserialize)]
pub struct ReactionBody {
    pub kind: String,
    pub tuit_id: String,
    pub user_id: String,
}

/// A user's state towards a tuit
#[derive(Debug, Deserialize)]
pub struct ReactionStateBody {
    pub user_id: String,
    pub tuit_id: String,
    pub state: String,
}

/// Error envelope
#[derive(Debug, Deserialize)]
pub struct ErrorEnvelope {
    pub error: ErrorBody,
}

#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}
