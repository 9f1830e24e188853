//! Reaction database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Row of the `likes` or `dislikes` table (identical layout)
#[derive(Debug, Clone, FromRow)]
pub struct ReactionModel {
    pub tuit_id: i64,
    pub user_id: i64,
    pub created_at: DateTime<Utc>,
}
