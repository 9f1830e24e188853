//! Tuit database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for the tuits table
#[derive(Debug, Clone, FromRow)]
pub struct TuitModel {
    pub id: i64,
    pub tuit: String,
    pub posted_by: i64,
    pub posted_on: DateTime<Utc>,
    pub likes_count: i64,
    pub dislikes_count: i64,
}
