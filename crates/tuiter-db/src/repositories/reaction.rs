//! PostgreSQL implementation of ReactionRepository
//!
//! `likes` and `dislikes` share one layout, so a single implementation
//! serves both; the table is picked from the [`ReactionKind`].

use async_trait::async_trait;
use chrono::Utc;
use sqlx::PgPool;
use tracing::instrument;

use tuiter_core::{Id, Reaction, ReactionKind, ReactionRepository, RepoResult};

use crate::models::ReactionModel;

use super::error::{map_db_error, map_insert_error};

/// PostgreSQL implementation of ReactionRepository
#[derive(Clone)]
pub struct PgReactionRepository {
    pool: PgPool,
    kind: ReactionKind,
}

impl PgReactionRepository {
    /// Create a repository over the table for `kind`
    pub fn new(pool: PgPool, kind: ReactionKind) -> Self {
        Self { pool, kind }
    }

    /// Repository over the `likes` table
    pub fn likes(pool: PgPool) -> Self {
        Self::new(pool, ReactionKind::Like)
    }

    /// Repository over the `dislikes` table
    pub fn dislikes(pool: PgPool) -> Self {
        Self::new(pool, ReactionKind::Dislike)
    }

    fn table(&self) -> &'static str {
        self.kind.collection()
    }
}

#[async_trait]
impl ReactionRepository for PgReactionRepository {
    fn kind(&self) -> ReactionKind {
        self.kind
    }

    #[instrument(skip(self), fields(kind = %self.kind))]
    async fn count_for_tuit(&self, tuit_id: Id) -> RepoResult<i64> {
        let sql = format!("SELECT COUNT(*) FROM {} WHERE tuit_id = $1", self.table());

        sqlx::query_scalar::<_, i64>(&sql)
            .bind(tuit_id.into_inner())
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)
    }

    #[instrument(skip(self), fields(kind = %self.kind))]
    async fn find(&self, user_id: Id, tuit_id: Id) -> RepoResult<Option<Reaction>> {
        let sql = format!(
            r"
            SELECT tuit_id, user_id, created_at
            FROM {}
            WHERE user_id = $1 AND tuit_id = $2
            ",
            self.table()
        );

        let result = sqlx::query_as::<_, ReactionModel>(&sql)
            .bind(user_id.into_inner())
            .bind(tuit_id.into_inner())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(result.map(|model| model.into_reaction(self.kind)))
    }

    #[instrument(skip(self), fields(kind = %self.kind))]
    async fn find_tuit_ids_by_user(&self, user_id: Id) -> RepoResult<Vec<Id>> {
        let sql = format!(
            r"
            SELECT tuit_id
            FROM {}
            WHERE user_id = $1
            ORDER BY created_at DESC, tuit_id DESC
            ",
            self.table()
        );

        let ids = sqlx::query_scalar::<_, i64>(&sql)
            .bind(user_id.into_inner())
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(ids.into_iter().map(Id::new).collect())
    }

    #[instrument(skip(self), fields(kind = %self.kind))]
    async fn find_user_ids_by_tuit(&self, tuit_id: Id) -> RepoResult<Vec<Id>> {
        let sql = format!(
            r"
            SELECT user_id
            FROM {}
            WHERE tuit_id = $1
            ORDER BY created_at ASC, user_id ASC
            ",
            self.table()
        );

        let ids = sqlx::query_scalar::<_, i64>(&sql)
            .bind(tuit_id.into_inner())
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(ids.into_iter().map(Id::new).collect())
    }

    #[instrument(skip(self), fields(kind = %self.kind))]
    async fn create(&self, tuit_id: Id, user_id: Id) -> RepoResult<Reaction> {
        let sql = format!(
            r"
            INSERT INTO {} (tuit_id, user_id, created_at)
            VALUES ($1, $2, $3)
            RETURNING tuit_id, user_id, created_at
            ",
            self.table()
        );

        let model = sqlx::query_as::<_, ReactionModel>(&sql)
            .bind(tuit_id.into_inner())
            .bind(user_id.into_inner())
            .bind(Utc::now())
            .fetch_one(&self.pool)
            .await
            .map_err(|e| map_insert_error(e, self.kind, tuit_id))?;

        Ok(model.into_reaction(self.kind))
    }

    #[instrument(skip(self), fields(kind = %self.kind))]
    async fn delete(&self, tuit_id: Id, user_id: Id) -> RepoResult<bool> {
        let sql = format!(
            "DELETE FROM {} WHERE tuit_id = $1 AND user_id = $2",
            self.table()
        );

        let result = sqlx::query(&sql)
            .bind(tuit_id.into_inner())
            .bind(user_id.into_inner())
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn test_repository_is_send_sync() {
        assert_send_sync::<PgReactionRepository>();
    }
}
