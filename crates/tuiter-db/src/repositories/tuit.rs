//! PostgreSQL implementation of TuitRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use tuiter_core::{Id, RepoResult, Tuit, TuitRepository, TuitStats};

use crate::models::TuitModel;

use super::error::{map_db_error, tuit_not_found};

/// PostgreSQL implementation of TuitRepository
#[derive(Clone)]
pub struct PgTuitRepository {
    pool: PgPool,
}

impl PgTuitRepository {
    /// Create a new PgTuitRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a tuit row. Authoring tuits is not part of the API; this seeds
    /// data for tools and tests.
    #[instrument(skip(self, tuit), fields(tuit_id = %tuit.id))]
    pub async fn insert(&self, tuit: &Tuit) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO tuits (id, tuit, posted_by, posted_on, likes_count, dislikes_count)
            VALUES ($1, $2, $3, $4, $5, $6)
            ",
        )
        .bind(tuit.id.into_inner())
        .bind(&tuit.tuit)
        .bind(tuit.posted_by.into_inner())
        .bind(tuit.posted_on)
        .bind(tuit.stats.likes)
        .bind(tuit.stats.dislikes)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }
}

#[async_trait]
impl TuitRepository for PgTuitRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Id) -> RepoResult<Option<Tuit>> {
        let result = sqlx::query_as::<_, TuitModel>(
            r"
            SELECT id, tuit, posted_by, posted_on, likes_count, dislikes_count
            FROM tuits
            WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Tuit::from))
    }

    #[instrument(skip(self, ids), fields(count = ids.len()))]
    async fn find_by_ids(&self, ids: &[Id]) -> RepoResult<Vec<Tuit>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let raw: Vec<i64> = ids.iter().map(|id| id.into_inner()).collect();
        let rows = sqlx::query_as::<_, TuitModel>(
            r"
            SELECT id, tuit, posted_by, posted_on, likes_count, dislikes_count
            FROM tuits
            WHERE id = ANY($1)
            ",
        )
        .bind(&raw)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        // ANY() does not preserve order
        let mut tuits: Vec<Tuit> = rows.into_iter().map(Tuit::from).collect();
        tuits.sort_by_key(|tuit| ids.iter().position(|id| *id == tuit.id));
        Ok(tuits)
    }

    #[instrument(skip(self))]
    async fn update_stats(&self, id: Id, stats: TuitStats) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE tuits
            SET likes_count = $2, dislikes_count = $3
            WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .bind(stats.likes)
        .bind(stats.dislikes)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(tuit_not_found(id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn health_check(&self) -> RepoResult<()> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;
        Ok(())
    }
}
