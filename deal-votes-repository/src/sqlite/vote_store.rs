use std::collections::HashMap;
use std::str::FromStr;

use async_trait::async_trait;
use deal_votes_shared::types::{EntityKey, VoteDirection};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use sqlx::{QueryBuilder, Row, Sqlite};
use tracing::{debug, info};

use crate::{VoteStore, VoteStoreError};

/// SQLite-backed vote store.
///
/// ## Features
///
/// - Creates the database file on first use
/// - Runs the embedded migrations on connect
/// - Upserts on `set`, so a key never has more than one row
pub struct SqliteVoteStore {
    pool: SqlitePool,
}

impl SqliteVoteStore {
    /// Opens (or creates) the database at `url` and applies migrations.
    ///
    /// # Arguments
    ///
    /// * `url` - SQLite connection string, e.g. `sqlite://deal-votes.db`
    ///
    /// # Returns
    ///
    /// * `Ok(SqliteVoteStore)` - Ready-to-use store
    /// * `Err(VoteStoreError)` - The database could not be opened or migrated
    pub async fn connect(url: &str) -> Result<Self, VoteStoreError> {
        let options = SqliteConnectOptions::from_str(url)?.create_if_missing(true);
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(options)
            .await?;
        info!(url = %url, "Opened local vote store");
        Self::new(pool).await
    }

    /// Wraps an existing pool and applies migrations.
    pub async fn new(pool: SqlitePool) -> Result<Self, VoteStoreError> {
        sqlx::migrate!("src/sqlite/migrations").run(&pool).await?;
        Ok(Self { pool })
    }

    /// Closes the underlying pool.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

#[async_trait]
impl VoteStore for SqliteVoteStore {
    async fn get(&self, key: &EntityKey) -> Result<VoteDirection, VoteStoreError> {
        let row = sqlx::query("SELECT direction FROM vote_records WHERE vote_key = ?")
            .bind(key.storage_key())
            .fetch_optional(&self.pool)
            .await?;

        Ok(row
            .map(|row| VoteDirection::from_token(row.get::<String, _>("direction").as_str()))
            .unwrap_or_default())
    }

    async fn set(&self, key: &EntityKey, direction: VoteDirection) -> Result<(), VoteStoreError> {
        let Some(token) = direction.token() else {
            return self.clear(key).await;
        };

        sqlx::query(
            "INSERT INTO vote_records (vote_key, direction) VALUES (?, ?) \
             ON CONFLICT (vote_key) DO UPDATE SET direction = excluded.direction, \
             updated_at = strftime('%s', 'now')",
        )
        .bind(key.storage_key())
        .bind(token)
        .execute(&self.pool)
        .await?;

        debug!(vote_key = %key.storage_key(), direction = %direction, "Recorded vote");
        Ok(())
    }

    async fn clear(&self, key: &EntityKey) -> Result<(), VoteStoreError> {
        sqlx::query("DELETE FROM vote_records WHERE vote_key = ?")
            .bind(key.storage_key())
            .execute(&self.pool)
            .await?;

        debug!(vote_key = %key.storage_key(), "Cleared vote");
        Ok(())
    }

    async fn get_many(
        &self,
        keys: &[EntityKey],
    ) -> Result<HashMap<EntityKey, VoteDirection>, VoteStoreError> {
        let mut directions: HashMap<EntityKey, VoteDirection> =
            keys.iter().map(|key| (*key, VoteDirection::None)).collect();
        if keys.is_empty() {
            return Ok(directions);
        }

        let by_storage_key: HashMap<String, EntityKey> =
            keys.iter().map(|key| (key.storage_key(), *key)).collect();

        let mut query: QueryBuilder<Sqlite> =
            QueryBuilder::new("SELECT vote_key, direction FROM vote_records WHERE vote_key IN (");
        let mut separated = query.separated(", ");
        for storage_key in by_storage_key.keys() {
            separated.push_bind(storage_key.clone());
        }
        separated.push_unseparated(")");

        let rows = query.build().fetch_all(&self.pool).await?;
        for row in rows {
            let vote_key: String = row.get("vote_key");
            let token: String = row.get("direction");
            if let Some(key) = by_storage_key.get(&vote_key) {
                directions.insert(*key, VoteDirection::from_token(&token));
            }
        }

        Ok(directions)
    }
}
