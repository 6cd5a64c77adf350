//! SQLite cache store implementation.
//!
//! Implements `CacheStore` from `cachesum-core` using sqlx with split
//! read/write pools. Expiry is enforced on read: rows past `expires_at` are
//! invisible and get superseded by the next write to the same key.

use std::time::Duration;

use chrono::{DateTime, Duration as ChronoDuration, Utc};
use sqlx::Row;

use cachesum_core::storage::CacheStore;
use cachesum_types::error::RepositoryError;

use super::pool::DatabasePool;

/// SQLite-backed implementation of `CacheStore`.
pub struct SqliteCacheStore {
    pool: DatabasePool,
}

impl SqliteCacheStore {
    /// Create a new cache store backed by the given database pool.
    pub fn new(pool: DatabasePool) -> Self {
        Self { pool }
    }
}

fn format_datetime(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339()
}

impl CacheStore for SqliteCacheStore {
    async fn get(&self, key: &str) -> Result<Option<String>, RepositoryError> {
        let now = format_datetime(&Utc::now());
        let row =
            sqlx::query("SELECT value FROM cache_entries WHERE cache_key = ? AND expires_at > ?")
                .bind(key)
                .bind(&now)
                .fetch_optional(&self.pool.reader)
                .await
                .map_err(|e| RepositoryError::Query(e.to_string()))?;

        match row {
            Some(row) => {
                let value: String = row
                    .try_get("value")
                    .map_err(|e| RepositoryError::Query(e.to_string()))?;
                Ok(Some(value))
            }
            None => Ok(None),
        }
    }

    async fn set(&self, key: &str, value: &str, ttl: Duration) -> Result<(), RepositoryError> {
        let now = Utc::now();
        let ttl = ChronoDuration::from_std(ttl)
            .map_err(|e| RepositoryError::Query(format!("ttl out of range: {e}")))?;
        let expires_at = now + ttl;

        sqlx::query(
            r#"INSERT INTO cache_entries (cache_key, value, created_at, expires_at)
               VALUES (?, ?, ?, ?)
               ON CONFLICT (cache_key) DO UPDATE SET value = excluded.value, expires_at = excluded.expires_at"#,
        )
        .bind(key)
        .bind(value)
        .bind(format_datetime(&now))
        .bind(format_datetime(&expires_at))
        .execute(&self.pool.writer)
        .await
        .map_err(|e| RepositoryError::Query(e.to_string()))?;

        Ok(())
    }
}
