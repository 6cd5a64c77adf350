//! Application state wiring the digest service to its infrastructure.
//!
//! `AppState` holds the digest service pinned to the concrete SQLite store,
//! plus the loaded configuration. Used by both CLI commands and HTTP handlers.

use std::sync::Arc;
use std::time::Duration;

use cachesum_core::service::digest::DigestService;
use cachesum_infra::config::{load_global_config, resolve_data_dir};
use cachesum_infra::hasher::default_provider_table;
use cachesum_infra::sqlite::cache::SqliteCacheStore;
use cachesum_infra::sqlite::pool::DatabasePool;
use cachesum_types::config::GlobalConfig;

/// Concrete service type pinned to the SQLite store.
pub type ConcreteDigestService = DigestService<SqliteCacheStore>;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub digest_service: Arc<ConcreteDigestService>,
    pub config: GlobalConfig,
    pub db_pool: DatabasePool,
}

impl AppState {
    /// Initialize the application state: load config, connect to the
    /// database, build the provider table, wire the service.
    pub async fn init() -> anyhow::Result<Self> {
        let data_dir = resolve_data_dir();
        tokio::fs::create_dir_all(&data_dir).await?;

        let config = load_global_config(&data_dir).await;

        let db_url = format!(
            "sqlite://{}?mode=rwc",
            data_dir.join("cachesum.db").display()
        );
        let db_pool = DatabasePool::new(&db_url).await?;

        let store = SqliteCacheStore::new(db_pool.clone());
        let digest_service = DigestService::new(
            store,
            default_provider_table(),
            Duration::from_secs(config.cache.ttl_secs),
        );

        Ok(Self {
            digest_service: Arc::new(digest_service),
            config,
            db_pool,
        })
    }
}
