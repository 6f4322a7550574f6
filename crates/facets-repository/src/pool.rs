//! Database connection pool management and named datasource lookup.

use facets_config::{AppConfig, DatasourceConfig};
use facets_core::{FacetsError, FacetsResult, Interface};
use async_trait::async_trait;
use shaku::Component;
use sqlx::mysql::{MySqlPool, MySqlPoolOptions};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{info, warn};

/// Interface for database pool operations.
///
/// This trait abstracts pool access for dependency injection so DAO
/// implementations never hold a concrete pool type.
#[async_trait]
pub trait DatabasePoolInterface: Interface + Send + Sync {
    /// Returns a reference to the underlying MySQL pool.
    fn inner(&self) -> &MySqlPool;

    /// Checks if the database connection is healthy.
    async fn health_check(&self) -> FacetsResult<()>;

    /// Closes the database pool.
    async fn close(&self);
}

/// Database pool wrapper.
///
/// The pool itself belongs to the driver; this layer only opens it from
/// configuration and closes what it opens. The Facets schema is owned by
/// the vendor, so there is no migration support here.
#[derive(Component)]
#[shaku(interface = DatabasePoolInterface)]
pub struct DatabasePool {
    pool: MySqlPool,
}

impl DatabasePool {
    /// Creates a new database pool from a datasource configuration.
    pub async fn new(config: &DatasourceConfig) -> FacetsResult<Self> {
        info!("Connecting to Facets database...");

        let pool = MySqlPoolOptions::new()
            .min_connections(config.min_connections)
            .max_connections(config.max_connections)
            .acquire_timeout(config.connect_timeout())
            .idle_timeout(Some(config.idle_timeout()))
            .connect(&config.url)
            .await
            .map_err(|e| {
                warn!("Failed to connect to database: {}", e);
                FacetsError::Connection(format!("Failed to connect: {}", e))
            })?;

        info!("Facets connection pool established");
        Ok(Self { pool })
    }

    /// Returns a reference to the underlying pool.
    #[must_use]
    pub fn inner(&self) -> &MySqlPool {
        &self.pool
    }

    /// Checks if the database connection is healthy.
    pub async fn health_check(&self) -> FacetsResult<()> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(|e| FacetsError::Connection(format!("Health check failed: {}", e)))?;
        Ok(())
    }

    /// Closes the database pool.
    pub async fn close(&self) {
        info!("Closing database connection pool...");
        self.pool.close().await;
        info!("Database connection pool closed");
    }

    /// Creates a `DatabasePool` from a pre-existing pool (for Shaku injection).
    #[must_use]
    pub fn with_pool(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DatabasePoolInterface for DatabasePool {
    fn inner(&self) -> &MySqlPool {
        &self.pool
    }

    async fn health_check(&self) -> FacetsResult<()> {
        DatabasePool::health_check(self).await
    }

    async fn close(&self) {
        DatabasePool::close(self).await;
    }
}

impl std::ops::Deref for DatabasePool {
    type Target = MySqlPool;

    fn deref(&self) -> &Self::Target {
        &self.pool
    }
}

impl std::fmt::Debug for DatabasePool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DatabasePool")
            .field("size", &self.pool.size())
            .field("num_idle", &self.pool.num_idle())
            .finish()
    }
}

/// Named datasource registry.
///
/// One pool is opened per configured datasource and handed out by name,
/// so callers resolve "facets" instead of building connection URLs.
pub struct DatasourceRegistry {
    pools: HashMap<String, Arc<DatabasePool>>,
}

impl DatasourceRegistry {
    /// Opens one pool per configured datasource.
    pub async fn from_config(config: &AppConfig) -> FacetsResult<Self> {
        let mut pools = HashMap::new();
        for (name, datasource) in &config.datasources {
            info!("Opening datasource '{}'", name);
            let pool = DatabasePool::new(datasource).await?;
            pools.insert(name.clone(), Arc::new(pool));
        }
        Ok(Self { pools })
    }

    /// Creates a registry from pre-built pools (tests, embedded setups).
    #[must_use]
    pub fn from_pools(pools: HashMap<String, Arc<DatabasePool>>) -> Self {
        Self { pools }
    }

    /// Resolves a datasource by name.
    pub fn lookup(&self, name: &str) -> FacetsResult<Arc<DatabasePool>> {
        self.pools
            .get(name)
            .cloned()
            .ok_or_else(|| FacetsError::Datasource(name.to_string()))
    }

    /// Returns the configured datasource names.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.pools.keys().map(String::as_str)
    }

    /// Closes every pool in the registry.
    pub async fn close_all(&self) {
        for (name, pool) in &self.pools {
            info!("Closing datasource '{}'", name);
            pool.close().await;
        }
    }
}

impl std::fmt::Debug for DatasourceRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DatasourceRegistry")
            .field("datasources", &self.pools.keys().collect::<Vec<_>>())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_registry_lookup_fails() {
        let registry = DatasourceRegistry::from_pools(HashMap::new());
        let err = registry.lookup("facets").unwrap_err();
        assert_eq!(err.error_code(), "UNKNOWN_DATASOURCE");
        assert!(err.to_string().contains("facets"));
    }

    #[test]
    fn test_registry_names_empty() {
        let registry = DatasourceRegistry::from_pools(HashMap::new());
        assert_eq!(registry.names().count(), 0);
    }
}
