use crate::core::{AppError, Result};
use crate::store::{DocumentStore, InMemoryDocumentStore, MySqlDocumentStore};
use sqlx::mysql::{MySqlPool, MySqlPoolOptions};
use std::env;
use std::sync::Arc;
use std::time::Duration;

use super::parse_var;

/// `DATABASE_URL` prefix selecting the in-memory store
pub const MEMORY_URL_SCHEME: &str = "memory://";

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub pool_size: u32,
    pub max_connections: u32,
    pub run_migrations: bool,
}

impl DatabaseConfig {
    pub fn from_env() -> Result<Self> {
        Ok(DatabaseConfig {
            url: env::var("DATABASE_URL")
                .map_err(|_| AppError::Configuration("DATABASE_URL not set".to_string()))?,
            pool_size: parse_var("DATABASE_POOL_SIZE", 10)?,
            max_connections: parse_var("DATABASE_MAX_CONNECTIONS", 20)?,
            run_migrations: parse_var("DATABASE_RUN_MIGRATIONS", true)?,
        })
    }

    pub fn validate(&self) -> Result<()> {
        if self.is_memory() {
            return Ok(());
        }

        if self.max_connections == 0 {
            return Err(AppError::Configuration(
                "DATABASE_MAX_CONNECTIONS must be greater than 0".to_string(),
            ));
        }

        if self.pool_size > self.max_connections {
            return Err(AppError::Configuration(format!(
                "DATABASE_POOL_SIZE ({}) cannot exceed DATABASE_MAX_CONNECTIONS ({})",
                self.pool_size, self.max_connections
            )));
        }

        Ok(())
    }

    pub fn is_memory(&self) -> bool {
        self.url.starts_with(MEMORY_URL_SCHEME)
    }

    /// Create a MySQL connection pool
    pub async fn create_pool(&self) -> Result<MySqlPool> {
        MySqlPoolOptions::new()
            .max_connections(self.max_connections)
            .min_connections(self.pool_size)
            .acquire_timeout(Duration::from_secs(30))
            .idle_timeout(Duration::from_secs(600)) // 10 minutes
            .max_lifetime(Duration::from_secs(1800)) // 30 minutes
            .test_before_acquire(true)
            .connect(&self.url)
            .await
            .map_err(AppError::Database)
    }

    /// Open the configured document store, applying migrations when enabled
    pub async fn connect(&self) -> Result<Arc<dyn DocumentStore>> {
        if self.is_memory() {
            tracing::warn!("Using in-memory document store; data is lost on restart");
            return Ok(Arc::new(InMemoryDocumentStore::new()));
        }

        let pool = self.create_pool().await?;
        tracing::info!(
            "Database pool initialized ({}..{} connections)",
            self.pool_size,
            self.max_connections
        );

        if self.run_migrations {
            sqlx::migrate!("./migrations").run(&pool).await?;
            tracing::info!("Database migrations applied");
        }

        Ok(Arc::new(MySqlDocumentStore::new(pool)))
    }
}
