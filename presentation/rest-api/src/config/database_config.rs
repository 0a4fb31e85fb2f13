use std::env;
use std::sync::Arc;

use business::domain::product::repository::ProductRepository;
use persistence::db::{DatabaseConfig, create_sqlite_pool, run_migrations};
use persistence::product::in_memory::ProductRepositoryInMemory;
use persistence::product::repository::ProductRepositorySqlite;

const DEFAULT_DATABASE_URL: &str = "sqlite://products.db?mode=rwc";

#[derive(Debug, thiserror::Error)]
pub enum StorageConfigError {
    #[error("unknown STORAGE_BACKEND '{0}', expected 'sqlite' or 'memory'")]
    UnknownBackend(String),
    #[error("DATABASE_MAX_CONNECTIONS must be a positive integer, got '{0}'")]
    InvalidMaxConnections(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum StorageBackend {
    Sqlite {
        url: String,
        max_connections: u32,
    },
    Memory,
}

impl StorageBackend {
    /// Load storage configuration from environment variables
    ///
    /// Environment variables:
    /// - STORAGE_BACKEND: "sqlite" (default) or "memory"
    /// - DATABASE_URL: SQLite connection string (default: "sqlite://products.db?mode=rwc")
    /// - DATABASE_MAX_CONNECTIONS: Pool size (default: 5)
    pub fn from_env() -> Result<Self, StorageConfigError> {
        Self::from_values(
            env::var("STORAGE_BACKEND").ok(),
            env::var("DATABASE_URL").ok(),
            env::var("DATABASE_MAX_CONNECTIONS").ok(),
        )
    }

    fn from_values(
        backend: Option<String>,
        url: Option<String>,
        max_connections: Option<String>,
    ) -> Result<Self, StorageConfigError> {
        match backend.as_deref().unwrap_or("sqlite") {
            "memory" => Ok(StorageBackend::Memory),
            "sqlite" => {
                let max_connections = match max_connections {
                    None => 5,
                    Some(raw) => raw
                        .parse::<u32>()
                        .ok()
                        .filter(|n| *n > 0)
                        .ok_or(StorageConfigError::InvalidMaxConnections(raw))?,
                };
                Ok(StorageBackend::Sqlite {
                    url: url.unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string()),
                    max_connections,
                })
            }
            other => Err(StorageConfigError::UnknownBackend(other.to_string())),
        }
    }
}

/// Build the product store selected by the configuration
///
/// # Errors
/// Returns error if the database cannot be opened or migrated
pub async fn init_repository(
    backend: &StorageBackend,
) -> anyhow::Result<Arc<dyn ProductRepository>> {
    match backend {
        StorageBackend::Memory => {
            tracing::warn!("using in-memory product storage, data will not survive a restart");
            Ok(Arc::new(ProductRepositoryInMemory::new()))
        }
        StorageBackend::Sqlite {
            url,
            max_connections,
        } => {
            let mut config = DatabaseConfig::new(url.clone());
            config.max_connections = *max_connections;
            let pool = create_sqlite_pool(&config).await?;
            run_migrations(&pool).await?;
            tracing::info!(url = %url, "sqlite product storage ready");
            Ok(Arc::new(ProductRepositorySqlite::new(pool)))
        }
    }
}
