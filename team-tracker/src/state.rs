//! Application state

use std::sync::Arc;

use crate::config::{BoxError, Config};
use crate::db::{MemoryStore, PgStore, RecordStore};
use crate::services::{EmployeeService, ProjectService};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub employees: EmployeeService,
    pub projects: ProjectService,
}

impl AppState {
    /// Create state from configuration, connecting to PostgreSQL when a
    /// database URL is configured.
    pub async fn new(config: &Config) -> Result<Self, BoxError> {
        let store: Arc<dyn RecordStore> = match config.database_url {
            Some(ref url) => {
                let store = PgStore::connect(url, config.db_max_connections).await?;
                tracing::info!("Connected to PostgreSQL");
                Arc::new(store)
            }
            None => {
                if !config.is_development() {
                    return Err("DATABASE_URL is required outside development".into());
                }
                tracing::warn!("DATABASE_URL not set, using in-memory store (data is not persisted)");
                Arc::new(MemoryStore::new())
            }
        };
        Ok(Self::with_store(store))
    }

    /// Create state over an already-built store
    pub fn with_store(store: Arc<dyn RecordStore>) -> Self {
        Self {
            employees: EmployeeService::new(store.clone()),
            projects: ProjectService::new(store),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(environment: &str) -> Config {
        Config {
            database_url: None,
            bind_addr: "127.0.0.1".into(),
            http_port: 8080,
            environment: environment.into(),
            db_max_connections: 1,
        }
    }

    #[tokio::test]
    async fn test_development_without_database_uses_memory_store() {
        let state = AppState::new(&config("development")).await.unwrap();
        assert!(state.employees.list().await.unwrap().is_empty());
        assert!(state.projects.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_production_requires_database_url() {
        assert!(AppState::new(&config("production")).await.is_err());
    }
}
