//! Application state.
//!
//! This module defines the shared application state that is passed to all
//! request handlers. Storage is reached through a repository trait object so
//! the backend is chosen once, at startup.

use std::sync::Arc;

use heroes_core::storage::HeroRepository;

use crate::config::Config;
use crate::service::HeroService;

/// Shared application state.
///
/// Cloned for each request handler. Holds no mutable state of its own; the
/// table store is the only shared resource.
#[derive(Clone)]
pub struct AppState {
    /// Hero operations over the configured repository.
    pub heroes: HeroService,
}

impl AppState {
    /// Creates a new AppState over the given repository.
    pub fn new(repo: Arc<dyn HeroRepository>) -> Self {
        Self {
            heroes: HeroService::new(repo),
        }
    }

    /// Builds the state for the storage backend selected at compile time.
    #[cfg(feature = "dynamodb")]
    pub async fn from_config(config: &Config) -> Self {
        use crate::storage::DynamoDbRepository;

        tracing::info!(
            region = %config.dynamodb.region,
            endpoint = ?config.dynamodb.endpoint_url,
            table = %config.dynamodb.table_name,
            "Using DynamoDB storage"
        );

        let repo = DynamoDbRepository::connect(&config.dynamodb).await;
        Self::new(Arc::new(repo))
    }

    /// Builds the state for the storage backend selected at compile time.
    #[cfg(feature = "inmemory")]
    pub async fn from_config(_config: &Config) -> Self {
        use crate::storage::InMemoryRepository;

        tracing::info!("Using in-memory storage");

        Self::new(Arc::new(InMemoryRepository::new()))
    }
}
