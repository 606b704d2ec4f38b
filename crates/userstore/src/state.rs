//! Application state with repository-based storage.
//!
//! The state is cloned for each request handler. It holds only the user
//! repository, which is created once at startup and shared by every request.

use std::sync::Arc;

use userstore_core::storage::UserRepository;

use crate::config::Config;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// User repository for the configured backend.
    pub users: Arc<dyn UserRepository>,
}

impl AppState {
    /// Creates AppState around an already-built repository.
    pub fn with_repository(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }
}

// ============================================================================
// Factory functions for the different backends
// ============================================================================

#[cfg(feature = "dynamodb")]
mod dynamodb {
    use super::*;
    use crate::storage::DynamoDbRepository;

    impl AppState {
        /// Creates AppState with DynamoDB storage.
        pub async fn new(config: &Config) -> Result<Self, anyhow::Error> {
            let repo = DynamoDbRepository::from_config(config).await;

            tracing::info!(
                store = %config.target_display(),
                table = repo.table_name(),
                "Using DynamoDB storage"
            );

            Ok(Self::with_repository(Arc::new(repo)))
        }
    }
}

#[cfg(feature = "inmemory")]
mod inmemory {
    use super::*;
    use crate::storage::InMemoryRepository;

    impl AppState {
        /// Creates AppState with in-memory storage.
        pub async fn new(config: &Config) -> Result<Self, anyhow::Error> {
            tracing::warn!(
                ignored_table = %config.table_name,
                "Using in-memory storage, data will not be persisted"
            );

            Ok(Self::with_repository(Arc::new(InMemoryRepository::new())))
        }
    }
}
