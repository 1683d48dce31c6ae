//! Application state shared across handlers.

use std::sync::Arc;

use resume_persistence::DocumentRepository;

use crate::config::ApiConfig;
use crate::error::{ApiError, Result};

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    /// API configuration.
    pub config: Arc<ApiConfig>,
    /// Repository holding the current document and its archive.
    pub repository: Arc<DocumentRepository>,
}

impl AppState {
    /// Creates a new AppState.
    pub fn new(config: ApiConfig, repository: DocumentRepository) -> Self {
        Self {
            config: Arc::new(config),
            repository: Arc::new(repository),
        }
    }

    /// Runs `f` against the repository on the blocking thread pool.
    ///
    /// Repository calls do file I/O and saves wait on the save lock, so they
    /// stay off the async workers.
    pub async fn with_repository<T, F>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&DocumentRepository) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let repository = Arc::clone(&self.repository);
        tokio::task::spawn_blocking(move || f(&repository))
            .await
            .map_err(|e| ApiError::Internal(format!("storage task failed: {e}")))?
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use resume_persistence::StoreConfig;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_with_repository_returns_value() {
        let dir = tempdir().unwrap();
        let repository = DocumentRepository::from_config(&StoreConfig::new(dir.path().to_string_lossy()));
        let state = AppState::new(ApiConfig::default(), repository);

        let exists = state.with_repository(|repo| Ok(repo.exists())).await.unwrap();
        assert!(!exists);
    }

    #[tokio::test]
    async fn test_with_repository_converts_errors() {
        let dir = tempdir().unwrap();
        let repository = DocumentRepository::from_config(&StoreConfig::new(dir.path().to_string_lossy()));
        std::fs::write(repository.path(), b"[]").unwrap();
        let state = AppState::new(ApiConfig::default(), repository);

        let err = state
            .with_repository(|repo| Ok(repo.load()?))
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Unprocessable(_)));
    }
}
