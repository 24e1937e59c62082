use async_trait::async_trait;
use scale_core::model::SessionRecord;
use std::sync::{Arc, Mutex};
use thiserror::Error;

/// Errors surfaced by storage adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    /// The backing store could not be reached or timed out.
    #[error("storage unavailable: {0}")]
    Unavailable(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Append-only store of practice session records.
///
/// Listing returns records in insertion order. Aggregation depends on this
/// order for the "recent" window, so every backend must preserve it.
#[async_trait]
pub trait SessionRepository: Send + Sync {
    /// Persist a record exactly as given.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Unavailable` if the store cannot be reached.
    async fn append_session(&self, record: &SessionRecord) -> Result<(), StorageError>;

    /// Snapshot all records, or only those whose key equals `key`.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Unavailable` if the store cannot be reached, or
    /// `StorageError::Serialization` if a stored row cannot be decoded.
    async fn list_sessions(&self, key: Option<&str>) -> Result<Vec<SessionRecord>, StorageError>;
}

/// Simple in-memory repository implementation for testing and prototyping.
#[derive(Clone, Default)]
pub struct InMemoryRepository {
    sessions: Arc<Mutex<Vec<SessionRecord>>>,
}

impl InMemoryRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionRepository for InMemoryRepository {
    async fn append_session(&self, record: &SessionRecord) -> Result<(), StorageError> {
        let mut guard = self
            .sessions
            .lock()
            .map_err(|e| StorageError::Unavailable(e.to_string()))?;
        guard.push(record.clone());
        Ok(())
    }

    async fn list_sessions(&self, key: Option<&str>) -> Result<Vec<SessionRecord>, StorageError> {
        let guard = self
            .sessions
            .lock()
            .map_err(|e| StorageError::Unavailable(e.to_string()))?;
        Ok(guard
            .iter()
            .filter(|record| key.is_none_or(|k| record.key == k))
            .cloned()
            .collect())
    }
}

/// Holds the session repository behind a trait object for easy backend swapping.
#[derive(Clone)]
pub struct Storage {
    pub sessions: Arc<dyn SessionRepository>,
}

impl Storage {
    #[must_use]
    pub fn in_memory() -> Self {
        Self {
            sessions: Arc::new(InMemoryRepository::new()),
        }
    }
}
