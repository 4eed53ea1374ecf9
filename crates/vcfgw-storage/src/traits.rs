//! Storage abstraction trait
//!
//! This module defines the Storage trait that all storage backends must implement.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::StorageBackend;

/// Storage operation errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Upload failed: {0}")]
    UploadFailed(String),

    #[error("List failed: {0}")]
    ListFailed(String),

    #[error("Invalid storage key: {0}")]
    InvalidKey(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl StorageError {
    /// Underlying message without the operation prefix.
    pub fn message(&self) -> String {
        match self {
            StorageError::UploadFailed(msg)
            | StorageError::ListFailed(msg)
            | StorageError::InvalidKey(msg)
            | StorageError::ConfigError(msg) => msg.clone(),
            StorageError::IoError(err) => err.to_string(),
        }
    }
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// An object as reported by a listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredObject {
    pub key: String,
    pub last_modified: DateTime<Utc>,
    pub size: u64,
}

/// Storage abstraction trait
///
/// The bucket is fixed when the backend is built; callers only deal in keys.
/// Implementations keep no state besides their client and configuration, and
/// never retry.
#[async_trait]
pub trait Storage: Send + Sync {
    /// Store `data` under `key`, replacing any existing object.
    async fn put_object(&self, key: &str, data: Vec<u8>, content_type: &str) -> StorageResult<()>;

    /// List every object in the bucket, in whatever order the backend yields them.
    async fn list_objects(&self) -> StorageResult<Vec<StoredObject>>;

    /// Get the storage backend type
    fn backend_type(&self) -> StorageBackend;
}
