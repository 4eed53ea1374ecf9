use crate::traits::{Storage, StorageError, StorageResult, StoredObject};
use crate::StorageBackend;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;

/// Local filesystem storage implementation
///
/// Objects are files below `base_path`; the key is the relative path with `/`
/// separators. Used for development and tests in place of a bucket.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: PathBuf,
}

impl LocalStorage {
    /// Create a new LocalStorage instance
    ///
    /// # Arguments
    /// * `base_path` - Root directory for objects (e.g., "/var/lib/vcfgw/objects")
    pub async fn new(base_path: impl Into<PathBuf>) -> StorageResult<Self> {
        let base_path = base_path.into();

        fs::create_dir_all(&base_path).await.map_err(|e| {
            StorageError::ConfigError(format!(
                "Failed to create storage directory {}: {}",
                base_path.display(),
                e
            ))
        })?;

        Ok(LocalStorage { base_path })
    }

    /// Convert storage key to filesystem path
    ///
    /// Keys that could escape the base directory are rejected; a filesystem
    /// cannot store them uninterpreted the way an object store does.
    fn key_to_path(&self, storage_key: &str) -> StorageResult<PathBuf> {
        if storage_key.is_empty()
            || storage_key.starts_with('/')
            || storage_key.split('/').any(|segment| segment == "..")
            || storage_key.contains('\\')
        {
            return Err(StorageError::InvalidKey(format!(
                "Storage key '{}' cannot be stored on the local filesystem",
                storage_key
            )));
        }

        Ok(self.base_path.join(storage_key))
    }

    fn path_to_key(&self, path: &Path) -> Option<String> {
        let relative = path.strip_prefix(&self.base_path).ok()?;
        let segments: Option<Vec<&str>> = relative.iter().map(|s| s.to_str()).collect();
        Some(segments?.join("/"))
    }

    /// Ensure parent directory exists
    async fn ensure_parent_dir(&self, path: &Path) -> StorageResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).await?;
        }
        Ok(())
    }
}

#[async_trait]
impl Storage for LocalStorage {
    async fn put_object(&self, key: &str, data: Vec<u8>, content_type: &str) -> StorageResult<()> {
        let path = self.key_to_path(key)?;
        let size = data.len();

        self.ensure_parent_dir(&path).await?;

        let start = std::time::Instant::now();

        let mut file = fs::File::create(&path).await.map_err(|e| {
            StorageError::UploadFailed(format!("Failed to create file {}: {}", path.display(), e))
        })?;

        file.write_all(&data).await.map_err(|e| {
            StorageError::UploadFailed(format!("Failed to write file {}: {}", path.display(), e))
        })?;

        file.sync_all().await.map_err(|e| {
            StorageError::UploadFailed(format!("Failed to sync file {}: {}", path.display(), e))
        })?;

        tracing::info!(
            path = %path.display(),
            key = %key,
            content_type = %content_type,
            size_bytes = size,
            duration_ms = start.elapsed().as_secs_f64() * 1000.0,
            "Local storage upload successful"
        );

        Ok(())
    }

    async fn list_objects(&self) -> StorageResult<Vec<StoredObject>> {
        let start = std::time::Instant::now();
        let mut objects = Vec::new();
        let mut pending = vec![self.base_path.clone()];

        while let Some(dir) = pending.pop() {
            let mut entries = fs::read_dir(&dir).await.map_err(|e| {
                StorageError::ListFailed(format!("Failed to read {}: {}", dir.display(), e))
            })?;

            while let Some(entry) = entries.next_entry().await? {
                let path = entry.path();
                let metadata = entry.metadata().await?;

                if metadata.is_dir() {
                    pending.push(path);
                    continue;
                }

                let Some(key) = self.path_to_key(&path) else {
                    tracing::debug!(path = %path.display(), "Skipping non UTF-8 path");
                    continue;
                };

                let last_modified: DateTime<Utc> = metadata
                    .modified()
                    .map(DateTime::<Utc>::from)
                    .unwrap_or_else(|_| Utc::now());

                objects.push(StoredObject {
                    key,
                    last_modified,
                    size: metadata.len(),
                });
            }
        }

        tracing::info!(
            path = %self.base_path.display(),
            object_count = objects.len(),
            duration_ms = start.elapsed().as_secs_f64() * 1000.0,
            "Local storage list successful"
        );

        Ok(objects)
    }

    fn backend_type(&self) -> StorageBackend {
        StorageBackend::Local
    }
}
