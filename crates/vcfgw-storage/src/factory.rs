#[cfg(feature = "storage-local")]
use crate::LocalStorage;
#[cfg(feature = "storage-s3")]
use crate::S3Storage;
use crate::{Storage, StorageBackend, StorageError, StorageResult};
use std::sync::Arc;
use vcfgw_core::StorageConfig;

/// Create a storage backend based on configuration
pub async fn create_storage(config: &StorageConfig) -> StorageResult<Arc<dyn Storage>> {
    match config.backend {
        #[cfg(feature = "storage-s3")]
        StorageBackend::S3 => {
            let access_key_id = config.access_key_id.clone().ok_or_else(|| {
                StorageError::ConfigError("AWS_ACCESS_KEY_ID not configured".to_string())
            })?;
            let secret_access_key = config.secret_access_key.clone().ok_or_else(|| {
                StorageError::ConfigError("AWS_SECRET_ACCESS_KEY not configured".to_string())
            })?;

            let storage = S3Storage::new(
                config.bucket.clone(),
                config.region.clone(),
                access_key_id,
                secret_access_key,
                config.endpoint.clone(),
            )?;
            Ok(Arc::new(storage))
        }

        #[cfg(not(feature = "storage-s3"))]
        StorageBackend::S3 => Err(StorageError::ConfigError(
            "S3 storage backend not available (storage-s3 feature not enabled)".to_string(),
        )),

        #[cfg(feature = "storage-local")]
        StorageBackend::Local => {
            let base_path = config.local_storage_path.clone().ok_or_else(|| {
                StorageError::ConfigError("LOCAL_STORAGE_PATH not configured".to_string())
            })?;

            let storage = LocalStorage::new(base_path).await?;
            Ok(Arc::new(storage))
        }

        #[cfg(not(feature = "storage-local"))]
        StorageBackend::Local => Err(StorageError::ConfigError(
            "Local storage backend not available (storage-local feature not enabled)".to_string(),
        )),
    }
}
