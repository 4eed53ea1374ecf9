//! Storage doubles for error-path tests.

use async_trait::async_trait;
use vcfgw_storage::{Storage, StorageBackend, StorageError, StorageResult, StoredObject};

pub const FAILURE_DETAIL: &str = "Access Denied";

/// Storage that rejects every call, as an unreachable or misconfigured bucket would.
pub struct FailingStorage;

#[async_trait]
impl Storage for FailingStorage {
    async fn put_object(
        &self,
        _key: &str,
        _data: Vec<u8>,
        _content_type: &str,
    ) -> StorageResult<()> {
        Err(StorageError::UploadFailed(FAILURE_DETAIL.to_string()))
    }

    async fn list_objects(&self) -> StorageResult<Vec<StoredObject>> {
        Err(StorageError::ListFailed(FAILURE_DETAIL.to_string()))
    }

    fn backend_type(&self) -> StorageBackend {
        StorageBackend::S3
    }
}
