use crate::traits::{Storage, StorageError, StorageResult, StoredObject};
use crate::StorageBackend;
use async_trait::async_trait;
use bytes::Bytes;
use futures::{Stream, StreamExt};
use object_store::aws::{AmazonS3, AmazonS3Builder};
use object_store::path::Path;
use object_store::{
    Attribute, AttributeValue, Attributes, ObjectMeta, ObjectStore, PutOptions, PutPayload,
    Result as ObjectResult,
};

/// S3 storage implementation
#[derive(Debug, Clone)]
pub struct S3Storage {
    store: AmazonS3,
    bucket: String,
}

impl S3Storage {
    /// Create a new S3Storage instance
    ///
    /// # Arguments
    /// * `bucket` - S3 bucket name
    /// * `region` - AWS region (or region identifier for S3-compatible providers)
    /// * `access_key_id` / `secret_access_key` - static credentials
    /// * `endpoint_url` - Optional custom endpoint URL for S3-compatible providers
    ///   (e.g., "http://localhost:9000" for MinIO)
    pub fn new(
        bucket: String,
        region: String,
        access_key_id: String,
        secret_access_key: String,
        endpoint_url: Option<String>,
    ) -> StorageResult<Self> {
        let mut builder = AmazonS3Builder::new()
            .with_region(region)
            .with_bucket_name(bucket.clone())
            .with_access_key_id(access_key_id)
            .with_secret_access_key(secret_access_key);

        if let Some(endpoint) = endpoint_url {
            let allow_http = endpoint.starts_with("http://");
            builder = builder.with_endpoint(endpoint).with_allow_http(allow_http);
        }

        let store = builder
            .build()
            .map_err(|e| StorageError::ConfigError(e.to_string()))?;

        Ok(S3Storage { store, bucket })
    }
}

/// Object location for a storage key, taken literally.
///
/// `Path::from` would percent-encode each segment and store a different key;
/// `Path::parse` keeps the characters as given. Keys with empty, `.` or `..`
/// segments have no `Path` representation and are rejected.
fn object_path(key: &str) -> StorageResult<Path> {
    let path = Path::parse(key).map_err(|e| {
        StorageError::InvalidKey(format!(
            "Storage key '{}' cannot be stored in the object store: {}",
            key, e
        ))
    })?;

    // parse() drops leading and trailing delimiters
    if path.as_ref() != key {
        return Err(StorageError::InvalidKey(format!(
            "Storage key '{}' cannot be stored in the object store",
            key
        )));
    }

    Ok(path)
}

fn stored_object(meta: ObjectMeta) -> StoredObject {
    StoredObject {
        key: meta.location.to_string(),
        last_modified: meta.last_modified,
        size: meta.size,
    }
}

/// Drain a listing stream into [`StoredObject`]s.
///
/// The S3 client fails a whole result page when one of its keys is not a
/// valid `Path` (e.g. `input/../x.csv`, `input//b.csv`). Such pages are
/// logged and skipped so the rest of the bucket is still listed; any other
/// error fails the listing.
async fn collect_listing<S>(stream: S) -> ObjectResult<Vec<StoredObject>>
where
    S: Stream<Item = ObjectResult<ObjectMeta>>,
{
    let mut stream = std::pin::pin!(stream);
    let mut objects = Vec::new();

    while let Some(item) = stream.next().await {
        match item {
            Ok(meta) => objects.push(stored_object(meta)),
            Err(object_store::Error::InvalidPath { source }) => {
                tracing::warn!(
                    error = %source,
                    "Skipping objects whose keys are not representable as paths"
                );
            }
            Err(e) => return Err(e),
        }
    }

    Ok(objects)
}

#[async_trait]
impl Storage for S3Storage {
    async fn put_object(&self, key: &str, data: Vec<u8>, content_type: &str) -> StorageResult<()> {
        let size = data.len() as u64;
        let location = object_path(key)?;

        let mut attributes = Attributes::new();
        attributes.insert(
            Attribute::ContentType,
            AttributeValue::from(content_type.to_string()),
        );
        let opts = PutOptions {
            attributes,
            ..Default::default()
        };

        let start = std::time::Instant::now();

        let result: ObjectResult<_> = self
            .store
            .put_opts(&location, PutPayload::from(Bytes::from(data)), opts)
            .await;

        result.map_err(|e| {
            tracing::error!(
                error = %e,
                bucket = %self.bucket,
                key = %key,
                size_bytes = size,
                duration_ms = start.elapsed().as_secs_f64() * 1000.0,
                "S3 upload failed"
            );
            StorageError::UploadFailed(e.to_string())
        })?;

        tracing::info!(
            bucket = %self.bucket,
            key = %key,
            content_type = %content_type,
            size_bytes = size,
            duration_ms = start.elapsed().as_secs_f64() * 1000.0,
            "S3 upload successful"
        );

        Ok(())
    }

    async fn list_objects(&self) -> StorageResult<Vec<StoredObject>> {
        let start = std::time::Instant::now();

        let objects = collect_listing(self.store.list(None))
            .await
            .map_err(|e| {
                tracing::error!(
                    error = %e,
                    bucket = %self.bucket,
                    duration_ms = start.elapsed().as_secs_f64() * 1000.0,
                    "S3 list failed"
                );
                StorageError::ListFailed(e.to_string())
            })?;

        tracing::info!(
            bucket = %self.bucket,
            object_count = objects.len(),
            duration_ms = start.elapsed().as_secs_f64() * 1000.0,
            "S3 list successful"
        );

        Ok(objects)
    }

    fn backend_type(&self) -> StorageBackend {
        StorageBackend::S3
    }
}
