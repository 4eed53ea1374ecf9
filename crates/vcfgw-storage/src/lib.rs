//! vcfgw Storage Library
//!
//! Storage abstraction for the upload gateway: the [`Storage`] trait and its
//! S3 and local filesystem implementations, plus the public URL helpers used
//! by the listing and upload responses.
//!
//! # Storage key format
//!
//! Every upload is stored at `input/{original filename}`. Key generation lives
//! in the `keys` module so all backends and handlers agree on it.

pub mod factory;
pub mod keys;
#[cfg(feature = "storage-local")]
pub mod local;
#[cfg(feature = "storage-s3")]
pub mod s3;
pub mod traits;
pub mod urls;

// Re-export commonly used types
pub use factory::create_storage;
#[cfg(feature = "storage-local")]
pub use local::LocalStorage;
#[cfg(feature = "storage-s3")]
pub use s3::S3Storage;
pub use traits::{Storage, StorageError, StorageResult, StoredObject};
pub use urls::{s3_url_to_uri, ObjectUrls};
pub use vcfgw_core::StorageBackend;
