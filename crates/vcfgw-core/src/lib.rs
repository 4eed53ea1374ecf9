//! vcfgw core library
//!
//! Configuration, error types, and the domain models shared by the storage
//! adapter and the HTTP API.

pub mod config;
pub mod constants;
pub mod error;
pub mod models;
pub mod storage_types;

// Re-export commonly used types
pub use config::{BaseConfig, Config, LogFormat, StorageConfig, UploadConfig};
pub use error::{AppError, ErrorMetadata, LogLevel};
pub use storage_types::StorageBackend;
