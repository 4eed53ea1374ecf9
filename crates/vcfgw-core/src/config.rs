//! Configuration module
//!
//! Configuration is read from the environment once at startup (a `.env` file
//! is honoured) and passed explicitly to the storage factory and the HTTP
//! state. Missing required values are fatal.

use std::env;
use std::fmt;

use crate::constants::{
    DEFAULT_LISTING_METADATA_PREFIX, DEFAULT_METADATA_MAX_SIZE_MB, DEFAULT_SERVER_PORT,
    DEFAULT_VCF_MAX_SIZE_MB,
};
use crate::storage_types::StorageBackend;

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

/// Server-level settings
#[derive(Clone, Debug)]
pub struct BaseConfig {
    pub server_port: u16,
    pub cors_origins: Vec<String>,
    pub environment: String,
    pub log_format: LogFormat,
}

/// Object store settings
#[derive(Clone)]
pub struct StorageConfig {
    pub backend: StorageBackend,
    pub bucket: String,
    pub region: String,
    // Custom endpoint for S3-compatible providers (MinIO, DigitalOcean Spaces, etc.)
    pub endpoint: Option<String>,
    pub access_key_id: Option<String>,
    pub secret_access_key: Option<String>,
    pub local_storage_path: Option<String>,
}

impl fmt::Debug for StorageConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StorageConfig")
            .field("backend", &self.backend)
            .field("bucket", &self.bucket)
            .field("region", &self.region)
            .field("endpoint", &self.endpoint)
            .field("access_key_id", &self.access_key_id.as_ref().map(|_| "***"))
            .field(
                "secret_access_key",
                &self.secret_access_key.as_ref().map(|_| "***"),
            )
            .field("local_storage_path", &self.local_storage_path)
            .finish()
    }
}

/// Upload validation and listing settings
#[derive(Clone, Debug)]
pub struct UploadConfig {
    pub metadata_max_size_bytes: usize,
    pub vcf_max_size_bytes: usize,
    pub sanitize_filenames: bool,
    /// Return the raw storage error text to clients on upload failure.
    pub expose_storage_errors: bool,
    pub listing_metadata_prefix: String,
}

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    pub base: BaseConfig,
    pub storage: StorageConfig,
    pub uploads: UploadConfig,
}

fn parse_bool(value: Option<String>, default: bool) -> bool {
    value
        .map(|v| v.trim().to_lowercase())
        .and_then(|v| match v.as_str() {
            "true" | "1" | "yes" => Some(true),
            "false" | "0" | "no" => Some(false),
            _ => None,
        })
        .unwrap_or(default)
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.map(|s| s.trim().to_string()).filter(|s| !s.is_empty())
}

impl Config {
    pub fn from_env() -> Result<Self, anyhow::Error> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, anyhow::Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let environment = non_empty(lookup("ENVIRONMENT"))
            .or_else(|| non_empty(lookup("APP_ENV")))
            .unwrap_or_else(|| "development".to_string());
        let is_production = matches!(environment.to_lowercase().as_str(), "production" | "prod");

        let log_format = match lookup("LOG_FORMAT").map(|s| s.trim().to_lowercase()) {
            Some(ref f) if f == "json" => LogFormat::Json,
            _ => LogFormat::Pretty,
        };

        let base = BaseConfig {
            server_port: lookup("SERVER_PORT")
                .and_then(|s| s.trim().parse().ok())
                .unwrap_or(DEFAULT_SERVER_PORT),
            cors_origins: lookup("CORS_ORIGINS")
                .unwrap_or_else(|| "*".to_string())
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect(),
            environment,
            log_format,
        };

        let backend = match non_empty(lookup("STORAGE_BACKEND")) {
            Some(s) => s.parse::<StorageBackend>()?,
            None => StorageBackend::S3,
        };

        let storage = StorageConfig {
            backend,
            bucket: non_empty(lookup("AWS_S3_BUCKET_NAME"))
                .ok_or_else(|| anyhow::anyhow!("AWS_S3_BUCKET_NAME must be set"))?,
            region: non_empty(lookup("AWS_REGION"))
                .ok_or_else(|| anyhow::anyhow!("AWS_REGION must be set"))?,
            endpoint: non_empty(lookup("S3_ENDPOINT")),
            access_key_id: non_empty(lookup("AWS_ACCESS_KEY_ID")),
            secret_access_key: non_empty(lookup("AWS_SECRET_ACCESS_KEY")),
            local_storage_path: non_empty(lookup("LOCAL_STORAGE_PATH")),
        };

        let uploads = UploadConfig {
            metadata_max_size_bytes: lookup("METADATA_MAX_SIZE_MB")
                .and_then(|s| s.trim().parse::<usize>().ok())
                .unwrap_or(DEFAULT_METADATA_MAX_SIZE_MB)
                * 1024
                * 1024,
            vcf_max_size_bytes: lookup("VCF_MAX_SIZE_MB")
                .and_then(|s| s.trim().parse::<usize>().ok())
                .unwrap_or(DEFAULT_VCF_MAX_SIZE_MB)
                * 1024
                * 1024,
            sanitize_filenames: parse_bool(lookup("SANITIZE_FILENAMES"), false),
            expose_storage_errors: parse_bool(lookup("EXPOSE_STORAGE_ERRORS"), !is_production),
            listing_metadata_prefix: lookup("LISTING_METADATA_PREFIX")
                .unwrap_or_else(|| DEFAULT_LISTING_METADATA_PREFIX.to_string()),
        };

        let config = Config {
            base,
            storage,
            uploads,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), anyhow::Error> {
        match self.storage.backend {
            StorageBackend::S3 => {
                if self.storage.access_key_id.is_none() || self.storage.secret_access_key.is_none()
                {
                    return Err(anyhow::anyhow!(
                        "AWS_ACCESS_KEY_ID and AWS_SECRET_ACCESS_KEY must be set for the s3 storage backend"
                    ));
                }
            }
            StorageBackend::Local => {
                if self.storage.local_storage_path.is_none() {
                    return Err(anyhow::anyhow!(
                        "LOCAL_STORAGE_PATH must be set for the local storage backend"
                    ));
                }
            }
        }

        if self.uploads.metadata_max_size_bytes == 0 || self.uploads.vcf_max_size_bytes == 0 {
            return Err(anyhow::anyhow!("Upload size limits cannot be 0"));
        }

        if let Some(ref endpoint) = self.storage.endpoint {
            if !endpoint.starts_with("http://") && !endpoint.starts_with("https://") {
                return Err(anyhow::anyhow!(
                    "S3_ENDPOINT must start with http:// or https://"
                ));
            }
        }

        Ok(())
    }

    /// Check if the application is running in production mode
    pub fn is_production(&self) -> bool {
        let env = self.base.environment.to_lowercase();
        env == "production" || env == "prod"
    }

    pub fn server_port(&self) -> u16 {
        self.base.server_port
    }

    pub fn cors_origins(&self) -> &[String] {
        &self.base.cors_origins
    }
}
