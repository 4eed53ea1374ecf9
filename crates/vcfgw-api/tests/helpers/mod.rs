//! Test helpers: build AppState and router for integration tests.
//!
//! Run from workspace root: `cargo test -p vcfgw-api`.

#![allow(dead_code)]

pub mod storage;

use axum_test::multipart::{MultipartForm, Part};
use axum_test::TestServer;
use std::sync::Arc;
use tempfile::TempDir;
use vcfgw_api::setup::routes;
use vcfgw_api::state::AppState;
use vcfgw_core::{BaseConfig, Config, LogFormat, StorageBackend, StorageConfig, UploadConfig};
use vcfgw_storage::{LocalStorage, Storage};

pub const TEST_BUCKET: &str = "genomics-test";
pub const TEST_REGION: &str = "eu-west-1";
pub const METADATA_LIMIT: usize = 1024;
pub const VCF_LIMIT: usize = 2048;

/// Test application: server plus the storage it writes to.
pub struct TestApp {
    pub server: TestServer,
    pub storage: Arc<dyn Storage>,
    pub _temp_dir: Option<TempDir>,
}

impl TestApp {
    pub fn client(&self) -> &TestServer {
        &self.server
    }
}

/// Configuration with small upload limits and a local backend at `path`.
pub fn test_config(path: &str) -> Config {
    Config {
        base: BaseConfig {
            server_port: 0,
            cors_origins: vec!["*".to_string()],
            environment: "test".to_string(),
            log_format: LogFormat::Pretty,
        },
        storage: StorageConfig {
            backend: StorageBackend::Local,
            bucket: TEST_BUCKET.to_string(),
            region: TEST_REGION.to_string(),
            endpoint: None,
            access_key_id: None,
            secret_access_key: None,
            local_storage_path: Some(path.to_string()),
        },
        uploads: UploadConfig {
            metadata_max_size_bytes: METADATA_LIMIT,
            vcf_max_size_bytes: VCF_LIMIT,
            sanitize_filenames: false,
            expose_storage_errors: true,
            listing_metadata_prefix: "metadata/".to_string(),
        },
    }
}

pub fn build_app(config: Config, storage: Arc<dyn Storage>, temp_dir: Option<TempDir>) -> TestApp {
    let state = Arc::new(AppState::new(config.clone(), storage.clone()));
    let app = routes::setup_routes(&config, state).expect("Failed to build routes");
    let server = TestServer::new(app.into_make_service()).expect("Failed to create test server");

    TestApp {
        server,
        storage,
        _temp_dir: temp_dir,
    }
}

/// Setup test app backed by local storage in a fresh temp directory.
pub async fn setup_test_app() -> TestApp {
    setup_test_app_with(|_| {}).await
}

/// Same as [`setup_test_app`], with a hook to adjust the configuration.
pub async fn setup_test_app_with(adjust: impl FnOnce(&mut Config)) -> TestApp {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let mut config = test_config(&temp_dir.path().to_string_lossy());
    adjust(&mut config);

    let storage = LocalStorage::new(temp_dir.path())
        .await
        .expect("Failed to create local storage");

    build_app(config, Arc::new(storage), Some(temp_dir))
}

/// Test app whose storage fails every call.
pub fn setup_failing_app(adjust: impl FnOnce(&mut Config)) -> TestApp {
    let mut config = test_config("/nonexistent");
    adjust(&mut config);
    build_app(config, Arc::new(storage::FailingStorage), None)
}

/// Multipart form with one `file` part.
pub fn file_form(filename: &str, mime_type: &str, data: Vec<u8>) -> MultipartForm {
    let part = Part::bytes(bytes::Bytes::from(data))
        .file_name(filename)
        .mime_type(mime_type);
    MultipartForm::new().add_part("file", part)
}

pub fn csv_bytes() -> Vec<u8> {
    b"sample_id,phenotype,sex\nS1,case,F\nS2,control,M\n".to_vec()
}
