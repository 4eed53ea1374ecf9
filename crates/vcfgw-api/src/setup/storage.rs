//! Storage backend initialization

use anyhow::{Context, Result};
use std::sync::Arc;
use vcfgw_core::Config;
use vcfgw_storage::{create_storage, Storage};

/// Build the configured storage backend
pub async fn setup_storage(config: &Config) -> Result<Arc<dyn Storage>> {
    let storage = create_storage(&config.storage)
        .await
        .context("Failed to initialize storage backend")?;

    tracing::info!(
        backend = %storage.backend_type(),
        bucket = %config.storage.bucket,
        endpoint = config.storage.endpoint.as_deref().unwrap_or("aws"),
        "Storage backend initialized"
    );

    Ok(storage)
}
