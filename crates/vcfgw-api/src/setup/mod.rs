//! Application setup and initialization
//!
//! Everything `main` needs to go from a [`Config`] to a served router.

pub mod routes;
pub mod server;
pub mod storage;
pub mod validation;

use crate::state::AppState;
use anyhow::{Context, Result};
use std::sync::Arc;
use vcfgw_core::Config;

/// Initialize the entire application
pub async fn initialize_app(config: Config) -> Result<(Arc<AppState>, axum::Router)> {
    crate::telemetry::init_telemetry(config.base.log_format)
        .map_err(|e| anyhow::anyhow!("Failed to initialize telemetry: {}", e))?;

    // Validate configuration - fail fast on misconfiguration
    validation::validate_config(&config).context("Configuration validation failed")?;

    tracing::info!(
        environment = %config.base.environment,
        bucket = %config.storage.bucket,
        region = %config.storage.region,
        "Configuration loaded and validated successfully"
    );

    let storage = storage::setup_storage(&config).await?;

    let state = Arc::new(AppState::new(config.clone(), storage));

    let router = routes::setup_routes(&config, state.clone())?;

    Ok((state, router))
}
