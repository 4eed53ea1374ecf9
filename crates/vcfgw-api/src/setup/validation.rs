//! Configuration validation
//!
//! Runs at startup on top of [`Config::validate`] to catch settings that are
//! legal but unsafe for the current environment.

use anyhow::Result;
use vcfgw_core::Config;

/// Validate critical configuration values
pub fn validate_config(config: &Config) -> Result<()> {
    config.validate()?;

    if config.is_production() {
        if config.cors_origins().iter().any(|o| o == "*") {
            tracing::warn!(
                "CORS configured to allow all origins (*) in production - set CORS_ORIGINS to restrict it"
            );
        }

        if config.uploads.expose_storage_errors {
            tracing::warn!(
                "EXPOSE_STORAGE_ERRORS is enabled in production - object store error text will reach clients"
            );
        }
    }

    Ok(())
}
