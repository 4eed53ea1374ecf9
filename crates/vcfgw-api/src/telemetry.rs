use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use vcfgw_core::LogFormat;

const DEFAULT_FILTER: &str = "vcfgw=debug,tower_http=debug";

/// Initialize tracing with an `EnvFilter` (RUST_LOG) and a fmt layer.
///
/// Fails if a global subscriber is already installed.
pub fn init_telemetry(format: LogFormat) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_FILTER.into());
    let registry = tracing_subscriber::registry().with(filter);

    match format {
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json())
            .try_init()?,
        LogFormat::Pretty => registry.with(tracing_subscriber::fmt::layer()).try_init()?,
    }

    tracing::debug!(format = ?format, "Tracing initialized");
    Ok(())
}
