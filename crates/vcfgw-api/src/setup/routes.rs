//! Route configuration and setup.

use crate::handlers;
use crate::middleware::request_id_middleware;
use crate::state::AppState;
use axum::{
    extract::DefaultBodyLimit,
    http::{HeaderValue, Method},
    routing::{get, post},
    Json, Router,
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use vcfgw_core::constants::MULTIPART_OVERHEAD_BYTES;
use vcfgw_core::Config;

/// Setup all application routes
///
/// Each upload route gets its own body limit: the category's file limit plus
/// room for multipart framing. The handler enforces the exact file limit.
pub fn setup_routes(config: &Config, state: Arc<AppState>) -> Result<Router<()>, anyhow::Error> {
    let cors = setup_cors(config)?;

    let metadata_body_limit = config.uploads.metadata_max_size_bytes + MULTIPART_OVERHEAD_BYTES;
    let vcf_body_limit = config.uploads.vcf_max_size_bytes + MULTIPART_OVERHEAD_BYTES;

    let app = Router::new()
        .route(
            "/upload-metadata",
            post(handlers::upload::upload_metadata)
                .layer(DefaultBodyLimit::max(metadata_body_limit)),
        )
        .route(
            "/upload-vcf",
            post(handlers::upload::upload_vcf).layer(DefaultBodyLimit::max(vcf_body_limit)),
        )
        .route("/get-metadata", get(handlers::listing::get_metadata))
        .route("/health", get(handlers::health::liveness))
        .route(
            "/api/openapi.json",
            get(|| async { Json(crate::api_doc::get_openapi_spec()) }),
        )
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(axum::middleware::from_fn(request_id_middleware))
        .layer(cors);

    Ok(app)
}

fn setup_cors(config: &Config) -> Result<CorsLayer, anyhow::Error> {
    let methods = [Method::GET, Method::POST, Method::OPTIONS];

    let cors = if config.cors_origins().iter().any(|o| o == "*") {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(methods)
            .allow_headers(Any)
    } else {
        let origins = config
            .cors_origins()
            .iter()
            .map(|o| {
                o.parse::<HeaderValue>()
                    .map_err(|e| anyhow::anyhow!("Invalid CORS origin '{}': {}", o, e))
            })
            .collect::<Result<Vec<_>, _>>()?;
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods(methods)
            .allow_headers(Any)
    };
    Ok(cors)
}
