//! OpenAPI documentation, served at `/api/openapi.json`.

use utoipa::OpenApi;

use crate::error;
use crate::handlers;
use vcfgw_core::models;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "vcfgw API",
        version = "0.1.0",
        description = "Upload gateway for cohort metadata (CSV) and variant-call (VCF) files. Files are stored under the input/ prefix of a single S3 bucket."
    ),
    paths(
        handlers::upload::upload_metadata,
        handlers::upload::upload_vcf,
        handlers::listing::get_metadata,
        handlers::health::liveness,
    ),
    components(
        schemas(
            models::UploadResponse,
            models::UploadCategory,
            models::ListFilesResponse,
            models::FileEntry,
            models::FileType,
            error::ErrorResponse,
            handlers::health::HealthResponse,
        )
    ),
    tags(
        (name = "uploads", description = "Metadata and VCF uploads"),
        (name = "files", description = "Bucket listing"),
        (name = "health", description = "Liveness")
    )
)]
pub struct ApiDoc;

pub fn get_openapi_spec() -> utoipa::openapi::OpenApi {
    ApiDoc::openapi()
}
