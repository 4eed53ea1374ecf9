use crate::error::{ErrorResponse, HttpAppError};
use crate::services::upload::UploadService;
use crate::state::AppState;
use axum::{
    extract::{multipart::MultipartRejection, Multipart, State},
    Json,
};
use std::sync::Arc;
use vcfgw_core::models::{UploadCategory, UploadResponse};
use vcfgw_core::AppError;

#[utoipa::path(
    post,
    path = "/upload-metadata",
    tag = "uploads",
    request_body(content = inline(Object), content_type = "multipart/form-data", description = "CSV file in the `file` field"),
    responses(
        (status = 200, description = "Metadata CSV stored", body = UploadResponse),
        (status = 400, description = "No file, not text/csv, or file too large", body = ErrorResponse),
        (status = 500, description = "Object store failure", body = ErrorResponse)
    )
)]
pub async fn upload_metadata(
    State(state): State<Arc<AppState>>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<UploadResponse>, HttpAppError> {
    handle_upload(&state, multipart, UploadCategory::Metadata).await
}

#[utoipa::path(
    post,
    path = "/upload-vcf",
    tag = "uploads",
    request_body(content = inline(Object), content_type = "multipart/form-data", description = "VCF file in the `file` field"),
    responses(
        (status = 200, description = "VCF file stored", body = UploadResponse),
        (status = 400, description = "No file uploaded, or file too large", body = ErrorResponse),
        (status = 500, description = "Object store failure", body = ErrorResponse)
    )
)]
pub async fn upload_vcf(
    State(state): State<Arc<AppState>>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<UploadResponse>, HttpAppError> {
    handle_upload(&state, multipart, UploadCategory::Vcf).await
}

async fn handle_upload(
    state: &Arc<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
    category: UploadCategory,
) -> Result<Json<UploadResponse>, HttpAppError> {
    // A body that is not multipart/form-data carries no file
    let multipart = multipart.map_err(|rejection| {
        tracing::debug!(error = %rejection, category = category.as_str(), "Multipart rejected");
        AppError::MissingFile(category.missing_file_message().to_string())
    })?;

    let outcome = UploadService::new(state).upload(multipart, category).await?;

    tracing::debug!(
        key = %outcome.storage_key,
        size_bytes = outcome.file_size,
        "Upload response sent"
    );

    Ok(Json(UploadResponse::stored(category, outcome.storage_uri)))
}
