use crate::error::{ErrorResponse, HttpAppError};
use crate::state::AppState;
use axum::{extract::State, Json};
use std::sync::Arc;
use vcfgw_core::models::{FileEntry, FileType, ListFilesResponse};
use vcfgw_core::AppError;
use vcfgw_storage::{ObjectUrls, StoredObject};

const LIST_FAILED_MESSAGE: &str = "Failed to retrieve files";

#[utoipa::path(
    get,
    path = "/get-metadata",
    tag = "files",
    responses(
        (status = 200, description = "All objects in the bucket", body = ListFilesResponse),
        (status = 500, description = "Failed to retrieve files", body = ErrorResponse)
    )
)]
pub async fn get_metadata(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ListFilesResponse>, HttpAppError> {
    let objects = state.storage.list_objects().await.map_err(|e| {
        tracing::error!(
            error = %e,
            bucket = %state.urls.bucket(),
            "Failed to list bucket"
        );
        AppError::Storage(LIST_FAILED_MESSAGE.to_string())
    })?;

    let files = build_listing(
        objects,
        &state.urls,
        &state.uploads().listing_metadata_prefix,
    );

    Ok(Json(ListFilesResponse {
        success: true,
        files,
    }))
}

/// Map stored objects to listing entries, preserving the store's order.
pub(crate) fn build_listing(
    objects: Vec<StoredObject>,
    urls: &ObjectUrls,
    metadata_prefix: &str,
) -> Vec<FileEntry> {
    objects
        .into_iter()
        .map(|object| FileEntry {
            file_url: urls.public_url(&object.key),
            file_type: FileType::classify(&object.key, metadata_prefix),
            last_modified: object.last_modified,
            size: object.size,
            file_name: object.key,
        })
        .collect()
}
