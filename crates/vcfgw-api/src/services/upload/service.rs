//! Upload service
//!
//! One pipeline for both categories: extract → validate → key → store.
//! The category decides the MIME rule, the size limit and the messages.

use std::sync::Arc;

use axum::extract::Multipart;
use vcfgw_core::models::UploadCategory;
use vcfgw_core::AppError;
use vcfgw_storage::keys::generate_storage_key;

use crate::state::AppState;
use crate::utils::upload::{extract_multipart_file, sanitize_filename, validate_file_size};

use super::types::{ReceivedFile, UploadOutcome};

pub struct UploadService {
    state: Arc<AppState>,
}

impl UploadService {
    pub fn new(state: &Arc<AppState>) -> Self {
        Self {
            state: state.clone(),
        }
    }

    /// Complete upload workflow for one request.
    ///
    /// Validation failures return before the store is contacted. A storage
    /// failure is logged with its full detail and mapped to
    /// [`AppError::Storage`] carrying either that detail or the category's
    /// fallback message, depending on `EXPOSE_STORAGE_ERRORS`.
    pub async fn upload(
        &self,
        multipart: Multipart,
        category: UploadCategory,
    ) -> Result<UploadOutcome, AppError> {
        let file = self.extract_and_validate(multipart, category).await?;
        let storage_key = self.storage_key_for(&file.original_filename)?;
        let file_size = file.data.len();

        if let Err(e) = self
            .state
            .storage
            .put_object(&storage_key, file.data, &file.content_type)
            .await
        {
            tracing::error!(
                error = %e,
                category = category.as_str(),
                key = %storage_key,
                bucket = %self.state.urls.bucket(),
                size_bytes = file_size,
                "Upload to object store failed"
            );

            let message = if self.state.uploads().expose_storage_errors {
                e.message()
            } else {
                category.upload_failed_message().to_string()
            };
            return Err(AppError::Storage(message));
        }

        let storage_uri = self.state.urls.storage_uri(&storage_key);

        tracing::info!(
            category = category.as_str(),
            key = %storage_key,
            content_type = %file.content_type,
            size_bytes = file_size,
            "File uploaded"
        );

        Ok(UploadOutcome {
            storage_key,
            storage_uri,
            file_size,
        })
    }

    async fn extract_and_validate(
        &self,
        multipart: Multipart,
        category: UploadCategory,
    ) -> Result<ReceivedFile, AppError> {
        let file = extract_multipart_file(multipart, category).await?;
        validate_file_size(file.data.len(), category.max_size_bytes(self.state.uploads()))?;
        Ok(file)
    }

    fn storage_key_for(&self, original_filename: &str) -> Result<String, AppError> {
        if self.state.uploads().sanitize_filenames {
            let safe = sanitize_filename(original_filename)?;
            Ok(generate_storage_key(&safe))
        } else {
            Ok(generate_storage_key(original_filename))
        }
    }
}
