//! Common utilities for the upload handlers

use axum::extract::multipart::MultipartError;
use axum::extract::Multipart;
use axum::http::StatusCode;
use vcfgw_core::constants::{DEFAULT_CONTENT_TYPE, UPLOAD_FIELD_NAME};
use vcfgw_core::models::UploadCategory;
use vcfgw_core::AppError;

use crate::services::upload::ReceivedFile;

pub const FILE_TOO_LARGE_MESSAGE: &str = "File too large";

fn map_multipart_error(e: MultipartError) -> AppError {
    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge(FILE_TOO_LARGE_MESSAGE.to_string())
    } else {
        AppError::InvalidInput(format!("Failed to read multipart: {}", e.body_text()))
    }
}

/// Extract the `file` part from a multipart form.
///
/// A `file` part without a filename is a plain form field and does not count
/// as a file. When the category restricts the content type, the declared type
/// is checked before any of the part's bytes are read. Only one file part is
/// accepted.
pub async fn extract_multipart_file(
    mut multipart: Multipart,
    category: UploadCategory,
) -> Result<ReceivedFile, AppError> {
    let mut received: Option<ReceivedFile> = None;

    while let Some(field) = multipart.next_field().await.map_err(map_multipart_error)? {
        if field.name() != Some(UPLOAD_FIELD_NAME) {
            continue;
        }
        let Some(original_filename) = field.file_name().map(|s| s.to_string()) else {
            continue;
        };

        if received.is_some() {
            return Err(AppError::InvalidInput(
                "Multiple file fields are not allowed; send exactly one field named 'file'"
                    .to_string(),
            ));
        }

        let content_type = field
            .content_type()
            .map(|s| s.to_string())
            .unwrap_or_else(|| DEFAULT_CONTENT_TYPE.to_string());

        validate_content_type(&content_type, category)?;

        let data = field.bytes().await.map_err(map_multipart_error)?;

        received = Some(ReceivedFile {
            data: data.to_vec(),
            original_filename,
            content_type,
        });
    }

    received.ok_or_else(|| AppError::MissingFile(category.missing_file_message().to_string()))
}

/// The declared type must equal the category's required type exactly.
pub fn validate_content_type(content_type: &str, category: UploadCategory) -> Result<(), AppError> {
    match category.required_content_type() {
        Some(required) if content_type != required => {
            Err(AppError::InvalidInput(category.wrong_type_message().to_string()))
        }
        _ => Ok(()),
    }
}

/// Validate file size
pub fn validate_file_size(file_size: usize, max_size: usize) -> Result<(), AppError> {
    if file_size > max_size {
        return Err(AppError::PayloadTooLarge(FILE_TOO_LARGE_MESSAGE.to_string()));
    }
    Ok(())
}

/// Sanitize filename to prevent path traversal and invalid characters.
/// Returns an error if the filename contains path traversal attempts.
pub fn sanitize_filename(filename: &str) -> Result<String, AppError> {
    const MAX_FILENAME_LENGTH: usize = 255;

    let filename_only = filename
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(filename);

    if filename_only.contains("..") {
        return Err(AppError::InvalidInput(
            "Filename contains invalid path traversal".to_string(),
        ));
    }

    let sanitized: String = filename_only
        .chars()
        .take(MAX_FILENAME_LENGTH)
        .map(|c| {
            if c.is_alphanumeric() || c == '.' || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();

    if sanitized.trim_matches(['.', '_']).is_empty() {
        return Ok("file".to_string());
    }

    Ok(sanitized)
}
