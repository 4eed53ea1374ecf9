use serde::Serialize;
use utoipa::ToSchema;

use crate::config::UploadConfig;
use crate::constants::METADATA_CONTENT_TYPE;

/// Upload category; fixes the validation rules and the messages of a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum UploadCategory {
    /// CSV sample metadata.
    Metadata,
    /// Variant-call files (gzip-compressed VCF).
    Vcf,
}

impl UploadCategory {
    /// Content type the declared MIME type must equal, if the category restricts it.
    pub fn required_content_type(&self) -> Option<&'static str> {
        match self {
            UploadCategory::Metadata => Some(METADATA_CONTENT_TYPE),
            // gzip filter intentionally left off: any type is accepted
            UploadCategory::Vcf => None,
        }
    }

    pub fn max_size_bytes(&self, config: &UploadConfig) -> usize {
        match self {
            UploadCategory::Metadata => config.metadata_max_size_bytes,
            UploadCategory::Vcf => config.vcf_max_size_bytes,
        }
    }

    pub fn missing_file_message(&self) -> &'static str {
        match self {
            UploadCategory::Metadata => "No CSV file uploaded",
            UploadCategory::Vcf => "No VCF file uploaded",
        }
    }

    pub fn wrong_type_message(&self) -> &'static str {
        match self {
            UploadCategory::Metadata => "Only CSV files are allowed!",
            UploadCategory::Vcf => "File type not allowed",
        }
    }

    pub fn success_message(&self) -> &'static str {
        match self {
            UploadCategory::Metadata => "Metadata CSV uploaded successfully",
            UploadCategory::Vcf => "VCF file uploaded successfully",
        }
    }

    /// Client message for a storage failure when error detail is not exposed.
    pub fn upload_failed_message(&self) -> &'static str {
        match self {
            UploadCategory::Metadata => "Failed to upload CSV file",
            UploadCategory::Vcf => "Failed to upload VCF file",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            UploadCategory::Metadata => "metadata",
            UploadCategory::Vcf => "vcf",
        }
    }
}

/// Body returned by a successful upload.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UploadResponse {
    pub success: bool,
    pub message: String,
    /// `s3://<bucket>/<key>` locator of the stored object; null if it could not be derived.
    pub file_url: Option<String>,
}

impl UploadResponse {
    pub fn stored(category: UploadCategory, file_url: Option<String>) -> Self {
        Self {
            success: true,
            message: category.success_message().to_string(),
            file_url,
        }
    }
}
