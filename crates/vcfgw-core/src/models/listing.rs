use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

/// Type label derived from an object's key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum FileType {
    Metadata,
    Vcf,
}

impl FileType {
    /// Keys starting with `metadata_prefix` are metadata; everything else is vcf.
    pub fn classify(key: &str, metadata_prefix: &str) -> Self {
        if key.starts_with(metadata_prefix) {
            FileType::Metadata
        } else {
            FileType::Vcf
        }
    }
}

/// One object of the bucket as shown to clients.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FileEntry {
    pub file_name: String,
    pub file_url: String,
    pub last_modified: DateTime<Utc>,
    pub size: u64,
    #[serde(rename = "type")]
    pub file_type: FileType,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ListFilesResponse {
    pub success: bool,
    pub files: Vec<FileEntry>,
}
