//! Types used by the upload service

/// File part pulled out of the multipart body, before validation.
#[derive(Debug)]
pub struct ReceivedFile {
    pub data: Vec<u8>,
    pub original_filename: String,
    pub content_type: String,
}

/// Result of a successful upload
#[derive(Debug, Clone)]
pub struct UploadOutcome {
    pub storage_key: String,
    /// `s3://bucket/key`; `None` when the public URL could not be parsed
    pub storage_uri: Option<String>,
    pub file_size: usize,
}
