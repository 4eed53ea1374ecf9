//! Fixed values of the upload and listing contract.

/// Every uploaded object is stored under this prefix.
pub const UPLOAD_KEY_PREFIX: &str = "input/";

/// Listing entries whose key starts with this prefix are classified as metadata.
pub const DEFAULT_LISTING_METADATA_PREFIX: &str = "metadata/";

/// The only content type accepted on the metadata route.
pub const METADATA_CONTENT_TYPE: &str = "text/csv";

/// Content type assumed when a multipart part does not declare one.
pub const DEFAULT_CONTENT_TYPE: &str = "text/plain";

/// Multipart field carrying the uploaded file.
pub const UPLOAD_FIELD_NAME: &str = "file";

/// Headroom added to the per-route body limit for multipart framing.
pub const MULTIPART_OVERHEAD_BYTES: usize = 64 * 1024;

pub const DEFAULT_METADATA_MAX_SIZE_MB: usize = 10;
pub const DEFAULT_VCF_MAX_SIZE_MB: usize = 50;
pub const DEFAULT_SERVER_PORT: u16 = 3000;
