//! Shared key generation for uploads.

use vcfgw_core::constants::UPLOAD_KEY_PREFIX;

/// Storage key for an uploaded file: `input/{filename}`.
///
/// The filename is used as given; a second upload with the same name
/// overwrites the first.
pub fn generate_storage_key(filename: &str) -> String {
    format!("{}{}", UPLOAD_KEY_PREFIX, filename)
}
