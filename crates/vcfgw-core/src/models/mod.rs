pub mod listing;
pub mod upload;

pub use listing::{FileEntry, FileType, ListFilesResponse};
pub use upload::{UploadCategory, UploadResponse};
