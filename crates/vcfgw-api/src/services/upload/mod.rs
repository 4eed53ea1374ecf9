//! Upload pipeline shared by the metadata and VCF routes.

mod service;
mod types;

pub use service::UploadService;
pub use types::{ReceivedFile, UploadOutcome};
