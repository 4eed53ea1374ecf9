//! Application state shared by all handlers.
//!
//! Built once at startup and handed to the router behind an `Arc`; nothing in
//! it is mutated after construction.

use std::sync::Arc;
use vcfgw_core::{Config, UploadConfig};
use vcfgw_storage::{ObjectUrls, Storage};

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub storage: Arc<dyn Storage>,
    pub urls: ObjectUrls,
}

impl AppState {
    pub fn new(config: Config, storage: Arc<dyn Storage>) -> Self {
        let urls = ObjectUrls::from_config(&config.storage);
        Self {
            config,
            storage,
            urls,
        }
    }

    pub fn uploads(&self) -> &UploadConfig {
        &self.config.uploads
    }
}
