use std::sync::Arc;

use crate::{
    pkg::internal::{blob::BlobStore, sheets::SheetsClient},
    prelude::Result,
};

#[derive(Debug, Clone)]
pub struct AppState {
    pub sheets: Arc<SheetsClient>,
    pub blob: Arc<BlobStore>,
}

impl AppState {
    pub async fn new() -> Result<AppState> {
        Ok(AppState {
            sheets: Arc::new(SheetsClient::new()?),
            blob: Arc::new(BlobStore::new().await),
        })
    }
}
