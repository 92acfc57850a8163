use crate::{
    pkg::internal::{blob::BlobStore, sheets::SheetsClient},
    prelude::Result,
};

/// One-time bootstrap: writes the header row if the sheet tab is empty and
/// makes sure the resume bucket exists.
pub async fn apply() -> Result<()> {
    let sheets = SheetsClient::new()?;
    sheets.ensure_header().await?;
    tracing::debug!("header row present");

    let blob = BlobStore::new().await;
    blob.ensure_bucket().await?;
    tracing::debug!("resume bucket present");

    println!("Backing store initialized successfully");
    Ok(())
}
