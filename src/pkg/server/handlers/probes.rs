use axum::extract::State;

use crate::{conf::settings, pkg::server::state::AppState, prelude::Result};

pub async fn livez() -> Result<()> {
    tracing::debug!("service is live");
    Ok(())
}

pub async fn healthz(State(state): State<AppState>) -> Result<()> {
    state
        .sheets
        .get_values(&format!("{}!A1:A1", settings.sheet_tab))
        .await?;
    tracing::debug!("service is healthy");
    Ok(())
}
