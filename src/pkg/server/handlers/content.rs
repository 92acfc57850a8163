use axum::{Json, extract::State};
use serde_json::{Value, json};

use crate::{
    conf::settings,
    pkg::{
        internal::adaptors::content::{selectors::ContentSelector, spec::ConsultantContent},
        server::state::AppState,
    },
};

/// Public testimonials for the candidate page. Degrades to an empty list
/// when the backing store is unreachable; the page renders without the
/// section rather than erroring.
pub async fn recommendations(State(state): State<AppState>) -> Json<Value> {
    let list = match ContentSelector::new(&state.sheets).recommendations().await {
        Ok(list) => list,
        Err(err) => {
            tracing::error!("recommendations fetch failed: {}", err);
            Vec::new()
        }
    };
    Json(json!({
        "recommendations": list,
        "linkedInProfileUrl": settings.linkedin_profile_url,
    }))
}

/// Public consultant section content, same degrade-to-empty contract.
pub async fn consultant_content(State(state): State<AppState>) -> Json<ConsultantContent> {
    let content = match ContentSelector::new(&state.sheets).consultant_content().await {
        Ok(content) => content,
        Err(err) => {
            tracing::error!("consultant content fetch failed: {}", err);
            ConsultantContent::default()
        }
    };
    Json(content)
}
