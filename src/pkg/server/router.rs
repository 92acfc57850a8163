use axum::extract::DefaultBodyLimit;
use axum::middleware::from_fn;
use axum::routing::post;
use axum::{Router, routing::get};

use super::handlers;
use super::handlers::auth::{login, logout};
use super::handlers::probes::{healthz, livez};
use super::middlewares::authn;
use super::state::AppState;
use crate::prelude::Result;

pub async fn build_routes() -> Result<Router> {
    let state = AppState::new().await?;
    let app = Router::new()
        .route("/api/candidates", get(handlers::candidates::list))
        .route("/api/update-candidate", post(handlers::candidates::update))
        .route("/api/delete-candidate", post(handlers::candidates::delete))
        .layer(from_fn(authn::authenticate))
        .route("/api/submit-candidate", post(handlers::candidates::submit))
        .route("/api/recommendations", get(handlers::content::recommendations))
        .route(
            "/api/consultant-content",
            get(handlers::content::consultant_content),
        )
        .route("/api/admin-login", post(login))
        .route("/api/admin-logout", post(logout))
        .route("/healthz", get(healthz))
        .route("/livez", get(livez))
        .layer(DefaultBodyLimit::max(10 * 1024 * 1024))
        .with_state(state);

    Ok(app)
}
