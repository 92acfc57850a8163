use axum::{
    Json,
    http::{HeaderMap, HeaderValue, header::SET_COOKIE},
    response::IntoResponse,
};
use serde::Deserialize;
use serde_json::json;

use crate::{pkg::internal::auth, prelude::Result};

#[derive(Deserialize)]
pub struct LoginInput {
    pub password: String,
}

pub async fn login(Json(input): Json<LoginInput>) -> Result<impl IntoResponse> {
    auth::check_password(&input.password)?;
    let mut headers = HeaderMap::new();
    headers.insert(SET_COOKIE, HeaderValue::from_str(&auth::session_cookie())?);
    tracing::info!("admin logged in");
    Ok((headers, Json(json!({ "success": true }))))
}

pub async fn logout() -> Result<impl IntoResponse> {
    let mut headers = HeaderMap::new();
    headers.insert(SET_COOKIE, HeaderValue::from_str(&auth::logout_cookie())?);
    tracing::info!("admin logged out");
    Ok((headers, Json(json!({ "success": true }))))
}
