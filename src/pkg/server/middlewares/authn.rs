use axum::{
    extract::Request,
    http::HeaderMap,
    middleware::Next,
    response::Response,
};
use axum_extra::extract::CookieJar;

use crate::{pkg::internal::auth, prelude::{AppError, Result}};

/// Guards the HR surface: every route behind this layer requires the admin
/// session cookie set by login.
pub async fn authenticate(headers: HeaderMap, request: Request, next: Next) -> Result<Response> {
    let jar = CookieJar::from_headers(&headers);
    if auth::is_admin(&jar) {
        return Ok(next.run(request).await);
    }
    tracing::warn!("admin session cookie missing, authentication denied");
    Err(AppError::Unauthorized)
}
