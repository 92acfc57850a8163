use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    InvalidArgument(String),

    #[error("Unauthorized.")]
    Unauthorized,

    #[error("{0}")]
    NotFound(String),

    #[error("backing store error: {0}")]
    Sheets(#[from] reqwest::Error),

    #[error("object store error: {0}")]
    Blob(String),

    #[error("upload error: {0}")]
    Upload(#[from] axum::extract::multipart::MultipartError),

    #[error("header error: {0}")]
    Header(#[from] axum::http::header::InvalidHeaderValue),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::InvalidArgument(_) | AppError::Upload(_) => StatusCode::BAD_REQUEST,
            AppError::Unauthorized => StatusCode::UNAUTHORIZED,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Sheets(_) => StatusCode::BAD_GATEWAY,
            AppError::Blob(_) | AppError::Header(_) | AppError::Io(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        if status.is_server_error() {
            tracing::error!("request failed: {}", &self);
        }
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
