use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Application-level errors
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("Invalid genre: {0}")]
    InvalidGenre(String),

    #[error("Invalid language: {0}")]
    InvalidLanguage(String),

    #[error("Not found: {0}")]
    NotFound(String),

    /// Network error, timeout or non-success status from the search target
    #[error("Fetch failed: {0}")]
    FetchFailed(String),

    /// The fetched document contained no usable titles
    #[error("No titles extracted from {0}")]
    ExtractionEmpty(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            AppError::FetchFailed(format!("request timed out: {}", err))
        } else {
            AppError::FetchFailed(err.to_string())
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::InvalidGenre(_) | AppError::InvalidLanguage(_) => {
                (StatusCode::BAD_REQUEST, self.to_string())
            }
            AppError::InvalidInput(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::FetchFailed(_) | AppError::ExtractionEmpty(_) => {
                (StatusCode::BAD_GATEWAY, self.to_string())
            }
            AppError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()),
        };

        let body = Json(json!({
            "error": message
        }));

        (status, body).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;
