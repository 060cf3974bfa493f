//! Handler-boundary error type rendering `{"error": ...}` bodies.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use kiosk_shared::ErrorBody;
use std::fmt;

/// Application-level error; every variant carries its user-facing message.
///
/// Internal errors are logged server-side before rendering; nothing beyond
/// the message reaches the client.
#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    NotFound(String),
    Forbidden(String),
    Internal(String),
}

impl ApiError {
    fn message(&self) -> &str {
        match self {
            ApiError::BadRequest(msg)
            | ApiError::NotFound(msg)
            | ApiError::Forbidden(msg)
            | ApiError::Internal(msg) => msg,
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Forbidden(_) => StatusCode::FORBIDDEN,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        if let ApiError::Internal(msg) = self {
            tracing::error!("Internal error: {}", msg);
        }
        HttpResponse::build(self.status_code()).json(ErrorBody::new(self.message()))
    }
}

/// Result type alias for handlers.
pub type ApiResult<T> = Result<T, ApiError>;
